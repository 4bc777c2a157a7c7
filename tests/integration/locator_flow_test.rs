// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{run_query, wait_for_capabilities, TestGeoportal, CAPABILITIES};
use swiss_wmts_locator::domain::locator::{LocatorError, LocatorFilter};
use swiss_wmts_locator::infrastructure::fetcher::{FetchOutcome, ReqwestContentFetcher};

/// 端到端测试：下载能力文档后执行查询
#[tokio::test]
async fn test_query_after_capabilities_download() {
    let geoportal = TestGeoportal::serve("2056", "de", CAPABILITIES, 1).await;
    let fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();
    let filter = geoportal.filter(&fetcher, "2056", "de_CH", 10);

    // Nothing has been downloaded yet.
    assert!(run_query(&filter, "trails").unwrap().is_empty());

    let outcome = wait_for_capabilities(&fetcher, &filter).await;
    assert!(matches!(outcome, FetchOutcome::Finished(_)));
    assert!(filter.is_ready());

    let results = run_query(&filter, "trails").unwrap();
    let layers: Vec<&str> = results.iter().map(|r| r.user_data.layer.as_str()).collect();
    assert_eq!(
        layers,
        vec!["ch.swisstopo.swisstlm3d-wanderwege", "ch.astra.veloland"]
    );
    assert!(filter.result_found());

    let results = run_query(&filter, "pixelkarte").unwrap();
    assert_eq!(results.len(), 1);
    let definition = &results[0].user_data;
    assert_eq!(definition.url, filter.capabilities_url());
    assert_eq!(definition.format, "image/jpeg");

    let uri = definition.to_data_source_uri(filter.crs());
    assert!(uri.contains("layers=ch.swisstopo.pixelkarte-farbe"));
    assert!(uri.contains("tileMatrixSet=2056_26"));
}

#[tokio::test]
async fn test_second_fetcher_reuses_cached_document() {
    let geoportal = TestGeoportal::serve("2056", "fr", CAPABILITIES, 1).await;

    let first_fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();
    let first = geoportal.filter(&first_fetcher, "2056", "fr", 10);
    wait_for_capabilities(&first_fetcher, &first).await;

    let second_fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();
    let second = geoportal.filter(&second_fetcher, "2056", "fr", 10);

    // Read synchronously from the cache file at construction.
    assert!(second.is_ready());
    assert_eq!(
        run_query(&second, "veloland").unwrap(),
        run_query(&first, "veloland").unwrap()
    );
}

#[tokio::test]
async fn test_clone_answers_like_parent_filter() {
    let geoportal = TestGeoportal::serve("2056", "en", CAPABILITIES, 1).await;
    let fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();
    let filter = geoportal.filter(&fetcher, "2056", "en", 2);
    wait_for_capabilities(&fetcher, &filter).await;

    let clone = filter.clone_filter();
    let from_clone = run_query(clone.as_ref(), "ch.").unwrap();

    assert_eq!(from_clone.len(), 2);
    assert_eq!(from_clone, run_query(&filter, "ch.").unwrap());
}

#[tokio::test]
async fn test_truncated_document_fails_queries() {
    let truncated = &CAPABILITIES[..CAPABILITIES.len() / 3];
    let geoportal = TestGeoportal::serve("2056", "it", truncated, 1).await;
    let fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();
    let filter = geoportal.filter(&fetcher, "2056", "it", 10);

    let outcome = wait_for_capabilities(&fetcher, &filter).await;
    assert!(matches!(outcome, FetchOutcome::Finished(_)));

    assert!(matches!(
        run_query(&filter, "trails"),
        Err(LocatorError::Parse(_))
    ));
    assert!(!filter.is_ready());
}

#[tokio::test]
async fn test_new_filter_retries_after_failed_download() {
    let geoportal = TestGeoportal::serve_after_outage("2056", "de", CAPABILITIES, 503).await;
    let fetcher = ReqwestContentFetcher::new(&geoportal.fetcher_settings()).unwrap();

    let first = geoportal.filter(&fetcher, "2056", "de", 10);
    match wait_for_capabilities(&fetcher, &first).await {
        FetchOutcome::Failed(reason) => assert!(reason.contains("503")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(!first.is_ready());
    assert!(run_query(&first, "trails").unwrap().is_empty());

    let second = geoportal.filter(&fetcher, "2056", "de", 10);
    let outcome = wait_for_capabilities(&fetcher, &second).await;
    assert!(matches!(outcome, FetchOutcome::Finished(_)));
    assert!(second.is_ready());
    assert_eq!(run_query(&second, "trails").unwrap().len(), 2);
}
