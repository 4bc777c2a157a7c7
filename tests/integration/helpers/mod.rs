// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use swiss_wmts_locator::config::settings::FetcherSettings;
use swiss_wmts_locator::domain::locator::{
    Feedback, LocatorContext, LocatorError, LocatorFilter, StaticSettings,
};
use swiss_wmts_locator::domain::models::locator_result::LocatorResult;
use swiss_wmts_locator::infrastructure::fetcher::{ContentFetcher, FetchOutcome};
use swiss_wmts_locator::infrastructure::search::{WmtsFilterConfig, WmtsLocatorFilter};
use tempfile::TempDir;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CAPABILITIES: &str = include_str!("../../fixtures/capabilities.xml");

/// A mock geoportal plus a scratch cache directory.
#[allow(dead_code)]
pub struct TestGeoportal {
    pub server: MockServer,
    pub cache_dir: TempDir,
}

impl TestGeoportal {
    /// Serves `body` as the EPSG:`crs` capabilities, expecting `hits` requests.
    pub async fn serve(crs: &str, lang: &str, body: &str, hits: u64) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/EPSG/{}/1.0.0/WMTSCapabilities.xml", crs)))
            .and(query_param("lang", lang))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/xml")
                    .set_body_string(body),
            )
            .expect(hits)
            .mount(&server)
            .await;

        Self {
            server,
            cache_dir: tempfile::tempdir().expect("temp cache dir"),
        }
    }

    /// Like [`serve`](Self::serve), but the first request gets `status`.
    pub async fn serve_after_outage(crs: &str, lang: &str, body: &str, status: u16) -> Self {
        let geoportal = Self::serve(crs, lang, body, 1).await;
        Mock::given(method("GET"))
            .and(path(format!("/EPSG/{}/1.0.0/WMTSCapabilities.xml", crs)))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(1)
            .with_priority(1)
            .expect(1)
            .mount(&geoportal.server)
            .await;
        geoportal
    }

    pub fn fetcher_settings(&self) -> FetcherSettings {
        FetcherSettings {
            cache_dir: self.cache_dir.path().display().to_string(),
            timeout_secs: 5,
            ..FetcherSettings::default()
        }
    }

    pub fn filter_config(&self, crs: &str, lang: &str) -> WmtsFilterConfig {
        WmtsFilterConfig::new(crs, lang).with_service_url(&self.server.uri())
    }

    pub fn filter(
        &self,
        fetcher: &dyn ContentFetcher,
        crs: &str,
        lang: &str,
        limit: usize,
    ) -> WmtsLocatorFilter {
        WmtsLocatorFilter::new(
            self.filter_config(crs, lang),
            Arc::new(StaticSettings::new(limit)),
            None,
            Some(fetcher),
        )
        .expect("filter construction")
    }
}

/// Waits until the fetch behind `filter` has completed.
pub async fn wait_for_capabilities(
    fetcher: &dyn ContentFetcher,
    filter: &WmtsLocatorFilter,
) -> FetchOutcome {
    let (tx, rx) = oneshot::channel();
    fetcher
        .fetch(filter.capabilities_url())
        .on_fetched(Box::new(move |outcome| {
            let _ = tx.send(outcome.clone());
        }));
    tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .expect("capabilities fetch timed out")
        .expect("fetch callback dropped")
}

pub fn run_query(
    filter: &dyn LocatorFilter,
    search: &str,
) -> Result<Vec<LocatorResult>, LocatorError> {
    let mut results = Vec::new();
    filter.fetch_results(
        search,
        &LocatorContext::default(),
        &Feedback::new(),
        &mut results,
    )?;
    Ok(results)
}
