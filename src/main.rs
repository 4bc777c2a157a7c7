// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use std::sync::Arc;
use swiss_wmts_locator::config::settings::Settings;
use swiss_wmts_locator::domain::locator::{Feedback, LocatorContext, LocatorFilter};
use swiss_wmts_locator::domain::models::locator_result::LocatorResult;
use swiss_wmts_locator::infrastructure::fetcher::{
    ContentFetcher, FetchOutcome, ReqwestContentFetcher,
};
use swiss_wmts_locator::infrastructure::search::{WmtsFilterConfig, WmtsLocatorFilter};
use swiss_wmts_locator::utils::telemetry;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// 主函数
///
/// 加载配置、获取能力文档并对命令行给出的文本执行一次查询
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry(telemetry::LogFormat::from_env());

    let search = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if search.trim().is_empty() {
        anyhow::bail!("usage: swiss-wmts-locator <search text>");
    }

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!(crs = %settings.locator.crs, lang = %settings.locator.lang, "Configuration loaded");

    // 3. Build the filter; this starts the capabilities download
    let fetcher = ReqwestContentFetcher::new(&settings.fetcher)?;
    let config = WmtsFilterConfig::new(&settings.locator.crs, &settings.locator.lang)
        .with_service_url(&settings.locator.service_url);
    let filter = WmtsLocatorFilter::new(config, settings.clone(), None, Some(&fetcher))?;

    // 4. Wait for the document; the filter's own callback was registered first
    let (ready_tx, ready_rx) = oneshot::channel();
    fetcher
        .fetch(filter.capabilities_url())
        .on_fetched(Box::new(move |outcome| {
            let _ = ready_tx.send(outcome.clone());
        }));
    match tokio::time::timeout(settings.fetcher.timeout(), ready_rx).await {
        Ok(Ok(FetchOutcome::Finished(path))) => {
            info!(path = %path.display(), "Capabilities fetch finished")
        }
        Ok(Ok(FetchOutcome::Failed(reason))) => {
            warn!(reason = %reason, "Capabilities fetch failed")
        }
        _ => warn!("Capabilities did not arrive in time"),
    }

    // 5. Run the query
    let mut results: Vec<LocatorResult> = Vec::new();
    filter.fetch_results(
        &search,
        &LocatorContext::default(),
        &Feedback::new(),
        &mut results,
    )?;

    for result in &results {
        let line = json!({
            "score": result.score,
            "title": result.display_string,
            "description": result.description,
            "layer": result.user_data,
            "uri": result.user_data.to_data_source_uri(filter.crs()),
        });
        println!("{}", line);
    }
    info!(count = results.len(), "Search finished");

    Ok(())
}
