// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::FetcherSettings;
use crate::infrastructure::fetcher::content_state::ContentState;
use crate::infrastructure::fetcher::traits::{
    ContentFetcher, ContentStatus, FetchError, FetchOutcome, FetchedCallback, FetchedContent,
};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};
use url::Url;

/// 内容获取器
///
/// 基于reqwest的获取服务：按URL去重句柄，并把下载的文档缓存到本地目录
pub struct ReqwestContentFetcher {
    client: reqwest::Client,
    cache_dir: PathBuf,
    cache_ttl: Duration,
    runtime: Handle,
    registry: Mutex<HashMap<String, Arc<ReqwestFetchedContent>>>,
}

impl ReqwestContentFetcher {
    /// 创建获取器
    ///
    /// 必须在 tokio 运行时内调用，下载任务会派发到该运行时
    pub fn new(settings: &FetcherSettings) -> Result<Self, FetchError> {
        let runtime = Handle::try_current().map_err(|e| FetchError::Runtime(e.to_string()))?;
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            cache_dir: settings.cache_dir(),
            cache_ttl: settings.cache_ttl(),
            runtime,
            registry: Mutex::new(HashMap::new()),
        })
    }

    /// 缓存文件路径：`<cache_dir>/<sha256(url)>.xml`
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.cache_dir.join(format!("{}.xml", hex::encode(digest)))
    }

    fn is_fresh(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .is_some_and(|age| age < self.cache_ttl)
    }
}

impl ContentFetcher for ReqwestContentFetcher {
    fn fetch(&self, url: &str) -> Arc<dyn FetchedContent> {
        let mut registry = self.registry.lock();
        if let Some(content) = registry.get(url) {
            return content.clone();
        }

        let path = self.cache_path(url);
        let state = if self.is_fresh(&path) {
            debug!(url = %url, path = %path.display(), "Using cached content");
            ContentState::finished(path.clone())
        } else {
            ContentState::new()
        };

        let content = Arc::new(ReqwestFetchedContent {
            url: url.to_string(),
            path,
            client: self.client.clone(),
            runtime: self.runtime.clone(),
            state: Arc::new(state),
        });
        registry.insert(url.to_string(), content.clone());
        content
    }
}

/// Handle for one URL fetched through [`ReqwestContentFetcher`].
pub struct ReqwestFetchedContent {
    url: String,
    path: PathBuf,
    client: reqwest::Client,
    runtime: Handle,
    state: Arc<ContentState>,
}

impl FetchedContent for ReqwestFetchedContent {
    fn url(&self) -> &str {
        &self.url
    }

    fn status(&self) -> ContentStatus {
        self.state.status()
    }

    fn file_path(&self) -> Option<PathBuf> {
        self.state.file_path()
    }

    fn on_fetched(&self, callback: FetchedCallback) {
        self.state.subscribe(callback);
    }

    fn download(&self) {
        let retry = self.status() == ContentStatus::Failed;
        if !self.state.begin_download() {
            return;
        }

        info!(url = %self.url, retry, "Downloading content");

        let client = self.client.clone();
        let url = self.url.clone();
        let path = self.path.clone();
        let state = self.state.clone();

        self.runtime.spawn(async move {
            let outcome = match fetch_to_file(&client, &url, &path).await {
                Ok(()) => {
                    info!(url = %url, path = %path.display(), "Content downloaded");
                    FetchOutcome::Finished(path)
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to fetch content");
                    FetchOutcome::Failed(e.to_string())
                }
            };
            state.complete(outcome);
        });
    }
}

async fn fetch_to_file(client: &reqwest::Client, url: &str, path: &Path) -> Result<(), FetchError> {
    let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    // Write next to the target first so readers never see a partial file.
    let partial = path.with_extension("xml.part");
    tokio::fs::write(&partial, &body).await?;
    tokio::fs::rename(&partial, path).await?;

    Ok(())
}

#[cfg(test)]
#[path = "reqwest_fetcher_test.rs"]
mod tests;
