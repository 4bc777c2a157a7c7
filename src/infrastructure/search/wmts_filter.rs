// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::locator::filter::{
    Feedback, LocatorContext, LocatorError, LocatorFilter, ResultSink,
};
use crate::domain::locator::settings_provider::{SettingsProvider, WMTS_LIMIT_KEY};
use crate::domain::models::layer::LayerDefinition;
use crate::domain::models::locator_result::LocatorResult;
use crate::domain::services::match_scorer::MatchScorer;
use crate::infrastructure::capabilities::{
    parse_capabilities_file, CapabilitiesDocument, CapabilitiesError,
};
use crate::infrastructure::fetcher::{ContentFetcher, ContentStatus, FetchOutcome};
use crate::utils::language::normalize_language;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, error, info, warn};

pub const FILTER_NAME: &str = "swiss_locator_filter_wmts";
pub const FILTER_PREFIX: &str = "chw";
pub const FILTER_DISPLAY_NAME: &str = "Swiss Geoportal WMTS Layers";
pub const DEFAULT_SERVICE_URL: &str = "https://wmts.geo.admin.ch";

/// Shorter searches are ignored.
const MIN_SEARCH_CHARS: usize = 2;

/// CRS and language the filter is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmtsFilterConfig {
    pub crs: String,
    pub lang: String,
    pub service_url: String,
}

impl WmtsFilterConfig {
    /// `lang` accepts any locale; it is reduced to a language the
    /// geoportal serves.
    pub fn new(crs: &str, lang: &str) -> Self {
        Self {
            crs: crs.to_string(),
            lang: normalize_language(lang).to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }

    pub fn with_service_url(mut self, service_url: &str) -> Self {
        self.service_url = service_url.trim_end_matches('/').to_string();
        self
    }

    pub fn capabilities_url(&self) -> String {
        format!(
            "{}/EPSG/{}/1.0.0/WMTSCapabilities.xml?lang={}",
            self.service_url, self.crs, self.lang
        )
    }
}

#[derive(Debug, Clone)]
enum DocumentState {
    Pending,
    Ready(Arc<CapabilitiesDocument>),
    Failed(CapabilitiesError),
}

/// Locator filter answering queries from the geoportal's WMTS capabilities.
///
/// The capabilities document is fetched once, in the background, when the
/// filter is created interactively. Queries issued before it arrives return
/// no results.
pub struct WmtsLocatorFilter {
    config: WmtsFilterConfig,
    capabilities_url: String,
    settings: Arc<dyn SettingsProvider>,
    document: Arc<RwLock<DocumentState>>,
    result_found: AtomicBool,
}

impl WmtsLocatorFilter {
    /// Creates a filter.
    ///
    /// A supplied `capabilities` document is used as is. Otherwise, when a
    /// `fetcher` is given, the capabilities are requested through it: an
    /// already finished fetch is parsed right away, a pending one is parsed
    /// when it completes. Without either the filter stays empty.
    pub fn new(
        config: WmtsFilterConfig,
        settings: Arc<dyn SettingsProvider>,
        capabilities: Option<Arc<CapabilitiesDocument>>,
        fetcher: Option<&dyn ContentFetcher>,
    ) -> Result<Self, CapabilitiesError> {
        let capabilities_url = config.capabilities_url();
        let initial = match capabilities {
            Some(document) => DocumentState::Ready(document),
            None => DocumentState::Pending,
        };

        let filter = Self {
            config,
            capabilities_url,
            settings,
            document: Arc::new(RwLock::new(initial)),
            result_found: AtomicBool::new(false),
        };

        if let Some(fetcher) = fetcher {
            if !filter.is_ready() {
                filter.request_capabilities(fetcher)?;
            }
        }

        Ok(filter)
    }

    fn request_capabilities(&self, fetcher: &dyn ContentFetcher) -> Result<(), CapabilitiesError> {
        let content = fetcher.fetch(&self.capabilities_url);
        debug!(url = %self.capabilities_url, status = ?content.status(), "Requested capabilities");

        if content.status() == ContentStatus::Finished {
            if let Some(path) = content.file_path() {
                info!(path = %path.display(), "Capabilities already downloaded, reading from cache");
                let document = parse_capabilities_file(&path)?;
                *self.document.write() = DocumentState::Ready(Arc::new(document));
                return Ok(());
            }
        }

        // Download first: a failed handle restarts and drops its old outcome.
        content.download();
        let slot = Arc::downgrade(&self.document);
        content.on_fetched(Box::new(move |outcome| {
            handle_capabilities_response(&slot, outcome);
        }));
        Ok(())
    }

    /// Applies a completed fetch to this filter.
    pub fn handle_capabilities_response(&self, outcome: &FetchOutcome) {
        handle_capabilities_response(&Arc::downgrade(&self.document), outcome);
    }

    pub fn config(&self) -> &WmtsFilterConfig {
        &self.config
    }

    pub fn crs(&self) -> &str {
        &self.config.crs
    }

    pub fn lang(&self) -> &str {
        &self.config.lang
    }

    pub fn capabilities_url(&self) -> &str {
        &self.capabilities_url
    }

    /// The parsed document, if it has arrived.
    pub fn capabilities(&self) -> Option<Arc<CapabilitiesDocument>> {
        match &*self.document.read() {
            DocumentState::Ready(document) => Some(document.clone()),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.document.read(), DocumentState::Ready(_))
    }

    /// Every match in rank order, without applying the result limit.
    pub fn rank(
        &self,
        search: &str,
        document: &CapabilitiesDocument,
    ) -> Result<Vec<LocatorResult>, LocatorError> {
        let scorer = MatchScorer::new(search);
        let mut results = Vec::new();

        for layer in document.layers() {
            let Some(identifier) = layer.identifier() else {
                continue;
            };
            let Some(score) = scorer.score(
                identifier,
                layer.title.as_deref(),
                layer.abstract_text.as_deref(),
            ) else {
                continue;
            };

            let definition = LayerDefinition::from_entry(layer, &self.capabilities_url)?;
            let description = layer.abstract_text()?.to_string();
            results.push(LocatorResult::new(
                FILTER_NAME,
                definition,
                description,
                score.value(),
            ));
        }

        // Stable, so equal scores keep document order.
        results.sort_by_key(|result| result.score);
        Ok(results)
    }
}

fn handle_capabilities_response(slot: &Weak<RwLock<DocumentState>>, outcome: &FetchOutcome) {
    let Some(slot) = slot.upgrade() else {
        debug!("Filter dropped before capabilities arrived");
        return;
    };

    match outcome {
        FetchOutcome::Finished(path) => {
            info!(path = %path.display(), "Capabilities downloaded, reading");
            let state = match parse_capabilities_file(path) {
                Ok(document) => {
                    debug!(layers = document.len(), service = ?document.service_title(), "Capabilities parsed");
                    DocumentState::Ready(Arc::new(document))
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to parse capabilities");
                    DocumentState::Failed(e)
                }
            };
            *slot.write() = state;
        }
        FetchOutcome::Failed(reason) => {
            warn!(reason = %reason, "Capabilities download failed");
        }
    }
}

impl LocatorFilter for WmtsLocatorFilter {
    fn name(&self) -> &'static str {
        FILTER_NAME
    }

    fn display_name(&self) -> &'static str {
        FILTER_DISPLAY_NAME
    }

    fn prefix(&self) -> &'static str {
        FILTER_PREFIX
    }

    fn clone_filter(&self) -> Box<dyn LocatorFilter> {
        let capabilities = self.capabilities();
        let initial = match capabilities {
            Some(document) => DocumentState::Ready(document),
            None => DocumentState::Pending,
        };

        Box::new(Self {
            config: self.config.clone(),
            capabilities_url: self.capabilities_url.clone(),
            settings: self.settings.clone(),
            document: Arc::new(RwLock::new(initial)),
            result_found: AtomicBool::new(false),
        })
    }

    fn fetch_results(
        &self,
        search: &str,
        _context: &LocatorContext,
        _feedback: &Feedback,
        sink: &mut dyn ResultSink,
    ) -> Result<(), LocatorError> {
        if search.chars().count() < MIN_SEARCH_CHARS {
            return Ok(());
        }

        let document = match &*self.document.read() {
            DocumentState::Ready(document) => document.clone(),
            DocumentState::Pending => {
                debug!(search = %search, "Capabilities not available yet");
                return Ok(());
            }
            DocumentState::Failed(e) => return Err(LocatorError::Parse(e.to_string())),
        };

        let results = self.rank(search, &document)?;
        let limit = self.settings.wmts_limit();
        debug!(search = %search, matches = results.len(), key = WMTS_LIMIT_KEY, limit, "Emitting results");

        for result in results.into_iter().take(limit) {
            sink.result_fetched(result);
            self.result_found.store(true, Ordering::Relaxed);
        }
        Ok(())
    }

    fn result_found(&self) -> bool {
        self.result_found.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "wmts_filter_test.rs"]
mod tests;
