// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::fetcher::traits::{ContentStatus, FetchOutcome, FetchedCallback};
use parking_lot::Mutex;
use std::path::PathBuf;

/// Status, file path and pending callbacks of one fetch.
///
/// Callbacks always run outside the lock, so a callback may query the state
/// it was registered on.
pub struct ContentState {
    inner: Mutex<Inner>,
}

struct Inner {
    status: ContentStatus,
    outcome: Option<FetchOutcome>,
    callbacks: Vec<FetchedCallback>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                status: ContentStatus::NotStarted,
                outcome: None,
                callbacks: Vec::new(),
            }),
        }
    }

    /// A state that is already finished, e.g. backed by a cached file.
    pub fn finished(path: PathBuf) -> Self {
        Self {
            inner: Mutex::new(Inner {
                status: ContentStatus::Finished,
                outcome: Some(FetchOutcome::Finished(path)),
                callbacks: Vec::new(),
            }),
        }
    }

    pub fn status(&self) -> ContentStatus {
        self.inner.lock().status
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        match &self.inner.lock().outcome {
            Some(FetchOutcome::Finished(path)) => Some(path.clone()),
            _ => None,
        }
    }

    /// Moves `NotStarted` or `Failed` to `Downloading`; returns false while a
    /// download is running or once it has finished.
    ///
    /// Restarting a failed fetch drops its outcome, so callbacks registered
    /// from here on wait for the new attempt.
    pub fn begin_download(&self) -> bool {
        let mut inner = self.inner.lock();
        match inner.status {
            ContentStatus::NotStarted => {}
            ContentStatus::Failed => inner.outcome = None,
            ContentStatus::Downloading | ContentStatus::Finished => return false,
        }
        inner.status = ContentStatus::Downloading;
        true
    }

    pub fn subscribe(&self, callback: FetchedCallback) {
        let outcome = {
            let mut inner = self.inner.lock();
            if inner.outcome.is_none() {
                inner.callbacks.push(callback);
                return;
            }
            inner.outcome.clone()
        };

        if let Some(outcome) = outcome {
            callback(&outcome);
        }
    }

    /// Records the outcome and runs every pending callback in order.
    pub fn complete(&self, outcome: FetchOutcome) {
        let callbacks = {
            let mut inner = self.inner.lock();
            inner.status = match outcome {
                FetchOutcome::Finished(_) => ContentStatus::Finished,
                FetchOutcome::Failed(_) => ContentStatus::Failed,
            };
            inner.outcome = Some(outcome.clone());
            std::mem::take(&mut inner.callbacks)
        };

        for callback in callbacks {
            callback(&outcome);
        }
    }
}
