// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Settings key holding the result cap.
pub const WMTS_LIMIT_KEY: &str = "wmts_limit";

/// Source of user-tunable locator settings, consulted on every query.
pub trait SettingsProvider: Send + Sync {
    /// Maximum number of results emitted per query.
    fn wmts_limit(&self) -> usize;
}

/// In-memory settings whose limit can be changed between queries.
#[derive(Debug)]
pub struct StaticSettings {
    wmts_limit: AtomicUsize,
}

impl StaticSettings {
    pub fn new(wmts_limit: usize) -> Self {
        Self {
            wmts_limit: AtomicUsize::new(wmts_limit),
        }
    }

    pub fn set_wmts_limit(&self, limit: usize) {
        self.wmts_limit.store(limit, Ordering::Relaxed);
    }
}

impl SettingsProvider for StaticSettings {
    fn wmts_limit(&self) -> usize {
        self.wmts_limit.load(Ordering::Relaxed)
    }
}
