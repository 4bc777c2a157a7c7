// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::layer::LayerDefinition;
use serde::{Deserialize, Serialize};

/// A single search hit handed to the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocatorResult {
    /// Name of the filter that produced the result
    pub filter: String,
    pub display_string: String,
    pub description: String,
    /// Icon resource the host shows next to the result
    pub icon: String,
    /// Relevance, lower is better
    pub score: u8,
    pub user_data: LayerDefinition,
}

impl LocatorResult {
    pub fn new(filter: &str, definition: LayerDefinition, description: String, score: u8) -> Self {
        Self {
            filter: filter.to_string(),
            display_string: definition.title.clone(),
            description,
            icon: "/mActionAddWmsLayer.svg".to_string(),
            score,
            user_data: definition,
        }
    }
}
