// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::locator::filter::LocatorError;
use serde::{Deserialize, Serialize};

/// A `wmts:Layer` entry read from a capabilities document.
///
/// Every field is optional at the document level. The typed accessors turn
/// a missing field into [`LocatorError::MissingField`] for layers that have
/// to be turned into results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerEntry {
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub tile_matrix_set: Option<String>,
    pub format: Option<String>,
    pub style: Option<String>,
}

impl LayerEntry {
    /// Layer identifier, `None` when absent or empty.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref().filter(|id| !id.is_empty())
    }

    pub fn title(&self) -> Result<&str, LocatorError> {
        self.required(&self.title, "title")
    }

    pub fn abstract_text(&self) -> Result<&str, LocatorError> {
        self.required(&self.abstract_text, "abstract")
    }

    pub fn tile_matrix_set(&self) -> Result<&str, LocatorError> {
        self.required(&self.tile_matrix_set, "tile_matrix_set")
    }

    pub fn format(&self) -> Result<&str, LocatorError> {
        self.required(&self.format, "format")
    }

    pub fn style(&self) -> Result<&str, LocatorError> {
        self.required(&self.style, "style")
    }

    fn required<'a>(
        &self,
        value: &'a Option<String>,
        field: &'static str,
    ) -> Result<&'a str, LocatorError> {
        value.as_deref().ok_or_else(|| LocatorError::MissingField {
            layer: self.identifier.clone().unwrap_or_default(),
            field,
        })
    }
}

/// Everything a GIS host needs to add a WMTS layer to the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDefinition {
    pub layer: String,
    pub title: String,
    pub url: String,
    pub tile_matrix_set: String,
    pub format: String,
    pub style: String,
}

impl LayerDefinition {
    /// Builds the definition for a matched layer served from `url`.
    pub fn from_entry(entry: &LayerEntry, url: &str) -> Result<Self, LocatorError> {
        let layer = entry
            .identifier()
            .ok_or_else(|| LocatorError::MissingField {
                layer: String::new(),
                field: "identifier",
            })?;

        Ok(Self {
            layer: layer.to_string(),
            title: entry.title()?.to_string(),
            url: url.to_string(),
            tile_matrix_set: entry.tile_matrix_set()?.to_string(),
            format: entry.format()?.to_string(),
            style: entry.style()?.to_string(),
        })
    }

    /// Renders the WMTS data-source URI for a map in EPSG:`crs`.
    ///
    /// Parameter order is fixed so the URI is stable across runs.
    pub fn to_data_source_uri(&self, crs: &str) -> String {
        let crs = format!("EPSG:{}", crs);
        let params: [(&str, &str); 9] = [
            ("contextualWMSLegend", "0"),
            ("crs", crs.as_str()),
            ("dpiMode", "7"),
            ("featureCount", "10"),
            ("format", self.format.as_str()),
            ("layers", self.layer.as_str()),
            ("styles", self.style.as_str()),
            ("tileMatrixSet", self.tile_matrix_set.as_str()),
            ("url", self.url.as_str()),
        ];

        serde_urlencoded::to_string(&params[..]).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
