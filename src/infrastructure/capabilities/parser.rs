// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::layer::LayerEntry;
use roxmltree::{Document, Node};
use std::path::Path;
use thiserror::Error;

pub const WMTS_NS: &str = "http://www.opengis.net/wmts/1.0";
pub const OWS_NS: &str = "http://www.opengis.net/ows/1.1";

/// 能力文档错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilitiesError {
    #[error("Malformed capabilities XML: {0}")]
    Malformed(String),
    #[error("Unexpected root element <{0}>, expected wmts:Capabilities")]
    UnexpectedRoot(String),
    #[error("Failed to read capabilities file {path}: {message}")]
    Io { path: String, message: String },
}

/// Parsed WMTS capabilities: the service title and every layer in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitiesDocument {
    service_title: Option<String>,
    layers: Vec<LayerEntry>,
}

impl CapabilitiesDocument {
    pub fn new(service_title: Option<String>, layers: Vec<LayerEntry>) -> Self {
        Self {
            service_title,
            layers,
        }
    }

    pub fn service_title(&self) -> Option<&str> {
        self.service_title.as_deref()
    }

    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Reads and parses a capabilities document stored on disk.
pub fn parse_capabilities_file(path: &Path) -> Result<CapabilitiesDocument, CapabilitiesError> {
    let xml = std::fs::read_to_string(path).map_err(|e| CapabilitiesError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_capabilities(&xml)
}

/// Parses a WMTS capabilities document.
///
/// Element matching is namespace-aware, so the prefixes chosen by the
/// publishing server do not matter.
pub fn parse_capabilities(xml: &str) -> Result<CapabilitiesDocument, CapabilitiesError> {
    let document =
        Document::parse(xml).map_err(|e| CapabilitiesError::Malformed(e.to_string()))?;
    let root = document.root_element();

    if !root.has_tag_name((WMTS_NS, "Capabilities")) {
        return Err(CapabilitiesError::UnexpectedRoot(
            root.tag_name().name().to_string(),
        ));
    }

    let service_title = root
        .children()
        .find(|n| n.has_tag_name((OWS_NS, "ServiceIdentification")))
        .and_then(|n| child_text(n, OWS_NS, "Title"));

    let layers = root
        .descendants()
        .filter(|n| n.has_tag_name((WMTS_NS, "Layer")))
        .map(read_layer)
        .collect();

    Ok(CapabilitiesDocument::new(service_title, layers))
}

fn read_layer(layer: Node<'_, '_>) -> LayerEntry {
    let style = layer
        .descendants()
        .filter(|n| n.has_tag_name((WMTS_NS, "Style")))
        .find_map(|style| {
            style
                .children()
                .find(|n| n.has_tag_name((OWS_NS, "Identifier")))
        })
        .and_then(node_text);

    LayerEntry {
        identifier: descendant_text(layer, OWS_NS, "Identifier"),
        title: descendant_text(layer, OWS_NS, "Title"),
        abstract_text: descendant_text(layer, OWS_NS, "Abstract"),
        tile_matrix_set: descendant_text(layer, WMTS_NS, "TileMatrixSet"),
        format: descendant_text(layer, WMTS_NS, "Format"),
        style,
    }
}

/// Text of the first matching descendant in document order.
fn descendant_text(node: Node<'_, '_>, namespace: &str, name: &str) -> Option<String> {
    node.descendants()
        .skip(1)
        .find(|n| n.has_tag_name((namespace, name)))
        .and_then(node_text)
}

fn child_text(node: Node<'_, '_>, namespace: &str, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name((namespace, name)))
        .and_then(node_text)
}

fn node_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
