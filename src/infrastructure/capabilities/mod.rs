// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 能力文档模块
///
/// 将 WMTS 能力文档解析为按文档顺序排列的图层条目
pub mod parser;

pub use parser::{
    parse_capabilities, parse_capabilities_file, CapabilitiesDocument, CapabilitiesError, OWS_NS,
    WMTS_NS,
};
