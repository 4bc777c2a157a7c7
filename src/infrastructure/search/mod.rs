// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索模块
///
/// 提供基于瑞士地理门户 WMTS 能力文档的图层定位过滤器
pub mod wmts_filter;

pub use wmts_filter::{WmtsFilterConfig, WmtsLocatorFilter, FILTER_PREFIX};
