// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 能力文档（capabilities）：解析 WMTS 能力文档 XML
/// - 内容获取（fetcher）：下载并在本地缓存远程文档
/// - 搜索（search）：基于能力文档的定位过滤器实现
pub mod capabilities;
pub mod fetcher;
pub mod search;
