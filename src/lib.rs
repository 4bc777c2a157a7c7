// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理定位器的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含图层条目、定位结果、过滤器接口和匹配评分
pub mod domain;

/// 基础设施模块
///
/// 提供能力文档解析、内容获取和 WMTS 定位过滤器实现
pub mod infrastructure;

/// 工具模块
///
/// 提供语言处理和遥测初始化等通用功能
pub mod utils;
