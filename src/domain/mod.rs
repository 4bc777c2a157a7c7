// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 定位器模块
///
/// 定义宿主应用的定位过滤器接口、查询上下文和设置提供者
pub mod locator;

/// 模型模块
///
/// 定义图层条目、图层定义和定位结果
pub mod models;

/// 服务模块
///
/// 包含搜索文本与图层字段的匹配评分逻辑
pub mod services;
