// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理定位器的配置设置，包括坐标参考系、界面语言、结果数量限制和下载缓存
pub mod settings;
