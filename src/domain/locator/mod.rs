// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 定位过滤器接口
///
/// 宿主应用通过该接口分发查询并接收逐条发出的结果
pub mod filter;
pub mod settings_provider;

pub use filter::{Feedback, LocatorContext, LocatorError, LocatorFilter, ResultSink};
pub use settings_provider::{SettingsProvider, StaticSettings};
