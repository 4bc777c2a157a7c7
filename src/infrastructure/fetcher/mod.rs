// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 内容获取模块
///
/// 定义获取句柄接口，并提供基于 reqwest 的带本地缓存的实现
pub mod content_state;
pub mod reqwest_fetcher;
pub mod traits;

pub use content_state::ContentState;
pub use reqwest_fetcher::ReqwestContentFetcher;
pub use traits::{
    ContentFetcher, ContentStatus, FetchError, FetchOutcome, FetchedCallback, FetchedContent,
};
