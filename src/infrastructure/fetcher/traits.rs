// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 服务器返回非成功状态码
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    /// 无效的URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// 缓存文件读写失败
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 没有可用的 tokio 运行时
    #[error("No tokio runtime available: {0}")]
    Runtime(String),
}

/// 获取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    NotStarted,
    Downloading,
    Finished,
    Failed,
}

/// 获取完成时传给回调的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 文档已保存到该路径
    Finished(PathBuf),
    /// 下载失败及原因
    Failed(String),
}

pub type FetchedCallback = Box<dyn FnOnce(&FetchOutcome) + Send + 'static>;

/// 远程内容的获取句柄
pub trait FetchedContent: Send + Sync {
    /// 内容的来源地址
    fn url(&self) -> &str;

    /// 当前状态
    fn status(&self) -> ContentStatus;

    /// 下载完成后的本地文件路径
    fn file_path(&self) -> Option<PathBuf>;

    /// 注册完成回调
    ///
    /// 已完成的句柄会立即调用回调，否则在完成时按注册顺序调用一次
    fn on_fetched(&self, callback: FetchedCallback);

    /// 触发下载；已在下载或已完成时不做任何事
    fn download(&self);
}

/// 内容获取服务
pub trait ContentFetcher: Send + Sync {
    /// 获取 `url` 的句柄；同一地址返回同一句柄
    fn fetch(&self, url: &str) -> Arc<dyn FetchedContent>;
}
