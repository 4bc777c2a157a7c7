// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::locator_result::LocatorResult;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// 定位过滤器错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// 能力文档无法解析
    #[error("Capabilities parse error: {0}")]
    Parse(String),
    /// 匹配的图层缺少必需字段
    #[error("Layer '{layer}' is missing field '{field}'")]
    MissingField { layer: String, field: &'static str },
}

/// 查询上下文
///
/// 宿主在每次查询时传入；图层搜索不依赖地图视图，因此不携带字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocatorContext;

/// 取消与进度反馈句柄
#[derive(Debug, Default)]
pub struct Feedback {
    canceled: AtomicBool,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// 结果接收器
///
/// 过滤器按排名顺序逐条推送结果
pub trait ResultSink {
    fn result_fetched(&mut self, result: LocatorResult);
}

impl ResultSink for Vec<LocatorResult> {
    fn result_fetched(&mut self, result: LocatorResult) {
        self.push(result);
    }
}

impl ResultSink for UnboundedSender<LocatorResult> {
    fn result_fetched(&mut self, result: LocatorResult) {
        // The receiving side may already have moved on to a newer query.
        let _ = self.send(result);
    }
}

/// 定位过滤器特质
///
/// 宿主搜索框的可插拔搜索提供者
pub trait LocatorFilter: Send + Sync {
    /// 过滤器内部名称
    fn name(&self) -> &'static str;

    /// 用户可见名称
    fn display_name(&self) -> &'static str;

    /// 宿主用于路由前缀查询的短前缀
    fn prefix(&self) -> &'static str;

    /// 获取一个独立的过滤器句柄
    fn clone_filter(&self) -> Box<dyn LocatorFilter>;

    /// 执行查询并将结果推送到 `sink`
    fn fetch_results(
        &self,
        search: &str,
        context: &LocatorContext,
        feedback: &Feedback,
        sink: &mut dyn ResultSink,
    ) -> Result<(), LocatorError>;

    /// 是否曾经发出过至少一条结果
    fn result_found(&self) -> bool;
}
