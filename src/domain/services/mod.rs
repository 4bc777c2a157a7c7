// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含搜索文本与图层标识、标题和摘要之间的匹配评分
pub mod match_scorer;

pub use match_scorer::{MatchScore, MatchScorer};
