// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::locator::settings_provider::SettingsProvider;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含定位过滤器和内容获取器的所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 定位过滤器配置
    pub locator: LocatorSettings,
    /// 内容获取器配置
    pub fetcher: FetcherSettings,
}

/// 定位过滤器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LocatorSettings {
    /// 坐标参考系 EPSG 代码 (2056, 21781, ...)
    pub crs: String,
    /// 界面语言 (de, fr, it, rm, en)
    pub lang: String,
    /// 每次查询返回的最大结果数
    pub wmts_limit: usize,
    /// WMTS 服务根地址
    pub service_url: String,
}

/// 内容获取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 能力文档的本地缓存目录
    pub cache_dir: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 缓存文件的有效期（秒）
    pub cache_ttl_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl FetcherSettings {
    pub fn cache_dir(&self) -> PathBuf {
        PathBuf::from(&self.cache_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            cache_dir: "./cache".to_string(),
            timeout_secs: 30,
            cache_ttl_secs: 86_400,
            user_agent: "swiss-wmts-locator/0.1".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `SWISS_LOCATOR__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Locator defaults
            .set_default("locator.crs", "2056")?
            .set_default("locator.lang", "en")?
            .set_default("locator.wmts_limit", 8)?
            .set_default("locator.service_url", "https://wmts.geo.admin.ch")?
            // Fetcher defaults
            .set_default("fetcher.cache_dir", "./cache")?
            .set_default("fetcher.timeout_secs", 30)?
            .set_default("fetcher.cache_ttl_secs", 86_400)?
            .set_default("fetcher.user_agent", "swiss-wmts-locator/0.1")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SWISS_LOCATOR").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl SettingsProvider for Settings {
    fn wmts_limit(&self) -> usize {
        self.locator.wmts_limit
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
