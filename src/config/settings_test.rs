// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::Settings;
use crate::domain::locator::settings_provider::SettingsProvider;
use std::time::Duration;

#[test]
fn test_settings_defaults_and_env_override() {
    std::env::set_var("SWISS_LOCATOR__LOCATOR__WMTS_LIMIT", "3");

    let settings = Settings::new().expect("settings should load from defaults");

    std::env::remove_var("SWISS_LOCATOR__LOCATOR__WMTS_LIMIT");

    assert_eq!(settings.locator.wmts_limit, 3);
    assert_eq!(settings.wmts_limit(), 3);
    assert_eq!(settings.locator.crs, "2056");
    assert_eq!(settings.locator.lang, "en");
    assert_eq!(settings.locator.service_url, "https://wmts.geo.admin.ch");
    assert_eq!(settings.fetcher.timeout(), Duration::from_secs(30));
    assert_eq!(settings.fetcher.cache_ttl(), Duration::from_secs(86_400));
}
