// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Languages the geoportal serves capabilities in.
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["de", "fr", "it", "rm", "en"];

pub const DEFAULT_LANGUAGE: &str = "en";

/// Maps a locale such as `de_CH`, `fr-CH` or `IT` onto a supported
/// language code, falling back to [`DEFAULT_LANGUAGE`].
pub fn normalize_language(locale: &str) -> &'static str {
    let code = locale
        .trim()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == code)
        .unwrap_or(DEFAULT_LANGUAGE)
}
