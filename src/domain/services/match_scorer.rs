// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Which layer field the search text was found in.
///
/// The discriminant is the score handed to the host; lower ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchScore {
    Identifier = 1,
    Title = 2,
    Abstract = 3,
}

impl MatchScore {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Case-insensitive containment scorer for one search string.
pub struct MatchScorer {
    needle: String,
}

impl MatchScorer {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Scores a layer; the first field containing the search text wins.
    pub fn score(
        &self,
        identifier: &str,
        title: Option<&str>,
        abstract_text: Option<&str>,
    ) -> Option<MatchScore> {
        if self.contains(identifier) {
            Some(MatchScore::Identifier)
        } else if title.is_some_and(|t| self.contains(t)) {
            Some(MatchScore::Title)
        } else if abstract_text.is_some_and(|a| self.contains(a)) {
            Some(MatchScore::Abstract)
        } else {
            None
        }
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}
