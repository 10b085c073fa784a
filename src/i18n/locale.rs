// Copyright (C) 2011 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::phoneinfo::helper_constants::DEFAULT_LOCALE;

const ENGLISH: &str = "en";

/// Language, then an optional region separated by '_' or '-'.
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[_-]([A-Za-z]{2}))?$").expect("Invalid constant pattern!")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid locale '{0}', expected a language code optionally followed by a region (e.g. fr, fr_FR)")]
pub struct LocaleError(pub String);

/// Display locale of the localized names (countries, regions, carriers).
///
/// Normalized on construction: language lowercase, region uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let captures = LOCALE_PATTERN
            .captures(tag.trim())
            .ok_or_else(|| LocaleError(tag.to_string()))?;
        // group 1 is mandatory in the pattern
        let language = captures[1].to_ascii_lowercase();
        let region = captures.get(2).map(|m| m.as_str().to_ascii_uppercase());
        Ok(Self { language, region })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether names missing in this locale may be taken from the English
    /// data. Never the case for Chinese, Japanese and Korean.
    pub fn may_fall_back_to_english(&self) -> bool {
        !matches!(self.language.as_str(), "zh" | "ja" | "ko")
    }

    /// Locale names to try when looking for data, most specific first:
    /// `fr_FR`, then `fr`, then `en` when allowed.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(3);
        if let Some(region) = &self.region {
            chain.push(fast_cat::concat_str!(&self.language, "_", region));
        }
        chain.push(self.language.clone());
        if self.language != ENGLISH && self.may_fall_back_to_english() {
            chain.push(ENGLISH.to_string());
        }
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self { language: DEFAULT_LOCALE.to_string(), region: None }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}
