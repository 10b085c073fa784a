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

use std::collections::HashMap;

use super::prefix_file_reader::{parse_entries, KeyKind, PrefixDataError};

/// A parsed data file: descriptions keyed by phone number prefix (or by
/// region code for the country name tables).
#[derive(Debug, Default)]
pub struct PrefixMap {
    descriptions: HashMap<String, String>,
    /// Distinct key lengths, longest first.
    possible_lengths: Vec<usize>,
}

impl PrefixMap {
    pub fn parse(content: &str, kind: KeyKind) -> Result<Self, PrefixDataError> {
        let entries = parse_entries(content, kind)?;

        let mut descriptions = HashMap::with_capacity(entries.len());
        let mut possible_lengths = Vec::new();
        for (key, value) in entries {
            if !possible_lengths.contains(&key.len()) {
                possible_lengths.push(key.len());
            }
            // later lines override earlier ones, like a re-declared prefix
            descriptions.insert(key.to_string(), value.to_string());
        }
        possible_lengths.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self { descriptions, possible_lengths })
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Exact key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.descriptions.get(key).map(String::as_str)
    }

    /// Returns the description of the longest prefix of `digits` present in
    /// the map, together with the length of that prefix.
    pub fn lookup(&self, digits: &str) -> Option<(usize, &str)> {
        self.possible_lengths
            .iter()
            .filter(|&&len| len <= digits.len())
            .find_map(|&len| {
                digits
                    .get(..len)
                    .and_then(|prefix| self.descriptions.get(prefix))
                    .map(|description| (len, description.as_str()))
            })
    }
}
