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

use thiserror::Error;

pub const MAX_LINE_LENGTH: usize = 2 * 1024;

#[derive(Debug, Error)]
pub enum PrefixDataError {
    #[error("IO error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} has no '|' separator")]
    MissingSeparator { line_num: usize },

    #[error("Failed to parse prefix '{prefix}' on line {line_num}")]
    InvalidPrefix { prefix: String, line_num: usize },

    #[error("Invalid region code '{region}' on line {line_num}")]
    InvalidRegion { region: String, line_num: usize },
}

/// What the keys of a data file are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Digit prefixes starting with the country calling code (`21321`).
    Prefix,
    /// Region codes (`DZ`), used by the country name tables.
    Region,
}

impl KeyKind {
    fn accepts(self, key: &str) -> bool {
        match self {
            KeyKind::Prefix => !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()),
            KeyKind::Region => key.len() == 2 && key.bytes().all(|b| b.is_ascii_uppercase()),
        }
    }
}

/// Splits a data file into its `key|value` entries, skipping blank lines
/// and `#` comments. Keys and values are trimmed.
pub fn parse_entries(content: &str, kind: KeyKind) -> Result<Vec<(&str, &str)>, PrefixDataError> {
    let mut entries = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_num = index + 1;
        if raw_line.len() > MAX_LINE_LENGTH {
            return Err(PrefixDataError::LineTooLong { line_num, max_len: MAX_LINE_LENGTH });
        }

        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('|') else {
            return Err(PrefixDataError::MissingSeparator { line_num });
        };
        let key = key.trim();
        if !kind.accepts(key) {
            return Err(match kind {
                KeyKind::Prefix => PrefixDataError::InvalidPrefix { prefix: key.to_string(), line_num },
                KeyKind::Region => PrefixDataError::InvalidRegion { region: key.to_string(), line_num },
            });
        }
        entries.push((key, value.trim()));
    }

    Ok(entries)
}
