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

/// Every way a lookup can fail. A failed lookup never carries partial
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Caller-correctable: fix the input or the request and call again.
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgumentError),
    /// The provider could not parse the given string into a phone number.
    #[error("Failed to parse number: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgumentError {
    #[error("The number must be provided")]
    EmptyNumber,
    #[error("At least one of operator, country, region or timezones must be requested and available")]
    NoInformation,
}

/// Diagnostic of the provider's parser, kept as text so that any provider
/// can report its own failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl LookupError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LookupError::InvalidArgument(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, LookupError::Parse(_))
    }
}
