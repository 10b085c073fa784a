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

use std::panic;

use log::{trace, warn};
use phonenumber::PhoneNumber;

use super::errors::ParseError;

/// Parses a number written in international format (leading '+' and
/// country calling code). No default region is assumed, so national
/// numbers are rejected.
pub fn parse_international(number: &str) -> Result<PhoneNumber, ParseError> {
    // Digits from other scripts (e.g. Arabic-Indic) are turned into ASCII
    // first, the numbering plan patterns only know ASCII digits.
    let normalized = dec_from_char::normalize_decimals(number);
    let input = normalized.to_string();
    trace!("Parsing '{}' as '{}'", number, input);

    // The parser has been seen panicking on odd input.
    match panic::catch_unwind(move || phonenumber::parse(None, &input)) {
        Ok(Ok(phone_number)) => Ok(phone_number),
        Ok(Err(err)) => Err(ParseError::new(err.to_string())),
        Err(_) => {
            warn!("phonenumber parser panicked on '{}'", number);
            Err(ParseError::new("the number could not be parsed"))
        }
    }
}

/// Keeps `Some` only for non-blank text.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
