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

use std::{borrow::Cow, fmt};

use super::{enums::InfoField, formatter::format_phone_info, helper_constants::TIMEZONES_SEPARATOR};

/// What a lookup found out about a phone number.
///
/// Fields that were not requested, or that the provider knows nothing
/// about, are `None`. A record returned by a lookup always has at least one
/// field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberInfo {
    pub operator: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub timezones: Option<Vec<String>>,
}

impl PhoneNumberInfo {
    /// Text of the field as printed by the formatter, `None` when the field
    /// is unset or holds nothing.
    pub fn field_text(&self, field: InfoField) -> Option<Cow<'_, str>> {
        let text: Option<Cow<'_, str>> = match field {
            InfoField::Operator => self.operator.as_deref().map(Cow::Borrowed),
            InfoField::Country => self.country.as_deref().map(Cow::Borrowed),
            InfoField::Region => self.region.as_deref().map(Cow::Borrowed),
            InfoField::Timezones => self
                .timezones
                .as_ref()
                .filter(|zones| !zones.is_empty())
                .map(|zones| Cow::Owned(zones.join(TIMEZONES_SEPARATOR))),
        };
        text.filter(|text| !text.is_empty())
    }

    pub fn has_field(&self, field: InfoField) -> bool {
        self.field_text(field).is_some()
    }

    /// True when no field carries any information.
    pub fn is_empty(&self) -> bool {
        self.operator.as_deref().is_none_or(str::is_empty)
            && self.country.as_deref().is_none_or(str::is_empty)
            && self.region.as_deref().is_none_or(str::is_empty)
            && self.timezones.as_ref().is_none_or(Vec::is_empty)
    }
}

impl fmt::Display for PhoneNumberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_phone_info(self))
    }
}
