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

use strum::{Display, EnumIter};

use super::helper_constants::{COUNTRY_LABEL, OPERATOR_LABEL, REGION_LABEL, TIMEZONES_LABEL};

/// The pieces of information a lookup can produce.
///
/// Variants are declared in output order, so iterating with
/// [`strum::IntoEnumIterator`] walks the fields exactly the way the
/// formatter prints them.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum InfoField {
    /// **Carrier.**
    /// Name of the operator the number was originally allocated to.
    Operator,
    /// **Country.**
    /// Display name of the country the number belongs to.
    Country,
    /// **Region.**
    /// Description of the geographical area (city, province) of the number.
    /// Mobile and non-geographic numbers usually only resolve to a country.
    Region,
    /// **Timezones.**
    /// One or more IANA timezone identifiers the number may be located in.
    Timezones,
}

impl InfoField {
    /// Label put in front of the field value by the formatter.
    pub fn label(self) -> &'static str {
        match self {
            InfoField::Operator => OPERATOR_LABEL,
            InfoField::Country => COUNTRY_LABEL,
            InfoField::Region => REGION_LABEL,
            InfoField::Timezones => TIMEZONES_LABEL,
        }
    }
}
