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

use std::{path::PathBuf, sync::Arc};

use log::{debug, trace, warn};
use phonenumber::{metadata::DATABASE, PhoneNumber, Type};

use super::{
    data_source::DataSource,
    prefix_file_reader::KeyKind,
    prefix_map::PrefixMap,
    prefix_map_cache::PrefixMapCache,
};
use crate::{
    i18n::Locale,
    interfaces::PhoneNumberProvider,
    string_util::{country_calling_code, e164_digits},
};

const CARRIER_DIR: &str = "carrier";
const GEOCODING_DIR: &str = "geocoding";
const COUNTRIES_DIR: &str = "countries";
const TIMEZONES_FILE: &str = "timezones/map_data.txt";
const DATA_FILE_EXTENSION: &str = ".txt";
/// Separator of the zones of one prefix in the timezone map.
const TIMEZONES_SEPARATOR: char = '&';
/// Calling codes whose mobile ranges are assigned geographically.
const GEO_MOBILE_COUNTRIES: [u16; 5] = [52, 54, 55, 62, 86];

/// Type of a valid number, `None` for invalid ones.
fn valid_number_type(phone_number: &PhoneNumber) -> Option<Type> {
    if !phonenumber::is_valid(phone_number) {
        return None;
    }
    match phone_number.number_type(&DATABASE) {
        Type::Unknown => None,
        number_type => Some(number_type),
    }
}

/// Only these types have carrier data.
fn may_have_carrier(number_type: Type) -> bool {
    matches!(number_type, Type::Mobile | Type::FixedLineOrMobile | Type::Pager)
}

/// Whether the number is tied to an area and not only to its country.
fn is_geographical(number_type: Type, country_code: u16) -> bool {
    match number_type {
        Type::FixedLine | Type::FixedLineOrMobile => true,
        Type::Mobile => GEO_MOBILE_COUNTRIES.contains(&country_code),
        _ => false,
    }
}

/// [`PhoneNumberProvider`] reading libphonenumber-style prefix files:
///
/// ```text
/// carrier/<locale>/<country calling code>.txt     prefix|carrier name
/// geocoding/<locale>/<country calling code>.txt   prefix|region description
/// countries/<locale>.txt                          REGION|country name
/// timezones/map_data.txt                          prefix|zone&zone
/// ```
///
/// Files are parsed on first use and cached for the lifetime of the
/// provider.
pub struct PrefixDataProvider {
    source: DataSource,
    cache: PrefixMapCache,
}

impl PrefixDataProvider {
    pub fn new(source: DataSource) -> Self {
        Self { source, cache: PrefixMapCache::with_capacity(32) }
    }

    /// Uses the sample data compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(DataSource::Bundled)
    }

    /// Uses the data root at `path`.
    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        Self::new(DataSource::Directory(path.into()))
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    fn load_map(&self, file: &str, kind: KeyKind) -> Option<Arc<PrefixMap>> {
        self.cache.get_or_load(file, || {
            let content = match self.source.read(file) {
                Ok(Some(content)) => content,
                Ok(None) => {
                    debug!("No data file {}", file);
                    return None;
                }
                Err(err) => {
                    warn!("Could not read data file {}: {}", file, err);
                    return None;
                }
            };
            match PrefixMap::parse(&content, kind) {
                Ok(map) => {
                    debug!("Loaded {} entries from {}", map.len(), file);
                    Some(map)
                }
                Err(err) => {
                    warn!("Malformed data file {}: {}", file, err);
                    None
                }
            }
        })
    }

    /// Looks the number up in `<dir>/<locale>/<code>.txt` for every locale of
    /// the fallback chain. The longest matching prefix wins; between equally
    /// long prefixes the more specific locale wins.
    fn localized_prefix_description(
        &self,
        dir: &str,
        phone_number: &PhoneNumber,
        locale: &Locale,
    ) -> Option<String> {
        let code = country_calling_code(phone_number);
        let digits = e164_digits(phone_number);

        let mut best: Option<(usize, String)> = None;
        for language in locale.fallback_chain() {
            let file = fast_cat::concat_str!(dir, "/", &language, "/", &code, DATA_FILE_EXTENSION);
            let Some(map) = self.load_map(&file, KeyKind::Prefix) else {
                continue;
            };
            if let Some((len, description)) = map.lookup(&digits) {
                if best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
                    best = Some((len, description.to_string()));
                }
            }
        }
        best.map(|(_, description)| description)
    }
}

impl Default for PrefixDataProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

impl PhoneNumberProvider for PrefixDataProvider {
    fn name_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String> {
        let Some(number_type) = valid_number_type(phone_number) else {
            trace!("No carrier for an invalid number");
            return None;
        };
        if !may_have_carrier(number_type) {
            trace!("No carrier for a number of type {:?}", number_type);
            return None;
        }
        self.localized_prefix_description(CARRIER_DIR, phone_number, locale)
    }

    fn country_name_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String> {
        let Some(country_id) = phone_number.country().id() else {
            trace!("Number does not resolve to a single region");
            return None;
        };
        // Debug of the id is the ISO 3166-1 alpha-2 code.
        let region_code = format!("{:?}", country_id);

        locale.fallback_chain().into_iter().find_map(|language| {
            let file = fast_cat::concat_str!(COUNTRIES_DIR, "/", &language, DATA_FILE_EXTENSION);
            self.load_map(&file, KeyKind::Region)
                .and_then(|map| map.get(&region_code).map(str::to_string))
        })
    }

    fn description_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String> {
        let Some(number_type) = valid_number_type(phone_number) else {
            trace!("No description for an invalid number");
            return None;
        };
        if !is_geographical(number_type, phone_number.code().value()) {
            return self.country_name_for_number(phone_number, locale);
        }
        // no description for the area, the country describes it
        self.localized_prefix_description(GEOCODING_DIR, phone_number, locale)
            .or_else(|| self.country_name_for_number(phone_number, locale))
    }

    fn time_zones_for_number(&self, phone_number: &PhoneNumber) -> Vec<String> {
        let Some(number_type) = valid_number_type(phone_number) else {
            trace!("No timezones for an invalid number");
            return Vec::new();
        };
        let Some(map) = self.load_map(TIMEZONES_FILE, KeyKind::Prefix) else {
            return Vec::new();
        };
        // Non-geographical numbers only get the zones of their country.
        let key = if is_geographical(number_type, phone_number.code().value()) {
            e164_digits(phone_number)
        } else {
            country_calling_code(phone_number)
        };
        map.lookup(&key)
            .map(|(_, zones)| {
                zones
                    .split(TIMEZONES_SEPARATOR)
                    .map(str::trim)
                    .filter(|zone| !zone.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
