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

use log::{debug, trace};

use super::{
    errors::{InvalidArgumentError, LookupError},
    helper_functions::non_empty,
    info_request::InfoRequest,
    phone_number_info::PhoneNumberInfo,
};
use crate::{i18n::Locale, interfaces::PhoneNumberProvider};

// Helper type for Result
pub type Result<T> = std::result::Result<T, LookupError>;

/// Resolves [`PhoneNumberInfo`] for phone numbers through a
/// [`PhoneNumberProvider`], with localized names in a fixed display locale.
pub struct PhoneInfoLookup<P> {
    provider: P,
    /// Locale of the country, region and carrier names. `fr` by default.
    locale: Locale,
}

impl<P: PhoneNumberProvider> PhoneInfoLookup<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, locale: Locale::default() }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Looks up the fields selected by `request` for a number written in
    /// international format, e.g. `"+213549385183"`.
    ///
    /// The lookup is all-or-nothing: it either returns a record with at
    /// least one field set, or an error.
    ///
    /// # Errors
    /// - [`InvalidArgumentError::EmptyNumber`] if `number` is empty. The
    ///   provider is not called at all in that case.
    /// - [`LookupError::Parse`] if the provider cannot parse `number`.
    /// - [`InvalidArgumentError::NoInformation`] if nothing was requested,
    ///   or nothing that was requested is known about the number.
    pub fn lookup(&self, number: &str, request: InfoRequest) -> Result<PhoneNumberInfo> {
        if number.is_empty() {
            return Err(InvalidArgumentError::EmptyNumber.into());
        }

        let phone_number = self.provider.parse(number)?;
        trace!("Parsed '{}', resolving {:?} in locale {}", number, request, self.locale);

        let operator = if request.operator {
            non_empty(self.provider.name_for_number(&phone_number, &self.locale))
        } else {
            None
        };
        let country = if request.country {
            non_empty(self.provider.country_name_for_number(&phone_number, &self.locale))
        } else {
            None
        };
        let region = if request.region {
            non_empty(self.provider.description_for_number(&phone_number, &self.locale))
        } else {
            None
        };
        let timezones = if request.timezones {
            Some(self.provider.time_zones_for_number(&phone_number))
                .filter(|zones| !zones.is_empty())
        } else {
            None
        };

        let info = PhoneNumberInfo { operator, country, region, timezones };
        if info.is_empty() {
            debug!("Nothing resolved for '{}' with {:?}", number, request);
            return Err(InvalidArgumentError::NoInformation.into());
        }
        Ok(info)
    }
}
