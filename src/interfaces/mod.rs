use phonenumber::PhoneNumber;

use crate::{i18n::Locale, phoneinfo::{errors::ParseError, helper_functions::parse_international}};

/// Phone number intelligence API used to isolate the data behind a lookup
/// (numbering plan, carriers, geocoding, timezones) and allow different
/// implementations to be swapped in easily.
///
/// Every query returns `None` (or an empty list) when the answer is
/// unknown; none of them fail.
pub trait PhoneNumberProvider {
    /// Parses a number given in international format. The default
    /// implementation uses the numbering plan metadata of the `phonenumber`
    /// crate.
    fn parse(&self, number: &str) -> Result<PhoneNumber, ParseError> {
        parse_international(number)
    }

    /// Name of the carrier the number was originally allocated to.
    fn name_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String>;

    /// Display name of the country the number belongs to.
    fn country_name_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String>;

    /// Text description of the geographical area of the number.
    fn description_for_number(&self, phone_number: &PhoneNumber, locale: &Locale) -> Option<String>;

    /// Timezone identifiers the number may be located in, in data order.
    fn time_zones_for_number(&self, phone_number: &PhoneNumber) -> Vec<String>;
}
