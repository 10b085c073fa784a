use strum::IntoEnumIterator;

use super::{
    enums::InfoField, helper_constants::LINE_SEPARATOR, phone_number_info::PhoneNumberInfo,
};

/// Renders the populated fields of `info` as labelled lines, in the order
/// operator, country, region, timezones. Unset fields are left out
/// entirely, there is no trailing newline, and a record without any field
/// renders as an empty string.
///
/// ```
/// use phoneinfo::{format_phone_info, PhoneNumberInfo};
///
/// let info = PhoneNumberInfo {
///     country: Some("Algérie".to_string()),
///     timezones: Some(vec!["Africa/Algiers".to_string()]),
///     ..Default::default()
/// };
/// assert_eq!("Country: Algérie\nTimezones: Africa/Algiers", format_phone_info(&info));
/// ```
pub fn format_phone_info(info: &PhoneNumberInfo) -> String {
    InfoField::iter()
        .filter_map(|field| {
            info.field_text(field)
                .map(|text| fast_cat::concat_str!(field.label(), &*text))
        })
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
