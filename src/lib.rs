//! Carrier, country, region and timezone lookup for international phone
//! numbers.
//!
//! ```
//! use phoneinfo::{format_phone_info, lookup, InfoRequest};
//!
//! let info = lookup("+213661234567", InfoRequest::new().with_country()).unwrap();
//! assert_eq!("Country: Algérie", format_phone_info(&info));
//! ```

mod interfaces;
mod phoneinfo;
mod prefix_data;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::PhoneNumberProvider;
pub use phoneinfo::{
    enums::InfoField,
    errors::{InvalidArgumentError, LookupError, ParseError},
    format_phone_info, lookup,
    phoneinfolookup::PhoneInfoLookup,
    InfoRequest, PhoneNumberInfo, PHONE_INFO_LOOKUP,
};
pub use prefix_data::{DataSource, PrefixDataError, PrefixDataProvider};
pub use phonenumber::PhoneNumber;
