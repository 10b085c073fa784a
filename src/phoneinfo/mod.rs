pub mod enums;
pub mod errors;
mod formatter;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
mod info_request;
mod phone_number_info;
pub mod phoneinfolookup;

use std::sync::LazyLock;

pub use enums::InfoField;
pub use formatter::format_phone_info;
pub use info_request::InfoRequest;
pub use phone_number_info::PhoneNumberInfo;

use crate::{
    phoneinfo::{errors::LookupError, phoneinfolookup::PhoneInfoLookup},
    prefix_data::PrefixDataProvider,
};

/// Lookup over the bundled sample data, in the default locale.
pub static PHONE_INFO_LOOKUP: LazyLock<PhoneInfoLookup<PrefixDataProvider>> = LazyLock::new(|| {
    PhoneInfoLookup::new(PrefixDataProvider::bundled())
});

/// Shorthand for [`PHONE_INFO_LOOKUP`]`.lookup(number, request)`.
pub fn lookup(number: &str, request: InfoRequest) -> Result<PhoneNumberInfo, LookupError> {
    PHONE_INFO_LOOKUP.lookup(number, request)
}
