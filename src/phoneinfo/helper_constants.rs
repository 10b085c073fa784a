/// Display locale used when none is configured.
pub const DEFAULT_LOCALE: &'static str = "fr";

pub const OPERATOR_LABEL: &'static str = "Operator: ";
pub const COUNTRY_LABEL: &'static str = "Country: ";
pub const REGION_LABEL: &'static str = "Region: ";
pub const TIMEZONES_LABEL: &'static str = "Timezones: ";

// Separator between timezone identifiers on the formatted line.
pub const TIMEZONES_SEPARATOR: &'static str = ", ";
pub const LINE_SEPARATOR: &'static str = "\n";
