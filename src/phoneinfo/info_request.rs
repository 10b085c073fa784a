use strum::IntoEnumIterator;

use super::enums::InfoField;

/// Selects the fields a lookup should resolve. Unselected fields are never
/// queried from the provider.
///
/// ```
/// use phoneinfo::InfoRequest;
///
/// let request = InfoRequest::new().with_country().with_timezones();
/// assert!(request.country && request.timezones);
/// assert!(!request.operator && !request.region);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InfoRequest {
    pub operator: bool,
    pub country: bool,
    pub region: bool,
    pub timezones: bool,
}

impl InfoRequest {
    /// Requests nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests every field.
    pub fn all() -> Self {
        Self::from_fields(InfoField::iter())
    }

    pub fn only(field: InfoField) -> Self {
        Self::new().with(field)
    }

    pub fn from_fields(fields: impl IntoIterator<Item = InfoField>) -> Self {
        fields.into_iter().fold(Self::new(), Self::with)
    }

    pub fn with(mut self, field: InfoField) -> Self {
        match field {
            InfoField::Operator => self.operator = true,
            InfoField::Country => self.country = true,
            InfoField::Region => self.region = true,
            InfoField::Timezones => self.timezones = true,
        }
        self
    }

    pub fn with_operator(self) -> Self {
        self.with(InfoField::Operator)
    }

    pub fn with_country(self) -> Self {
        self.with(InfoField::Country)
    }

    pub fn with_region(self) -> Self {
        self.with(InfoField::Region)
    }

    pub fn with_timezones(self) -> Self {
        self.with(InfoField::Timezones)
    }

    pub fn contains(&self, field: InfoField) -> bool {
        match field {
            InfoField::Operator => self.operator,
            InfoField::Country => self.country,
            InfoField::Region => self.region,
            InfoField::Timezones => self.timezones,
        }
    }

    pub fn is_empty(&self) -> bool {
        !InfoField::iter().any(|field| self.contains(field))
    }
}
