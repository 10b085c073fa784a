use crate::phoneinfo::{enums::InfoField, format_phone_info, PhoneNumberInfo};

fn full_info() -> PhoneNumberInfo {
    PhoneNumberInfo {
        operator: Some("Djezzy".to_string()),
        country: Some("Algérie".to_string()),
        region: Some("Oran".to_string()),
        timezones: Some(vec!["Africa/Algiers".to_string()]),
    }
}

#[test]
fn format_empty_record() {
    assert_eq!("", format_phone_info(&PhoneNumberInfo::default()));
}

#[test]
fn format_single_field() {
    let info = PhoneNumberInfo {
        country: Some("Algérie".to_string()),
        ..Default::default()
    };
    assert_eq!("Country: Algérie", format_phone_info(&info));
}

#[test]
fn format_every_field_in_fixed_order() {
    assert_eq!(
        "Operator: Djezzy\nCountry: Algérie\nRegion: Oran\nTimezones: Africa/Algiers",
        format_phone_info(&full_info())
    );

    let info = PhoneNumberInfo {
        timezones: Some(vec!["Europe/Paris".to_string()]),
        operator: Some("Orange".to_string()),
        ..Default::default()
    };
    assert_eq!("Operator: Orange\nTimezones: Europe/Paris", format_phone_info(&info));
}

#[test]
fn format_timezones() {
    let mut info = PhoneNumberInfo {
        timezones: Some(vec!["Africa/Algiers".to_string()]),
        ..Default::default()
    };
    assert_eq!("Timezones: Africa/Algiers", format_phone_info(&info));

    info.timezones = Some(vec!["Africa/Algiers".to_string(), "Europe/Paris".to_string()]);
    assert_eq!("Timezones: Africa/Algiers, Europe/Paris", format_phone_info(&info));
}

#[test]
fn format_skips_empty_values() {
    let info = PhoneNumberInfo {
        operator: Some(String::new()),
        country: None,
        region: Some("Oran".to_string()),
        timezones: Some(Vec::new()),
    };
    assert_eq!("Region: Oran", format_phone_info(&info));
    assert!(!info.has_field(InfoField::Operator));
    assert!(info.has_field(InfoField::Region));
    assert!(!info.has_field(InfoField::Timezones));
}

#[test]
fn format_is_pure() {
    let info = full_info();
    let first = format_phone_info(&info);
    assert_eq!(first, format_phone_info(&info));
    assert_eq!(first, info.to_string());
    assert!(!first.ends_with('\n'));
}

#[test]
fn format_any_number_of_fields() {
    let full = full_info();
    for mask in 0u8..16 {
        let info = PhoneNumberInfo {
            operator: full.operator.clone().filter(|_| mask & 1 != 0),
            country: full.country.clone().filter(|_| mask & 2 != 0),
            region: full.region.clone().filter(|_| mask & 4 != 0),
            timezones: full.timezones.clone().filter(|_| mask & 8 != 0),
        };
        let text = format_phone_info(&info);
        assert_eq!(mask.count_ones() as usize, text.lines().count());
        assert_eq!(mask == 0, info.is_empty());
    }
}

#[test]
fn field_labels() {
    assert_eq!("Operator: ", InfoField::Operator.label());
    assert_eq!("Country: ", InfoField::Country.label());
    assert_eq!("Region: ", InfoField::Region.label());
    assert_eq!("Timezones: ", InfoField::Timezones.label());
    assert_eq!("timezones", InfoField::Timezones.to_string());
}
