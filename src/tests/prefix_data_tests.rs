use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    i18n::Locale,
    interfaces::PhoneNumberProvider,
    phoneinfo::{
        enums::InfoField,
        errors::{InvalidArgumentError, LookupError},
        format_phone_info, lookup,
        phoneinfolookup::PhoneInfoLookup,
        InfoRequest,
    },
    prefix_data::{DataSource, PrefixDataProvider},
};

use super::{init_logging, test_number::TestNumber};

fn get_lookup() -> PhoneInfoLookup<PrefixDataProvider> {
    init_logging();
    PhoneInfoLookup::new(PrefixDataProvider::bundled())
}

fn get_lookup_for_locale(locale: &str) -> PhoneInfoLookup<PrefixDataProvider> {
    get_lookup().with_locale(Locale::parse(locale).unwrap())
}

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn write_data_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn country_only() {
    let info = get_lookup()
        .lookup(TestNumber::dz_mobile(), InfoRequest::only(InfoField::Country))
        .unwrap();

    assert_eq!(Some("Algérie".to_string()), info.country);
    assert_eq!(None, info.operator);
    assert_eq!(None, info.region);
    assert_eq!(None, info.timezones);
    assert_eq!("Country: Algérie", format_phone_info(&info));
}

#[test]
fn algerian_mobile_everything() {
    let info = get_lookup().lookup(TestNumber::dz_mobile(), InfoRequest::all()).unwrap();

    // mobile numbers have no area, the region falls back to the country
    assert_eq!(
        "Operator: Mobilis\nCountry: Algérie\nRegion: Algérie\nTimezones: Africa/Algiers",
        format_phone_info(&info)
    );
}

#[test]
fn region_of_fixed_line() {
    let request = InfoRequest::only(InfoField::Region);
    let info = get_lookup().lookup(TestNumber::dz_algiers(), request).unwrap();
    assert_eq!(Some("Alger".to_string()), info.region);

    let info = get_lookup_for_locale("en").lookup(TestNumber::dz_algiers(), request).unwrap();
    assert_eq!(Some("Algiers".to_string()), info.region);

    let info = get_lookup().lookup(TestNumber::fr_paris(), request).unwrap();
    assert_eq!(Some("Île-de-France".to_string()), info.region);
}

#[test]
fn no_carrier_data_is_no_information() {
    let err = get_lookup()
        .lookup(TestNumber::fr_paris(), InfoRequest::only(InfoField::Operator))
        .unwrap_err();
    assert_eq!(LookupError::InvalidArgument(InvalidArgumentError::NoInformation), err);
}

#[test]
fn french_number_without_carrier() {
    let info = get_lookup().lookup(TestNumber::fr_paris(), InfoRequest::all()).unwrap();
    assert_eq!(
        "Country: France\nRegion: Île-de-France\nTimezones: Europe/Paris",
        format_phone_info(&info)
    );
}

#[test]
fn regional_locale_falls_back_to_language() {
    let info = get_lookup_for_locale("fr_DZ")
        .lookup(TestNumber::dz_mobile(), InfoRequest::new().with_country().with_operator())
        .unwrap();
    assert_eq!(Some("Algérie".to_string()), info.country);
    assert_eq!(Some("Mobilis".to_string()), info.operator);
}

#[test]
fn missing_language_falls_back_to_english() {
    let info = get_lookup_for_locale("de")
        .lookup(TestNumber::dz_mobile(), InfoRequest::only(InfoField::Country))
        .unwrap();
    assert_eq!(Some("Algeria".to_string()), info.country);

    // No region data in French for +1, the English one is used.
    let info = get_lookup()
        .lookup(TestNumber::us_new_york(), InfoRequest::new().with_region().with_timezones())
        .unwrap();
    assert_eq!(Some("New York, NY".to_string()), info.region);
    assert_eq!(Some(vec!["America/New_York".to_string()]), info.timezones);
}

#[test]
fn cjk_locales_do_not_fall_back_to_english() {
    let err = get_lookup_for_locale("ja")
        .lookup(TestNumber::dz_mobile(), InfoRequest::only(InfoField::Country))
        .unwrap_err();
    assert!(err.is_invalid_argument());

    // timezones are not localized
    let info = get_lookup_for_locale("ja")
        .lookup(TestNumber::dz_mobile(), InfoRequest::new().with_country().with_timezones())
        .unwrap();
    assert_eq!(None, info.country);
    assert_eq!(Some(vec!["Africa/Algiers".to_string()]), info.timezones);
}

#[test]
fn english_region_falls_back_to_country_name() {
    // geocoding/en/33.txt does not exist
    let info = get_lookup_for_locale("en")
        .lookup(TestNumber::fr_paris(), InfoRequest::only(InfoField::Region))
        .unwrap();
    assert_eq!(Some("France".to_string()), info.region);
}

#[test]
fn several_timezones_keep_data_order() {
    let provider = PrefixDataProvider::bundled();
    let number = provider.parse("+34 912 34 56 78").unwrap();
    assert_eq!(
        vec!["Atlantic/Canary".to_string(), "Europe/Madrid".to_string()],
        provider.time_zones_for_number(&number)
    );
}

#[test]
fn directory_source_matches_bundled() {
    init_logging();
    let from_dir = PhoneInfoLookup::new(PrefixDataProvider::from_dir(data_dir()));
    assert_eq!(&DataSource::Directory(data_dir()), from_dir.provider().source());

    for number in [TestNumber::dz_mobile(), TestNumber::dz_algiers(), TestNumber::fr_paris()] {
        assert_eq!(
            get_lookup().lookup(number, InfoRequest::all()),
            from_dir.lookup(number, InfoRequest::all())
        );
    }
}

#[test]
fn missing_data_directory_yields_nothing() {
    init_logging();
    let lookup = PhoneInfoLookup::new(PrefixDataProvider::from_dir(data_dir().join("does-not-exist")));
    let err = lookup.lookup(TestNumber::dz_mobile(), InfoRequest::all()).unwrap_err();
    assert_eq!(LookupError::InvalidArgument(InvalidArgumentError::NoInformation), err);

    // Parsing does not depend on the data files.
    assert!(lookup.lookup("not-a-number", InfoRequest::all()).unwrap_err().is_parse_error());
}

#[test]
fn default_lookup_instance() {
    init_logging();
    let info = lookup(TestNumber::dz_mobile(), InfoRequest::new().with_operator()).unwrap();
    assert_eq!("Operator: Mobilis", info.to_string());
    assert!(lookup("", InfoRequest::all()).unwrap_err().is_invalid_argument());
}

#[test]
fn invalid_number_only_has_a_country() {
    let lookup = get_lookup();
    for field in [InfoField::Operator, InfoField::Region, InfoField::Timezones] {
        let err = lookup.lookup(TestNumber::dz_invalid(), InfoRequest::only(field)).unwrap_err();
        assert_eq!(LookupError::InvalidArgument(InvalidArgumentError::NoInformation), err, "{field}");
    }

    let info = lookup.lookup(TestNumber::dz_invalid(), InfoRequest::all()).unwrap();
    assert_eq!("Country: Algérie", format_phone_info(&info));
}

#[test]
fn carrier_only_for_mobile_numbers() {
    init_logging();
    let data = tempfile::tempdir().unwrap();
    write_data_file(data.path(), "carrier/fr/33.txt", "331|Orange Fixe\n336|Orange Mobile\n");
    let lookup = PhoneInfoLookup::new(PrefixDataProvider::from_dir(data.path()));

    let err = lookup
        .lookup(TestNumber::fr_paris(), InfoRequest::only(InfoField::Operator))
        .unwrap_err();
    assert_eq!(LookupError::InvalidArgument(InvalidArgumentError::NoInformation), err);

    let info = lookup
        .lookup(TestNumber::fr_mobile(), InfoRequest::only(InfoField::Operator))
        .unwrap();
    assert_eq!(Some("Orange Mobile".to_string()), info.operator);
}

#[test]
fn mobile_numbers_are_described_by_their_country() {
    init_logging();
    let data = tempfile::tempdir().unwrap();
    write_data_file(data.path(), "geocoding/fr/213.txt", "21321|Alger\n2136|Zone mobile\n");
    write_data_file(data.path(), "countries/fr.txt", "DZ|Algérie\n");
    write_data_file(data.path(), "timezones/map_data.txt", "34|Europe/Madrid\n346|Atlantic/Canary\n");
    let lookup = PhoneInfoLookup::new(PrefixDataProvider::from_dir(data.path()));
    let request = InfoRequest::only(InfoField::Region);

    let info = lookup.lookup(TestNumber::dz_mobile(), request).unwrap();
    assert_eq!(Some("Algérie".to_string()), info.region);

    let info = lookup.lookup(TestNumber::dz_algiers(), request).unwrap();
    assert_eq!(Some("Alger".to_string()), info.region);

    // timezones of the whole country, not of the matching prefix
    let info = lookup
        .lookup(TestNumber::es_mobile(), InfoRequest::only(InfoField::Timezones))
        .unwrap();
    assert_eq!(Some(vec!["Europe/Madrid".to_string()]), info.timezones);
}
