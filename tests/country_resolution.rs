//! Property-style tests for calling-code resolution over the full catalog.

use tel_input::{CountryCatalog, resolve};

/// Every calling code present in the catalog resolves to a country
/// carrying that calling code.
#[test]
fn resolution_is_closed_over_the_catalog() {
    let catalog = CountryCatalog::load();

    for country in catalog.countries() {
        let calling_code: u16 = country
            .dial_code
            .as_str()
            .parse()
            .unwrap_or_else(|_| panic!("dial code '{}' is not numeric", country.dial_code));

        let resolved = resolve(calling_code, "", catalog.countries());
        match resolved {
            Some(iso2) => {
                let record = catalog
                    .find(iso2)
                    .unwrap_or_else(|| panic!("resolved '{iso2}' missing from catalog"));
                assert_eq!(
                    record.dial_code, country.dial_code,
                    "resolve({calling_code}) returned {iso2} with a different dial code"
                );
            }
            None => {
                // Only legitimate when every candidate needs an area code.
                let has_main = catalog
                    .countries()
                    .iter()
                    .any(|c| c.dial_code == country.dial_code && c.area_codes.is_none());
                assert!(
                    !has_main,
                    "resolve({calling_code}) returned None despite a main country"
                );
            }
        }
    }
}

/// With no digits to match, area codes never fire and the main country of
/// each calling code wins.
#[test]
fn empty_digits_resolve_to_the_main_country() {
    let catalog = CountryCatalog::load();

    assert_eq!(resolve(1, "", catalog.countries()), Some("us"));
    assert_eq!(resolve(7, "", catalog.countries()), Some("ru"));
    assert_eq!(resolve(44, "", catalog.countries()), Some("gb"));
    assert_eq!(resolve(61, "", catalog.countries()), Some("au"));
}

/// The documented +1 scenario: area-code hit selects the secondary
/// country, miss falls back to the main one.
#[test]
fn nanp_disambiguation_scenarios() {
    let catalog = CountryCatalog::load();

    assert_eq!(resolve(1, "4165550100", catalog.countries()), Some("ca"));
    assert_eq!(resolve(1, "6475550100", catalog.countries()), Some("ca"));
    assert_eq!(resolve(1, "2125550100", catalog.countries()), Some("us"));
    assert_eq!(resolve(1, "8095550100", catalog.countries()), Some("do"));
    assert_eq!(resolve(1, "7875550100", catalog.countries()), Some("pr"));
}

/// Resolution respects a restricted catalog: countries removed by the
/// host configuration can no longer be detected.
#[test]
fn restricted_catalog_limits_detection() {
    let mut catalog = CountryCatalog::load();
    catalog.restrict_to(&["us".to_string()]);

    assert_eq!(resolve(1, "4165550100", catalog.countries()), Some("us"));
    assert_eq!(resolve(44, "2079460958", catalog.countries()), None);
}
