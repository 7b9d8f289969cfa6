//! Country inference from a parsed calling code and national digits.

use super::Country;

/// Pick the best-matching country for a calling code and the digits that
/// follow it.
///
/// Candidates are the countries whose dial code equals `calling_code`. The
/// "main" country of a calling code is the candidate without area codes;
/// every other candidate is checked area code by area code against the
/// start of `national_digits`, and each hit overwrites the previous match.
/// The last matching prefix in catalog order therefore wins; this is the
/// documented tie-break, not longest-prefix matching. With no area-code hit
/// the main country is returned, and with no main country either the result
/// is `None` and the caller keeps its current selection.
///
/// # Example
///
/// ```rust
/// use tel_input::{CountryCatalog, resolve};
///
/// let catalog = CountryCatalog::load();
/// assert_eq!(resolve(1, "4165550100", catalog.countries()), Some("ca"));
/// assert_eq!(resolve(1, "2125550100", catalog.countries()), Some("us"));
/// ```
pub fn resolve<'a>(
    calling_code: u16,
    national_digits: &str,
    countries: &'a [Country],
) -> Option<&'a str> {
    let code = calling_code.to_string();
    let candidates: Vec<&Country> = countries.iter().filter(|c| c.dial_code == code).collect();

    let main_country = candidates.iter().find(|c| c.area_codes.is_none());
    let mut matched = main_country.map(|c| c.iso2.as_str());

    for country in &candidates {
        let Some(area_codes) = &country.area_codes else {
            continue;
        };
        for area_code in area_codes {
            if national_digits.starts_with(area_code.as_str()) {
                matched = Some(country.iso2.as_str());
            }
        }
    }

    matched
}
