//! The embedded country table and catalog operations.

use super::Country;
use once_cell::sync::Lazy;

/// Country table JSON embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../../assets/countries.json");

/// The full country table, parsed once.
static ALL_COUNTRIES: Lazy<Vec<Country>> =
    Lazy::new(|| serde_json::from_str(COUNTRIES_JSON).expect("countries.json is invalid"));

/// Ordered collection of [`Country`] records backing one input instance.
///
/// A catalog starts as a copy of the full embedded table and can be narrowed
/// to a specified subset. Placeholder text is written into the records after
/// the example-number document has been fetched.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Load a catalog holding the full embedded country table.
    pub fn load() -> Self {
        Self {
            countries: ALL_COUNTRIES.clone(),
        }
    }

    /// The records in catalog order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Mutable access for placeholder updates.
    pub fn countries_mut(&mut self) -> &mut [Country] {
        &mut self.countries
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Keep only the countries named by `iso2s` (case-insensitive),
    /// preserving catalog order. Implements the `specified_countries`
    /// configuration option.
    pub fn restrict_to(&mut self, iso2s: &[String]) {
        if iso2s.is_empty() {
            return;
        }
        let wanted: Vec<String> = iso2s.iter().map(|s| s.to_lowercase()).collect();
        self.countries.retain(|c| wanted.contains(&c.iso2));
    }

    /// Resolve `iso2s` into records in the caller's order, skipping codes
    /// not present in the catalog. Implements `preferred_countries`.
    pub fn preferred(&self, iso2s: &[String]) -> Vec<Country> {
        iso2s
            .iter()
            .filter_map(|iso2| self.find(iso2).cloned())
            .collect()
    }

    /// Look up a record by ISO2 code, case-insensitive.
    pub fn find(&self, iso2: &str) -> Option<&Country> {
        let iso2 = iso2.to_lowercase();
        self.countries.iter().find(|c| c.iso2 == iso2)
    }

    /// First record in catalog order, if any.
    pub fn first(&self) -> Option<&Country> {
        self.countries.first()
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::load()
    }
}
