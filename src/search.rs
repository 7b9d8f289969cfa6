//! Country-list search: prefix matching and the sticky filter state.

use crate::country::Country;
use crate::types::SearchCountryField;

/// Whether a country matches the query under the given search fields.
///
/// ISO2 and name comparisons are case-insensitive prefix checks against
/// `query_lower`; the dial-code check uses the raw query since dial codes
/// are digits and are never lowercased.
fn matches(
    country: &Country,
    query_lower: &str,
    raw_query: &str,
    fields: &[SearchCountryField],
) -> bool {
    let all = fields.contains(&SearchCountryField::All);

    if (all || fields.contains(&SearchCountryField::Iso2))
        && country.iso2.to_lowercase().starts_with(query_lower)
    {
        return true;
    }
    if (all || fields.contains(&SearchCountryField::Name))
        && country.name.to_lowercase().starts_with(query_lower)
    {
        return true;
    }
    if (all || fields.contains(&SearchCountryField::DialCode))
        && country.dial_code.as_str().starts_with(raw_query)
    {
        return true;
    }
    false
}

/// Narrow `countries` to the records matching `query`.
///
/// Pure prefix filter in catalog order; the sticky empty-result policy
/// lives in [`SearchState::apply`].
pub fn filter_countries(
    query: &str,
    fields: &[SearchCountryField],
    countries: &[Country],
) -> Vec<Country> {
    let query_lower = query.to_lowercase();
    countries
        .iter()
        .filter(|c| matches(c, &query_lower, query, fields))
        .cloned()
        .collect()
}

/// Search state of the country dropdown.
///
/// `filtered` is always a subsequence of the full catalog. An empty query
/// resets it to the full catalog; a query matching nothing leaves the
/// previous filtered list unchanged, so the dropdown never goes blank
/// while the user is still typing.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    fields: Vec<SearchCountryField>,
    filtered: Vec<Country>,
}

impl SearchState {
    /// Create a search state showing the full catalog.
    pub fn new(fields: Vec<SearchCountryField>, countries: &[Country]) -> Self {
        Self {
            query: String::new(),
            fields,
            filtered: countries.to_vec(),
        }
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The fields the search matches against.
    pub fn fields(&self) -> &[SearchCountryField] {
        &self.fields
    }

    /// The currently filtered list, in catalog order.
    pub fn filtered(&self) -> &[Country] {
        &self.filtered
    }

    /// Apply a new query against the full catalog.
    pub fn apply(&mut self, query: &str, countries: &[Country]) {
        self.query = query.to_string();
        if query.is_empty() {
            self.filtered = countries.to_vec();
            return;
        }
        let matched = filter_countries(query, &self.fields, countries);
        if !matched.is_empty() {
            self.filtered = matched;
        }
    }

    /// Reset to the full catalog, e.g. after `specified_countries` changed.
    pub fn reset(&mut self, countries: &[Country]) {
        self.query.clear();
        self.filtered = countries.to_vec();
    }
}
