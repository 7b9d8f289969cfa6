//! Country records, the embedded catalog and calling-code resolution.

mod catalog;
mod resolver;

pub use catalog::CountryCatalog;
pub use resolver::resolve;

use crate::types::DialCode;
use serde::{Deserialize, Serialize};

/// A single entry of the country catalog.
///
/// Records are immutable after catalog load, with the exception of
/// `placeholder`, which is computed asynchronously from the example-number
/// document (see [`PlaceholderLoader`](crate::PlaceholderLoader)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Display name.
    pub name: String,
    /// Two-letter ISO code, lowercase, unique within the catalog.
    pub iso2: String,
    /// International calling code, validated at catalog load. Shared by
    /// several countries (e.g. US, CA, DO and PR all use "1").
    pub dial_code: DialCode,
    /// Tie-break rank among countries sharing a dial code. Lower wins.
    #[serde(default)]
    pub priority: u8,
    /// National-number prefixes disambiguating this country from the main
    /// country of its dial code. Absent for main countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_codes: Option<Vec<String>>,
    /// Example-number placeholder, empty until loaded.
    #[serde(default)]
    pub placeholder: String,
}

impl Country {
    /// ISO2 code in uppercase, as used in emitted change records.
    pub fn iso2_upper(&self) -> String {
        self.iso2.to_uppercase()
    }
}

/// The blank record standing in for "no selection yet".
impl Default for Country {
    fn default() -> Self {
        Self {
            name: String::new(),
            iso2: String::new(),
            dial_code: DialCode::unset(),
            priority: 0,
            area_codes: None,
            placeholder: String::new(),
        }
    }
}
