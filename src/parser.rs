//! Thin adapter over the `phonenumber` crate.
//!
//! Parsing, validation and formatting are fully delegated; this module only
//! shapes the parsed number into the pieces the rest of the pipeline needs
//! (calling code, the digits after it, and the two display formats).

use phonenumber::{Mode, PhoneNumber, country};
use std::str::FromStr;

/// A successfully parsed phone number.
#[derive(Debug, Clone)]
pub struct ParsedNumber {
    inner: PhoneNumber,
}

impl ParsedNumber {
    /// The international calling code, e.g. 1 for NANP numbers.
    pub fn calling_code(&self) -> u16 {
        self.inner.code().value()
    }

    /// The digits following the calling code, taken from the E.164
    /// rendering. This is what area-code resolution matches against.
    pub fn national_digits(&self) -> String {
        let e164 = self.inner.format().mode(Mode::E164).to_string();
        let code = self.calling_code().to_string();
        e164.trim_start_matches('+')
            .strip_prefix(code.as_str())
            .unwrap_or_default()
            .to_string()
    }

    /// International format, e.g. "+1 416-555-0100".
    pub fn format_international(&self) -> String {
        self.inner.format().mode(Mode::International).to_string()
    }

    /// National format, e.g. "(416) 555-0100".
    pub fn format_national(&self) -> String {
        self.inner.format().mode(Mode::National).to_string()
    }

    /// Whether the number is valid for its numbering plan.
    pub fn is_valid(&self) -> bool {
        phonenumber::is_valid(&self.inner)
    }
}

/// Parse `text` in the context of an ISO2 country code.
///
/// Any failure (unknown country, unparseable text) is recovered locally as
/// `None`; the caller keeps its current selection and propagates nothing.
pub fn parse_number(text: &str, iso2: &str) -> Option<ParsedNumber> {
    let id = country::Id::from_str(&iso2.to_uppercase()).ok();
    parse_with_country(text, id)
}

/// Parse `text` with an optional country context.
///
/// Without a country the text must carry its own '+' calling code.
pub fn parse_with_country(text: &str, id: Option<country::Id>) -> Option<ParsedNumber> {
    phonenumber::parse(id, text)
        .ok()
        .map(|inner| ParsedNumber { inner })
}
