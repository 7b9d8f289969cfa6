//! Core value types shared across the input pipeline.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// Country dial code (e.g., "1" for the United States, "44" for the UK).
///
/// Dial codes are stored without the leading '+' sign.
///
/// # Example
///
/// ```rust
/// use tel_input::DialCode;
///
/// let dc = DialCode::new("+44").unwrap();
/// assert_eq!(dc.to_string(), "44");
///
/// let dc = DialCode::new("1").unwrap();
/// assert_eq!(dc.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the dial code with a leading '+', as emitted to the host form.
    pub fn with_plus_prefix(&self) -> String {
        format!("+{}", self.0)
    }

    /// The blank dial code of a not-yet-selected country record. Not
    /// constructible through [`DialCode::new`].
    pub(crate) fn unset() -> Self {
        Self(String::new())
    }
}

impl PartialEq<&str> for DialCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for DialCode {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// PhoneNumberFormat
// =============================================================================

/// Output format requested by the host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhoneNumberFormat {
    /// International format, e.g. "+1 416-555-0100".
    #[default]
    International,
    /// National format, e.g. "(416) 555-0100".
    National,
}

// =============================================================================
// SearchCountryField
// =============================================================================

/// Fields the country search box matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchCountryField {
    /// Match ISO2 code, name or dial code.
    All,
    /// Match the two-letter ISO code only.
    Iso2,
    /// Match the country name only.
    Name,
    /// Match the dial code only.
    DialCode,
}

// =============================================================================
// ChangeData
// =============================================================================

/// Normalized change record emitted to the host form on every accepted edit.
///
/// Field names on the wire match the payload the host form persists
/// (`number`, `internationalNumber`, `nationalNumber`, `countryCode`,
/// `dialCode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeData {
    /// The raw value as displayed in the input.
    pub number: String,
    /// International rendering of the parsed number, empty when unparseable.
    pub international_number: String,
    /// National rendering of the parsed number, empty when unparseable.
    pub national_number: String,
    /// ISO2 code of the active country, uppercase.
    pub country_code: String,
    /// Dial code of the active country with a leading '+'.
    pub dial_code: String,
}

// =============================================================================
// PhoneInputValue
// =============================================================================

/// Value accepted by [`write_value`](crate::PhoneInput::write_value).
///
/// The host form either writes back a plain string typed by the user or a
/// previously persisted [`ChangeData`]. A structured value carries its own
/// country context, which takes precedence over the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneInputValue {
    /// Plain text, parsed against the currently selected country.
    Raw(String),
    /// A persisted change record; its `country_code` overrides the selection.
    Structured(ChangeData),
}

impl PhoneInputValue {
    /// The raw text carried by the value.
    pub fn text(&self) -> &str {
        match self {
            PhoneInputValue::Raw(s) => s,
            PhoneInputValue::Structured(data) => &data.number,
        }
    }

    /// The country override carried by a structured value.
    pub fn country_override(&self) -> Option<&str> {
        match self {
            PhoneInputValue::Raw(_) => None,
            PhoneInputValue::Structured(data) => Some(&data.country_code),
        }
    }
}

impl From<&str> for PhoneInputValue {
    fn from(s: &str) -> Self {
        PhoneInputValue::Raw(s.to_string())
    }
}

impl From<String> for PhoneInputValue {
    fn from(s: String) -> Self {
        PhoneInputValue::Raw(s)
    }
}

impl From<ChangeData> for PhoneInputValue {
    fn from(data: ChangeData) -> Self {
        PhoneInputValue::Structured(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_code_valid() {
        assert!(DialCode::new("1").is_ok());
        assert!(DialCode::new("380").is_ok());
        assert!(DialCode::new("44").is_ok());
    }

    #[test]
    fn test_dial_code_with_plus() {
        let dc = DialCode::new("+380").unwrap();
        assert_eq!(dc.as_str(), "380");
        assert_eq!(dc.with_plus_prefix(), "+380");
    }

    #[test]
    fn test_dial_code_trim() {
        let dc = DialCode::new("  +7  ").unwrap();
        assert_eq!(dc.as_str(), "7");
    }

    #[test]
    fn test_dial_code_empty() {
        assert!(matches!(DialCode::new(""), Err(DialCodeError::Empty)));
        assert!(matches!(DialCode::new("+"), Err(DialCodeError::Empty)));
    }

    #[test]
    fn test_dial_code_non_digit() {
        assert!(matches!(DialCode::new("12a"), Err(DialCodeError::NonDigit)));
    }

    #[test]
    fn test_dial_code_serde() {
        let dc = DialCode::new("+380").unwrap();
        let json = serde_json::to_string(&dc).unwrap();
        assert_eq!(json, r#""380""#);

        let dc: DialCode = serde_json::from_str(r#""+380""#).unwrap();
        assert_eq!(dc.as_str(), "380");
    }

    #[test]
    fn test_change_data_wire_names() {
        let data = ChangeData {
            number: "416-555-0100".to_string(),
            international_number: "+1 416-555-0100".to_string(),
            national_number: "(416) 555-0100".to_string(),
            country_code: "CA".to_string(),
            dial_code: "+1".to_string(),
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains(r#""internationalNumber""#), "json was: {json}");
        assert!(json.contains(r#""nationalNumber""#), "json was: {json}");
        assert!(json.contains(r#""countryCode""#), "json was: {json}");
        assert!(json.contains(r#""dialCode""#), "json was: {json}");

        let back: ChangeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_phone_input_value_raw() {
        let value = PhoneInputValue::from("+1 416 555 0100");
        assert_eq!(value.text(), "+1 416 555 0100");
        assert_eq!(value.country_override(), None);
    }

    #[test]
    fn test_phone_input_value_structured() {
        let data = ChangeData {
            number: "416-555-0100".to_string(),
            international_number: "+1 416-555-0100".to_string(),
            national_number: "(416) 555-0100".to_string(),
            country_code: "CA".to_string(),
            dial_code: "+1".to_string(),
        };
        let value = PhoneInputValue::from(data);
        assert_eq!(value.text(), "416-555-0100");
        assert_eq!(value.country_override(), Some("CA"));
    }

    #[test]
    fn test_phone_input_value_untagged_deserialize() {
        let raw: PhoneInputValue = serde_json::from_str(r#""+49 30 1234""#).unwrap();
        assert!(matches!(raw, PhoneInputValue::Raw(_)));

        let structured: PhoneInputValue = serde_json::from_str(
            r#"{"number":"1","internationalNumber":"","nationalNumber":"","countryCode":"US","dialCode":"+1"}"#,
        )
        .unwrap();
        assert!(matches!(structured, PhoneInputValue::Structured(_)));
    }
}
