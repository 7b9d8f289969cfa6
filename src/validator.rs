//! The host-form validator.

use crate::parser;
use crate::types::PhoneInputValue;
use serde::{Deserialize, Serialize};

/// Validation error object returned to the host form.
///
/// Serializes as `{"phoneNumberInvalid": true}`, the shape the host form's
/// error rendering expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(rename = "phoneNumberInvalid")]
    pub phone_number_invalid: bool,
}

impl ValidationErrors {
    fn invalid() -> Self {
        Self {
            phone_number_invalid: true,
        }
    }
}

/// Validate a form control value.
///
/// An absent or empty value is considered valid; pair with a separate
/// required-field check to enforce non-empty input. A present value is
/// parsed against its country context, and anything the parser rejects or
/// deems invalid yields the error object.
pub fn phone_number_validator(value: Option<&PhoneInputValue>) -> Option<ValidationErrors> {
    let value = value?;
    if value.text().is_empty() {
        return None;
    }

    let parsed = match value.country_override() {
        Some(iso2) => parser::parse_number(value.text(), iso2),
        None => parser::parse_with_country(value.text(), None),
    };

    match parsed {
        Some(number) if number.is_valid() => None,
        _ => Some(ValidationErrors::invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeData;

    fn structured(number: &str, country_code: &str) -> PhoneInputValue {
        PhoneInputValue::Structured(ChangeData {
            number: number.to_string(),
            international_number: String::new(),
            national_number: String::new(),
            country_code: country_code.to_string(),
            dial_code: String::new(),
        })
    }

    #[test]
    fn test_absent_value_is_valid() {
        assert_eq!(phone_number_validator(None), None);
    }

    #[test]
    fn test_empty_value_is_valid() {
        let value = PhoneInputValue::from("");
        assert_eq!(phone_number_validator(Some(&value)), None);

        let value = structured("", "US");
        assert_eq!(phone_number_validator(Some(&value)), None);
    }

    #[test]
    fn test_valid_structured_value_passes() {
        let value = structured("+1 416 555 0100", "CA");
        assert_eq!(phone_number_validator(Some(&value)), None);
    }

    #[test]
    fn test_invalid_number_yields_error_object() {
        let value = structured("123", "US");
        let errors = phone_number_validator(Some(&value)).expect("should be invalid");
        assert!(errors.phone_number_invalid);
    }

    #[test]
    fn test_raw_value_without_calling_code_is_invalid() {
        // A raw value carries no country context, so it must be international.
        let value = PhoneInputValue::from("416 555 0100");
        assert!(phone_number_validator(Some(&value)).is_some());

        let value = PhoneInputValue::from("+14165550100");
        assert_eq!(phone_number_validator(Some(&value)), None);
    }

    #[test]
    fn test_error_object_wire_shape() {
        let errors = ValidationErrors::invalid();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"phoneNumberInvalid":true}"#);
    }
}
