//! Keystroke sanitation for the phone text field.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may be typed into the field.
static ALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]$").expect("allowed-chars pattern is invalid"));

/// Control-key shortcuts that must keep working (select, copy, paste, cut).
static ALLOWED_CTRL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[axcv]$").expect("ctrl-chars pattern is invalid"));

/// Navigation and editing keys passed through unchanged.
const ALLOWED_OTHER_KEYS: &[&str] = &[
    "ArrowLeft",
    "ArrowUp",
    "ArrowRight",
    "ArrowDown",
    "Home",
    "End",
    "Insert",
    "Delete",
    "Backspace",
];

/// Whether a key event should reach the input.
///
/// `key` is the DOM-style key name ("4", "+", "ArrowLeft", ...); `ctrl`
/// is the state of the control modifier.
pub fn is_allowed_key(key: &str, ctrl: bool) -> bool {
    ALLOWED_CHARS.is_match(key)
        || (ctrl && ALLOWED_CTRL_CHARS.is_match(key))
        || ALLOWED_OTHER_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_phone_punctuation_are_allowed() {
        for key in ["0", "9", "+", "-", "(", ")", " "] {
            assert!(is_allowed_key(key, false), "'{key}' should be allowed");
        }
    }

    #[test]
    fn test_letters_are_rejected() {
        for key in ["a", "x", "Z", "."] {
            assert!(!is_allowed_key(key, false), "'{key}' should be rejected");
        }
    }

    #[test]
    fn test_clipboard_shortcuts_require_ctrl() {
        assert!(is_allowed_key("v", true));
        assert!(is_allowed_key("c", true));
        assert!(!is_allowed_key("v", false));
        assert!(!is_allowed_key("b", true));
    }

    #[test]
    fn test_navigation_keys_pass_through() {
        assert!(is_allowed_key("ArrowLeft", false));
        assert!(is_allowed_key("Backspace", false));
        assert!(!is_allowed_key("Escape", false));
    }
}
