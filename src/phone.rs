//! Phone number formatting
//!
//! Reformats ten-character strings into the North American display layouts.
//! The split is positional: the characters are not checked to be digits, so
//! any ten-character input is rearranged. Inputs of any other length pass
//! through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Number of characters a string must have to be reformatted
pub const PHONE_LENGTH: usize = 10;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(.{3})(.{3})(.{4})$").expect("phone: Invalid phone pattern regex")
});

/// Display layout for a formatted phone number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneStyle {
    /// `(123) 456-7890`
    #[default]
    Parens,
    /// `123-456-7890`
    Dashes,
}

impl PhoneStyle {
    fn replacement(self) -> &'static str {
        match self {
            PhoneStyle::Parens => "(${1}) ${2}-${3}",
            PhoneStyle::Dashes => "${1}-${2}-${3}",
        }
    }
}

/// Format a phone number in the given style
///
/// Returns `None` only when the input is absent. Empty strings and strings
/// that are not exactly ten characters long come back borrowed and unchanged.
pub fn format_phone_number<'a>(
    phone: impl Into<Option<&'a str>>,
    style: PhoneStyle,
) -> Option<Cow<'a, str>> {
    let phone = phone.into()?;

    if phone.is_empty() || phone.chars().count() != PHONE_LENGTH {
        return Some(Cow::Borrowed(phone));
    }

    Some(PHONE_PATTERN.replace(phone, style.replacement()))
}

/// Format as `(123) 456-7890`
///
/// # Example
/// ```rust
/// use rustf_strings::phone::to_phone_number_with_parens;
///
/// let formatted = to_phone_number_with_parens("1234567890");
/// assert_eq!(formatted.as_deref(), Some("(123) 456-7890"));
/// ```
pub fn to_phone_number_with_parens<'a>(phone: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    format_phone_number(phone, PhoneStyle::Parens)
}

/// Format as `123-456-7890`
pub fn to_phone_number_no_parens<'a>(phone: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    format_phone_number(phone, PhoneStyle::Dashes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_parens() {
        assert_eq!(
            to_phone_number_with_parens("1234567890").unwrap(),
            "(123) 456-7890"
        );
    }

    #[test]
    fn test_no_parens() {
        assert_eq!(
            to_phone_number_no_parens("1234567890").unwrap(),
            "123-456-7890"
        );
    }

    #[test]
    fn test_wrong_length_is_unchanged() {
        for input in ["", "123", "123456789", "12345678901"] {
            let result = to_phone_number_with_parens(input).unwrap();
            assert!(matches!(result, Cow::Borrowed(_)));
            assert_eq!(result, input);
            assert_eq!(to_phone_number_no_parens(input).unwrap(), input);
        }
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(to_phone_number_with_parens(None::<&str>), None);
        assert_eq!(to_phone_number_no_parens(None::<&str>), None);
    }

    #[test]
    fn test_non_digits_are_rearranged() {
        assert_eq!(
            to_phone_number_with_parens("abcdefghij").unwrap(),
            "(abc) def-ghij"
        );
        assert_eq!(to_phone_number_no_parens("55 12\n3456").unwrap(), "55 -12\n-3456");
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(
            to_phone_number_no_parens("ééééééćććć").unwrap(),
            "ééé-ééé-ćććć"
        );
    }

    #[test]
    fn test_style_deserializes_from_config() {
        let style: PhoneStyle = serde_json::from_str("\"dashes\"").unwrap();
        assert_eq!(style, PhoneStyle::Dashes);
        assert_eq!(PhoneStyle::default(), PhoneStyle::Parens);
        assert_eq!(
            format_phone_number("8005551234", style).unwrap(),
            "800-555-1234"
        );
    }
}
