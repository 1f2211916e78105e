//! Method-call access to the string helpers
//!
//! ```rust
//! use rustf_strings::StrExt;
//!
//! assert_eq!("1234567890".to_phone_number_with_parens(), "(123) 456-7890");
//! assert_eq!("FirstName".convert_pascal_case_to_camel_case().unwrap(), "firstName");
//! ```

use crate::error::Result;
use crate::{encoding, parse, phone, text};
use std::borrow::Cow;

/// Extension methods on `str`, each delegating to the free function of the same name
pub trait StrExt {
    fn to_phone_number_with_parens(&self) -> Cow<'_, str>;
    fn to_phone_number_no_parens(&self) -> Cow<'_, str>;
    fn substring_safe(&self, index: usize) -> &str;
    fn convert_pascal_case_to_camel_case(&self) -> Result<String>;
    fn convert_camel_case_to_pascal_case(&self) -> Result<String>;
    fn base64_encode(&self) -> String;
    fn base64_decode(&self) -> Result<String>;
    fn to_int(&self, default: Option<i32>) -> Result<Option<i32>>;
}

impl StrExt for str {
    fn to_phone_number_with_parens(&self) -> Cow<'_, str> {
        phone::to_phone_number_with_parens(self).unwrap_or(Cow::Borrowed(self))
    }

    fn to_phone_number_no_parens(&self) -> Cow<'_, str> {
        phone::to_phone_number_no_parens(self).unwrap_or(Cow::Borrowed(self))
    }

    fn substring_safe(&self, index: usize) -> &str {
        text::substring_safe(self, index).unwrap_or(self)
    }

    fn convert_pascal_case_to_camel_case(&self) -> Result<String> {
        text::convert_pascal_case_to_camel_case(self)
    }

    fn convert_camel_case_to_pascal_case(&self) -> Result<String> {
        text::convert_camel_case_to_pascal_case(self)
    }

    // A present `str` can never trip the null-argument check.
    fn base64_encode(&self) -> String {
        encoding::encode_str(self)
    }

    fn base64_decode(&self) -> Result<String> {
        encoding::base64_decode(self)
    }

    fn to_int(&self, default: Option<i32>) -> Result<Option<i32>> {
        parse::to_int(self, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_match_free_functions() {
        assert_eq!("1234567890".to_phone_number_no_parens(), "123-456-7890");
        assert_eq!("12345".to_phone_number_with_parens(), "12345");
        assert_eq!("hello".substring_safe(3), "lo");
        assert_eq!("hello".substring_safe(9), "hello");
        assert_eq!("hello".base64_encode(), "aGVsbG8=");
        assert_eq!("aGVsbG8=".base64_decode().unwrap(), "hello");
        assert_eq!("".to_int(Some(3)).unwrap(), Some(3));
        assert_eq!(
            String::from("camelCase").convert_camel_case_to_pascal_case().unwrap(),
            "CamelCase"
        );
    }

    #[test]
    fn test_encode_agrees_with_checked_encoder() {
        let text = "ünïcödé";
        assert_eq!(
            text.base64_encode(),
            encoding::base64_encode(text).unwrap()
        );
    }
}
