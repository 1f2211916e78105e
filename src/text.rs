//! Substring and casing helpers

use crate::error::{Result, StringError};

/// Suffix of `value` starting at character `index`, without ever failing
///
/// Absent and empty inputs are returned as is, and so is `value` itself when
/// `index` is at or past its length. The index counts characters, not bytes.
///
/// # Example
/// ```rust
/// use rustf_strings::text::substring_safe;
///
/// assert_eq!(substring_safe("hello", 2), Some("llo"));
/// assert_eq!(substring_safe("hello", 10), Some("hello"));
/// ```
pub fn substring_safe<'a>(value: impl Into<Option<&'a str>>, index: usize) -> Option<&'a str> {
    let value = value.into()?;

    match value.char_indices().nth(index) {
        Some((offset, _)) => Some(&value[offset..]),
        None => Some(value),
    }
}

/// Lowercase the first character: `HelloWorld` -> `helloWorld`
///
/// The character count never changes: a first character whose lowercase
/// form spans several characters (`İ`) is left as it is.
pub fn convert_pascal_case_to_camel_case(value: &str) -> Result<String> {
    map_first_char(value, |c| single_char(c.to_lowercase(), c))
}

/// Uppercase the first character: `helloWorld` -> `HelloWorld`
///
/// Like its counterpart, only one-to-one mappings apply, so `ß` stays `ß`.
pub fn convert_camel_case_to_pascal_case(value: &str) -> Result<String> {
    map_first_char(value, |c| single_char(c.to_uppercase(), c))
}

/// The mapped character when the case mapping yields exactly one
fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

fn map_first_char(value: &str, convert: impl Fn(char) -> char) -> Result<String> {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut converted = String::with_capacity(value.len());
            converted.push(convert(first));
            converted.push_str(chars.as_str());
            Ok(converted)
        }
        None => {
            log::trace!("Rejected case conversion of an empty string");
            Err(StringError::out_of_range(
                "cannot convert the first character of an empty string",
            ))
        }
    }
}
