//! Nullable integer parsing

use crate::error::{Result, StringError};

/// Parse `value` as a base-10 `i32`, falling back to `default` only when empty
///
/// Absent and empty inputs yield `default`, which may itself be `None`.
/// Anything else must be an integer literal: surrounding ASCII whitespace
/// (tab through carriage return, and space) and a leading sign are accepted, but a malformed literal is an error rather than
/// a reason to use the default.
///
/// # Example
/// ```rust
/// use rustf_strings::parse::to_int;
///
/// assert_eq!(to_int("42", None).unwrap(), Some(42));
/// assert_eq!(to_int("", Some(7)).unwrap(), Some(7));
/// assert!(to_int("abc", Some(7)).is_err());
/// ```
pub fn to_int<'a>(value: impl Into<Option<&'a str>>, default: Option<i32>) -> Result<Option<i32>> {
    let value = match value.into() {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(default),
    };

    value
        .trim_matches(|c| matches!(c, '\t'..='\r' | ' '))
        .parse::<i32>().map(Some).map_err(|e| {
        log::trace!("Rejected integer literal {:?}: {}", value, e);
        StringError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integers() {
        assert_eq!(to_int("42", None).unwrap(), Some(42));
        assert_eq!(to_int("-17", Some(0)).unwrap(), Some(-17));
        assert_eq!(to_int("+8", None).unwrap(), Some(8));
        assert_eq!(to_int("  12 ", None).unwrap(), Some(12));
        assert_eq!(to_int("2147483647", None).unwrap(), Some(i32::MAX));
    }

    #[test]
    fn test_empty_uses_default() {
        assert_eq!(to_int("", Some(5)).unwrap(), Some(5));
        assert_eq!(to_int(None::<&str>, Some(5)).unwrap(), Some(5));
        assert_eq!(to_int("", None).unwrap(), None);
        assert_eq!(to_int(None::<&str>, None).unwrap(), None);
    }

    #[test]
    fn test_malformed_ignores_default() {
        assert!(matches!(to_int("abc", Some(1)), Err(StringError::Format(_))));
        assert!(matches!(to_int("4.2", None), Err(StringError::Format(_))));
        assert!(matches!(to_int("   ", Some(1)), Err(StringError::Format(_))));
    }

    #[test]
    fn test_only_ascii_whitespace_is_trimmed() {
        assert_eq!(to_int("\t\n 5 \r\x0b\x0c", None).unwrap(), Some(5));
        assert!(matches!(
            to_int("\u{3000}5", None),
            Err(StringError::Format(_))
        ));
        assert!(matches!(
            to_int("5\u{a0}", Some(1)),
            Err(StringError::Format(_))
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            to_int("2147483648", None),
            Err(StringError::Overflow(_))
        ));
        assert!(matches!(
            to_int("-2147483649", None),
            Err(StringError::Overflow(_))
        ));
    }
}
