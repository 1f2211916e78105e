//! RustF Strings - small, stateless string helpers
//!
//! - Phone number formatting (`(123) 456-7890`, `123-456-7890`)
//! - Substrings that never fail on an out-of-range index
//! - PascalCase / camelCase first-character conversion
//! - Base64 encoding of UTF-8 text
//! - Integer parsing with a default for empty input
//!
//! Every operation is available as a free function, as a method through
//! [`StrExt`], and by name through [`HelperRegistry`].
//!
//! # Example
//!
//! ```rust
//! use rustf_strings::{base64_decode, base64_encode, to_int, StrExt};
//!
//! # fn example() -> rustf_strings::Result<()> {
//! let encoded = base64_encode("hello")?;
//! assert_eq!(base64_decode(encoded.as_str())?, "hello");
//!
//! assert_eq!(to_int("", Some(10))?, Some(10));
//! assert_eq!("5551234567".to_phone_number_no_parens(), "555-123-4567");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod encoding;
pub mod error;
pub mod ext;
pub mod helpers;
pub mod parse;
pub mod phone;
pub mod text;

pub use encoding::{base64_decode, base64_encode};
pub use error::{Result, StringError};
pub use ext::StrExt;
pub use helpers::{Helper, HelperRegistry, HelperResult};
pub use parse::to_int;
pub use phone::{
    format_phone_number, to_phone_number_no_parens, to_phone_number_with_parens, PhoneStyle,
};
pub use text::{
    convert_camel_case_to_pascal_case, convert_pascal_case_to_camel_case, substring_safe,
};
