//! Base64 encoding of UTF-8 text
//!
//! Uses the standard alphabet with padding.

use crate::error::{Result, StringError};
use base64::{engine::general_purpose, Engine as _};

/// Encode the UTF-8 bytes of `value` as Base64
///
/// Fails with [`StringError::NullArgument`] when `value` is absent.
pub fn base64_encode<'a>(value: impl Into<Option<&'a str>>) -> Result<String> {
    let value = value
        .into()
        .ok_or_else(|| StringError::null_argument("value"))?;

    Ok(encode_str(value))
}

pub(crate) fn encode_str(value: &str) -> String {
    general_purpose::STANDARD.encode(value.as_bytes())
}

/// Decode Base64 into text
///
/// Fails with [`StringError::NullArgument`] when `value` is absent and with
/// [`StringError::Format`] when it is not valid Base64. Decoded bytes that are
/// not valid UTF-8 are replaced with U+FFFD.
pub fn base64_decode<'a>(value: impl Into<Option<&'a str>>) -> Result<String> {
    let value = value
        .into()
        .ok_or_else(|| StringError::null_argument("value"))?;

    let bytes = general_purpose::STANDARD.decode(value).map_err(|e| {
        log::trace!("Rejected Base64 input of {} bytes: {}", value.len(), e);
        StringError::from(e)
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
