use thiserror::Error;

pub type Result<T> = std::result::Result<T, StringError>;

/// Errors raised by the string helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringError {
    #[error("Value cannot be null: {param}")]
    NullArgument { param: String },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Value was either too large or too small: {0}")]
    Overflow(String),

    #[error("Index out of range: {0}")]
    OutOfRange(String),

    #[error("Helper error: {0}")]
    Helper(String),
}

impl StringError {
    pub fn null_argument(param: impl Into<String>) -> Self {
        Self::NullArgument {
            param: param.into(),
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn helper(msg: impl Into<String>) -> Self {
        Self::Helper(msg.into())
    }

    /// Whether the caller broke a precondition rather than passing bad data
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NullArgument { .. } | Self::OutOfRange(_))
    }
}

impl From<base64::DecodeError> for StringError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Format(format!("invalid Base64 input: {}", err))
    }
}

impl From<std::num::ParseIntError> for StringError {
    fn from(err: std::num::ParseIntError) -> Self {
        use std::num::IntErrorKind;

        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Self::Overflow(err.to_string())
            }
            _ => Self::Format(format!("input string was not in a correct format: {}", err)),
        }
    }
}
