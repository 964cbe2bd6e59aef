/// Errors from writing a record into an encoder.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("duplicate key '{0}' in keyed container")]
    DuplicateKey(String),

    #[error("encode error: {0}")]
    Other(String),
}

/// Errors from reading a record out of a decoder.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("expected struct, got {actual}")]
    ExpectedStruct { actual: &'static str },

    #[error("missing required key '{key}'")]
    MissingKey { key: String },

    #[error("type mismatch for key '{key}': {message}")]
    TypeMismatch { key: String, message: String },

    #[error("decode error: {0}")]
    Other(String),
}

/// Why a `Value` could not be converted into a member's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("expected {expected}, got {actual}")]
    Mismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("integer {0} out of range")]
    OutOfRange(i64),
}

impl ConversionError {
    pub(crate) fn mismatch(expected: &'static str, actual: &crate::value::Value) -> Self {
        ConversionError::Mismatch {
            expected,
            actual: actual.type_name(),
        }
    }
}

/// Top-level error type that wraps all sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type alias for codable operations.
pub type Result<T> = std::result::Result<T, Error>;
