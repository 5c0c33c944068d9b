use thiserror::Error;

// Record encoding/decoding violations. These are user-input errors: the
// operation that hit one leaves all pages untouched.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("expected {expected} values but got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("attribute '{attribute}' must be {expected}")]
    TypeMismatch {
        attribute: String,
        expected: String,
    },

    #[error("attribute '{attribute}' is limited to {max} bytes")]
    LengthExceeded { attribute: String, max: i32 },

    #[error("attribute '{0}' cannot be null")]
    NullNotAllowed(String),

    #[error("record bytes are truncated")]
    Truncated,

    #[error("stored string is not valid utf-8")]
    InvalidUtf8,
}
