//! Error types for derivative evaluation.
//!
//! Every variant here is fatal for the call that produced it: no partial
//! derivative is ever returned alongside an error. Constant fallback is not
//! an error, see [`ConstantWarning`](crate::core::constant::ConstantWarning).

use thiserror::Error;

/// Result type for fallible derivative evaluations.
pub type Result<T> = std::result::Result<T, GravityError>;

/// Errors raised before any force summation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GravityError {
    #[error("invalid argument: expected {expected}, found {found}")]
    InvalidArgument { expected: String, found: String },

    #[error("body {index} is missing required attribute `{field}`")]
    MissingAttribute { index: usize, field: &'static str },
}

impl GravityError {
    pub fn invalid_argument(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidArgument {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
