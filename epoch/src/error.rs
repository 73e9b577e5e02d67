//! Error types for decoding epoch seconds.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type alias for epoch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a serialized value cannot be decoded.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON input is neither an integer literal nor `null`.
    #[error("epoch: malformed json literal: {0}")]
    MalformedLiteral(#[from] serde_json::Error),

    /// The attribute's `N` field is not a base-10 64-bit integer.
    #[error("epoch: malformed numeric string {value:?}: {source}")]
    MalformedNumericString {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl From<epoch_attrvalue::Error> for Error {
    fn from(err: epoch_attrvalue::Error) -> Self {
        match err {
            epoch_attrvalue::Error::NumberFormat { value, source } => {
                Error::MalformedNumericString { value, source }
            }
        }
    }
}
