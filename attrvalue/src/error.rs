//! Error types for attribute decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when an attribute value cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `N` field is not a base-10 integer.
    #[error("attrvalue: invalid number {value:?}: {source}")]
    NumberFormat {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// Creates a number format error for the given text.
    pub fn number_format(value: impl Into<String>, source: ParseIntError) -> Self {
        Error::NumberFormat {
            value: value.into(),
            source,
        }
    }
}
