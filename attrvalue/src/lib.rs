//! DynamoDB-style attribute values.
//!
//! This crate models the typed key/value record a document database uses on
//! the wire, and the two capability traits a type implements to be stored in
//! one:
//!
//! - [`AttributeValue`]: the record, one variant field set at a time
//! - [`MarshalAttribute`]: encode a value into a record
//! - [`UnmarshalAttribute`]: decode a record into an existing value
//!
//! Decoding is null-tolerant: a missing record, or a record without the field
//! the destination reads, leaves the destination untouched.
//!
//! # Example
//!
//! ```rust
//! use epoch_attrvalue::{marshal, unmarshal, AttributeValue};
//!
//! let av = marshal(&42i64);
//! assert_eq!(av, AttributeValue::number("42"));
//!
//! let n: i64 = unmarshal(&av).unwrap();
//! assert_eq!(n, 42);
//! ```

mod codec;
mod error;
mod value;

pub use codec::{
    marshal, marshal_field, unmarshal, unmarshal_field, Item, MarshalAttribute,
    UnmarshalAttribute,
};
pub use error::Error;
pub use value::AttributeValue;

#[cfg(test)]
mod tests;
