//! Unix epoch seconds.
//!
//! This crate provides [`Seconds`], a whole-second timestamp measured from
//! 1970-01-01T00:00:00Z, and its encodings:
//!
//! - JSON: a bare integer literal, via `serde`
//! - Attribute value: the `N` field of an [`AttributeValue`]
//!
//! Both decoders are null-tolerant. A JSON `null`, a missing record or a
//! record without `N` leave the destination unchanged.
//!
//! # Example
//!
//! ```rust
//! use epoch::{marshal, Seconds};
//! use chrono::{FixedOffset, TimeDelta};
//!
//! let s = Seconds::new(123);
//! assert_eq!(serde_json::to_string(&s).unwrap(), "123");
//! assert_eq!(marshal(&s).as_n(), Some("123"));
//!
//! let later = s.add(TimeDelta::milliseconds(1500));
//! assert_eq!(later.as_i64(), 124);
//!
//! let tz = FixedOffset::east_opt(8 * 3600).unwrap();
//! assert_eq!(Seconds::from_time(&s.time_in(&tz)), s);
//! ```

mod attr;
mod error;
mod seconds;

pub use epoch_attrvalue::{
    marshal, marshal_field, unmarshal, unmarshal_field, AttributeValue, Item, MarshalAttribute,
    UnmarshalAttribute,
};
pub use error::{Error, Result};
pub use seconds::Seconds;
