//! Unix seconds timestamp type.

use chrono::{DateTime, Local, Offset, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Result;

/// Seconds elapsed since the Unix epoch.
///
/// Negative values are instants before 1970-01-01T00:00:00Z. There is no
/// sub-second part, so every encoding round-trips exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seconds(i64);

impl Seconds {
    /// Creates a Seconds from a raw count.
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the current time as Seconds.
    pub fn now() -> Self {
        Self::from_time(&Utc::now())
    }

    /// Returns the whole seconds between the epoch and `t`.
    ///
    /// The sub-second part of `t` is dropped; the offset of `t` does not
    /// affect the result.
    pub fn from_time<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self(t.timestamp())
    }

    /// Returns the raw seconds value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns the time plus the whole seconds of `d`.
    ///
    /// Any sub-second remainder of `d` is truncated toward zero.
    pub fn add(&self, d: TimeDelta) -> Self {
        Self(self.0.saturating_add(d.num_seconds()))
    }

    /// Returns the time plus the whole seconds of a std duration.
    pub fn add_std(&self, d: Duration) -> Self {
        let secs = i64::try_from(d.as_secs()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(secs))
    }

    /// Returns the signed number of seconds from `other` to this time.
    pub fn sub(&self, other: &Self) -> i64 {
        self.0.saturating_sub(other.0)
    }

    /// Reports whether this time is before the other.
    pub fn before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Reports whether this time is after the other.
    pub fn after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Reports whether this is the epoch itself.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the calendar time in the local time zone.
    pub fn time(&self) -> DateTime<Local> {
        self.time_in(&Local)
    }

    /// Returns the calendar time in UTC.
    ///
    /// Values beyond what chrono can represent clamp to its range ends.
    pub fn utc(&self) -> DateTime<Utc> {
        self.time_in(&Utc)
    }

    /// Returns the calendar time in the given time zone.
    ///
    /// Values whose local time chrono cannot represent clamp to the first or
    /// last whole second that it can.
    pub fn time_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        let secs = self.0.clamp(min_secs(tz), max_secs(tz));
        DateTime::from_timestamp(secs, 0)
            .unwrap_or_default()
            .with_timezone(tz)
    }

    /// Returns the calendar time in the given time zone, or None when its
    /// local time is outside chrono's range.
    pub fn checked_time_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        if self.0 < min_secs(tz) || self.0 > max_secs(tz) {
            return None;
        }
        DateTime::from_timestamp(self.0, 0).map(|t| t.with_timezone(tz))
    }

    /// Encodes the value as JSON text.
    pub fn marshal_json(&self) -> String {
        // An integer literal is its own JSON encoding.
        self.0.to_string()
    }

    /// Decodes JSON text into this value.
    ///
    /// `null` leaves the value unchanged. Anything other than an integer
    /// literal is an error.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        // serde_json reads `-0` as a float.
        if data.trim_ascii() == b"-0" {
            self.0 = 0;
            return Ok(());
        }

        let mut de = serde_json::Deserializer::from_slice(data);
        Seconds::deserialize_in_place(&mut de, self)?;
        de.end()?;
        Ok(())
    }
}

fn offset_secs<Tz: TimeZone>(tz: &Tz, t: &DateTime<Utc>) -> i64 {
    i64::from(tz.offset_from_utc_datetime(&t.naive_utc()).fix().local_minus_utc())
}

/// The last whole second whose local time in `tz` chrono can represent.
fn max_secs<Tz: TimeZone>(tz: &Tz) -> i64 {
    let max = DateTime::<Utc>::MAX_UTC;
    max.timestamp() - offset_secs(tz, &max).max(0)
}

/// The first whole second whose local time in `tz` chrono can represent.
fn min_secs<Tz: TimeZone>(tz: &Tz) -> i64 {
    let min = DateTime::<Utc>::MIN_UTC;
    min.timestamp() - offset_secs(tz, &min).min(0)
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seconds {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Serialize for Seconds {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

/// Decoding `null` into a fresh value yields zero. Decoding in place leaves
/// the destination unchanged, as [`Seconds::unmarshal_json`] does.
impl<'de> Deserialize<'de> for Seconds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let secs = Option::<i64>::deserialize(deserializer)?;
        Ok(Self(secs.unwrap_or_default()))
    }

    fn deserialize_in_place<D: Deserializer<'de>>(
        deserializer: D,
        place: &mut Self,
    ) -> std::result::Result<(), D::Error> {
        if let Some(secs) = Option::<i64>::deserialize(deserializer)? {
            place.0 = secs;
        }
        Ok(())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Seconds {
    fn from(t: DateTime<Tz>) -> Self {
        Self::from_time(&t)
    }
}

impl From<Seconds> for DateTime<Utc> {
    fn from(s: Seconds) -> Self {
        s.utc()
    }
}

impl From<i64> for Seconds {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<Seconds> for i64 {
    fn from(s: Seconds) -> Self {
        s.0
    }
}
