//! Millisecond-precision BSON datetimes and their RFC 3339 text form.

use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::error::{Error, Result};

/// A BSON datetime: a signed count of milliseconds since the Unix epoch.
///
/// Extended JSON writes a datetime as `{ "$date": { "$numberLong": "<millis>" } }`, which covers
/// the whole `i64` range. The relaxed `{ "$date": "<RFC 3339>" }` form is accepted on input but
/// only reaches dates the calendar can name.
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dt = bson_extjson::DateTime::parse_rfc3339_str("1998-02-12T00:01:00.023Z")?;
/// assert_eq!(dt.timestamp_millis(), 887241660023);
/// # Ok(())
/// # }
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
pub struct DateTime(i64);

impl DateTime {
    /// The latest datetime BSON can hold.
    pub const MAX: Self = Self::from_millis(i64::MAX);

    /// The earliest datetime BSON can hold.
    pub const MIN: Self = Self::from_millis(i64::MIN);

    /// Makes a [`DateTime`] from milliseconds since 1970-01-01T00:00:00Z.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub const fn timestamp_millis(self) -> i64 {
        self.0
    }

    fn to_calendar(self) -> Option<OffsetDateTime> {
        OffsetDateTime::UNIX_EPOCH.checked_add(time::Duration::milliseconds(self.0))
    }

    /// Formats this datetime as RFC 3339. Fails when the instant lies outside the calendar range
    /// of the [`time`] crate (years -9999 through 9999).
    pub fn try_to_rfc3339_string(self) -> Result<String> {
        let dt = self.to_calendar().ok_or_else(|| {
            Error::cannot_format_datetime(format!(
                "{} milliseconds is outside the representable calendar range",
                self.0
            ))
        })?;
        dt.format(&Rfc3339).map_err(Error::cannot_format_datetime)
    }

    /// Parses an RFC 3339 timestamp, truncating anything finer than a millisecond.
    pub fn parse_rfc3339_str(s: impl AsRef<str>) -> Result<Self> {
        let s = s.as_ref();
        let dt = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|e| Error::invalid_datetime_value(format!("{s:?} is not RFC 3339: {e}")))?;

        i64::try_from(dt.unix_timestamp_nanos() / 1_000_000)
            .map(Self::from_millis)
            .map_err(|_| Error::invalid_datetime_value(format!("{s:?} is out of range")))
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("DateTime");
        match self.to_calendar() {
            Some(dt) => tup.field(&dt),
            None => tup.field(&self.0),
        };
        tup.finish()
    }
}

/// RFC 3339 when the calendar can name the instant, raw milliseconds otherwise.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_to_rfc3339_string() {
            Ok(s) => f.write_str(&s),
            Err(_) => fmt::Display::fmt(&self.0, f),
        }
    }
}
