mod clock;
mod consts;
mod format;
mod prelude;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use format::{FormatError, FormatStyle, WeekdayStyle, resolve_zone};
pub use types::Weekday;

use crate::prelude::*;
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single moment in time, stored as milliseconds since the Unix epoch
/// (1970-01-01T00:00:00 UTC).
///
/// The value is immutable once constructed; every accessor is a pure read.
/// A distinguished invalid sentinel ([`Instant::INVALID`]) stands in for
/// unparseable input and propagates through all accessors as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(Option<i64>);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unrecognized date format: {_0}")]
    UnrecognizedFormat(String),
    #[display(fmt = "Date out of range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

const fn in_range(millis: i64) -> bool {
    millis >= -MAX_EPOCH_MILLIS && millis <= MAX_EPOCH_MILLIS
}

/// Resolves a wall-clock value in the host local zone. Ambiguous values
/// (clocks rolled back) take the earlier mapping; values inside a DST gap
/// roll forward past it.
fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(TimeDelta::try_hours(1)?)?;
        Local.from_local_datetime(&shifted).earliest()
    })
}

impl Instant {
    /// The sentinel for "could not be parsed". All accessors return `None`.
    pub const INVALID: Self = Self(None);

    /// Creates an Instant from milliseconds since the epoch.
    /// Offsets beyond [`MAX_EPOCH_MILLIS`] in either direction collapse to
    /// the invalid sentinel.
    pub const fn from_epoch_millis(millis: i64) -> Self {
        if in_range(millis) {
            Self(Some(millis))
        } else {
            Self::INVALID
        }
    }

    fn checked(millis: i64) -> Option<Self> {
        in_range(millis).then_some(Self(Some(millis)))
    }

    /// The current moment, read from the host system clock.
    pub fn now() -> Self {
        SystemClock.now()
    }

    /// Creates an Instant at local midnight of the given calendar date.
    /// `month` is zero-based (0 = January). Out-of-range components roll
    /// over into the following unit rather than failing: day 32 of January
    /// is February 1, month 12 is January of the next year.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        Self::from_components(year, month, day, 0, 0, 0, 0)
    }

    /// Creates an Instant from calendar components in the host local zone.
    /// `month` is zero-based; every component may overflow its unit and
    /// rolls over into the next one.
    pub fn from_components(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Self {
        Self(Self::components_to_millis(
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        ))
    }

    fn components_to_millis(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Option<i64> {
        // Normalize the month first so the day offset lands in the right
        // month, then apply days and time-of-day as plain arithmetic.
        let months = i64::from(year) * MONTHS_PER_YEAR + i64::from(month);
        let civil_year = i32::try_from(months.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month0 = u32::try_from(months.rem_euclid(MONTHS_PER_YEAR)).ok()?;

        let first_of_month = NaiveDate::from_ymd_opt(civil_year, month0 + 1, 1)?;
        let date = first_of_month.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)?;

        let time_millis = ((i64::from(hour) * 60 + i64::from(minute)) * 60 + i64::from(second))
            * MILLIS_PER_SECOND
            + i64::from(millisecond);
        let naive = date
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(TimeDelta::try_milliseconds(time_millis)?)?;

        let resolved = resolve_local(naive)?;
        let millis = resolved.timestamp_millis();
        in_range(millis).then_some(millis)
    }

    /// Parses a date string permissively: unparseable input yields the
    /// invalid sentinel instead of an error. See [`FromStr`] for the strict
    /// variant and the format resolution order.
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or(Self::INVALID)
    }

    /// Whether this Instant holds a real epoch offset
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the epoch
    #[inline]
    pub const fn epoch_millis(&self) -> Option<i64> {
        self.0
    }

    /// Whole seconds since the epoch, floor-divided (truncating toward
    /// negative infinity for pre-epoch instants)
    pub fn epoch_seconds(&self) -> Option<i64> {
        Some(self.0?.div_euclid(MILLIS_PER_SECOND))
    }

    fn utc_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0?)
    }

    fn local_datetime(&self) -> Option<DateTime<Local>> {
        self.utc_datetime().map(|dt| dt.with_timezone(&Local))
    }

    pub(crate) fn zoned<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.utc_datetime().map(|dt| dt.with_timezone(tz))
    }

    /// Calendar year in the host local zone
    pub fn year(&self) -> Option<i32> {
        self.local_datetime().map(|dt| dt.year())
    }

    /// Month in the host local zone, 1-based (1 = January)
    pub fn month(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.month())
    }

    /// Month in the host local zone, zero-based (0 = January), matching the
    /// convention of [`Instant::from_ymd`]
    pub fn month0(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.month0())
    }

    /// Day of the month in the host local zone, 1-31
    pub fn day(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.day())
    }

    /// Day of the week in the host local zone
    pub fn weekday(&self) -> Option<Weekday> {
        self.local_datetime().map(|dt| Weekday::from(dt.weekday()))
    }

    /// Hour of the day in the host local zone, 0-23
    pub fn hour(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.hour())
    }

    /// Minute in the host local zone, 0-59
    pub fn minute(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.minute())
    }

    /// Second in the host local zone, 0-59
    pub fn second(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.second())
    }

    /// Millisecond within the current second, 0-999
    pub fn millisecond(&self) -> Option<u32> {
        self.local_datetime().map(|dt| dt.timestamp_subsec_millis())
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    /// Strict parsing with a fixed format resolution order:
    ///
    /// 1. RFC 3339 / ISO 8601 with an explicit offset (`2025-01-14T21:00:00Z`)
    /// 2. ISO 8601 wall-clock, `YYYY-MM-DD[THH:MM:SS[.fff]]`, local zone
    /// 3. Month-first fallback, `MM-DD-YYYY` or `M/D/YYYY`, local midnight
    ///
    /// Structurally ambiguous strings such as "01-14-2025" therefore resolve
    /// month-first (January 14), never day-first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::checked(dt.timestamp_millis())
                .ok_or_else(|| ParseError::OutOfRange(trimmed.to_owned()));
        }

        let naive = if trimmed.contains(MONTH_FIRST_SEPARATOR) {
            parse_date_at_midnight(trimmed, MONTH_FIRST_SLASH_FORMAT)
        } else {
            parse_iso_wall(trimmed)
                .or_else(|| parse_date_at_midnight(trimmed, MONTH_FIRST_HYPHEN_FORMAT))
        };

        let naive = naive.ok_or_else(|| ParseError::UnrecognizedFormat(trimmed.to_owned()))?;
        let resolved =
            resolve_local(naive).ok_or_else(|| ParseError::UnrecognizedFormat(trimmed.to_owned()))?;
        Self::checked(resolved.timestamp_millis())
            .ok_or_else(|| ParseError::OutOfRange(trimmed.to_owned()))
    }
}

fn parse_iso_wall(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, ISO_DATETIME_FORMAT)
        .ok()
        .or_else(|| parse_date_at_midnight(s, ISO_DATE_FORMAT))
}

fn parse_date_at_midnight(s: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.utc_datetime() {
            Some(dt) => write!(f, "{}", dt.format(DISPLAY_FORMAT)),
            None => f.write_str(INVALID_DISPLAY),
        }
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.is_valid() {
            serializer.serialize_str(&self.to_string())
        } else {
            // the invalid sentinel round-trips as null
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::INVALID),
        }
    }
}
