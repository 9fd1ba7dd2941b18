//! Time windows for history queries.
//!
//! A window is either an explicit `[from, to]` pair or a fractional-day
//! lookback from now (`--days 0.5` is the last 12 hours). User-supplied date
//! strings are tried against an ordered list of accepted formats; the first
//! match wins and a string matching none of them is rejected before any
//! provider call is made.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Accepted date/time input formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// A query window over the terminal's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Window start.
    pub start: DateTime<Utc>,
    /// Window end.
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window covering the last `days` days (fractional allowed) ending now.
    #[must_use]
    pub fn lookback_days(days: f64) -> Self {
        Self::lookback_days_from(days, Utc::now())
    }

    /// Lookback window ending at an explicit instant. Used by tests.
    #[must_use]
    pub fn lookback_days_from(days: f64, end: DateTime<Utc>) -> Self {
        let seconds = (days * 86_400.0) as i64;
        Self {
            start: end - Duration::seconds(seconds),
            end,
        }
    }

    /// Window from parsed `--from`/`--to` strings; `to` defaults to now.
    pub fn from_bounds(from: &str, to: Option<&str>) -> Result<Self> {
        let start = parse_date(from)?;
        let end = match to {
            Some(raw) => parse_date(raw)?,
            None => Utc::now(),
        };
        Ok(Self { start, end })
    }

    /// True when the instant lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Parse a user-supplied date string against [`DATE_FORMATS`], first match
/// wins.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&parsed));
        }
        // Date-only formats need the missing midnight time filled in.
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0).unwrap_or_default()));
        }
    }
    Err(Error::InvalidDate {
        input: input.to_string(),
        expected: DATE_FORMATS.join(", "),
    })
}
