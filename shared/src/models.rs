use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FormatError, FormatResult};
use crate::iso4217::{self, Iso4217Entry};

/// Code of the Malaysian Ringgit, the currency amounts are shown in unless told otherwise.
pub const DEFAULT_CURRENCY: &str = "MYR";

/// A validated ISO 4217 currency code.
///
/// Parsing trims and upper-cases its input, so `" myr "` is the Ringgit and
/// takes the `RM ` layout. The dashboard's original browser helper compared
/// against `"MYR"` case-sensitively and would have rendered `RM100.00` for a
/// lower-case code; here case never changes the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(&'static Iso4217Entry);

impl CurrencyCode {
    pub fn ringgit() -> Self {
        Self(&iso4217::RINGGIT)
    }

    pub fn code(&self) -> &'static str {
        self.0.code
    }

    /// Digits after the decimal point, per ISO 4217.
    pub fn minor_units(&self) -> u8 {
        self.0.minor_units
    }

    /// Symbol used when displaying amounts to Malaysian-English readers.
    pub fn symbol(&self) -> &'static str {
        self.0.symbol
    }

    pub fn is_ringgit(&self) -> bool {
        self.0.code == DEFAULT_CURRENCY
    }
}

impl FromStr for CurrencyCode {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.bytes().all(|b| b.is_ascii_alphabetic()) {
            debug!(code = s, "rejecting malformed currency code");
            return Err(FormatError::InvalidCurrencyCode(s.to_string()));
        }
        iso4217::lookup(&normalized).map(Self).ok_or_else(|| {
            debug!(code = s, "rejecting unknown currency code");
            FormatError::InvalidCurrencyCode(s.to_string())
        })
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = FormatError;

    fn try_from(value: &str) -> FormatResult<Self> {
        value.parse()
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FormatError;

    fn try_from(value: String) -> FormatResult<Self> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.code().to_string()
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::ringgit()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Anything that can be shown as a date or a date-time.
///
/// Wall-clock values (`Naive`) are displayed as they are. Values that carry
/// an offset (`Zoned`) are first moved into the display offset of the
/// formatter. Text is parsed lazily by [`DateInput::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Naive(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
    Text(String),
}

// Offset-less forms that include a time of day.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// Offset-less forms without a time of day; these mean midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y"];

impl DateInput {
    /// Turns the input into the wall-clock time to display at `offset`.
    pub fn resolve(&self, offset: FixedOffset) -> FormatResult<NaiveDateTime> {
        match self {
            DateInput::Naive(dt) => Ok(*dt),
            DateInput::Zoned(dt) => Ok(dt.with_timezone(&offset).naive_local()),
            DateInput::Text(s) => Self::parse_text(s, offset),
        }
    }

    fn parse_text(raw: &str, offset: FixedOffset) -> FormatResult<NaiveDateTime> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(FormatError::InvalidDateString(raw.to_string()));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            trace!(input = s, "parsed as RFC 3339");
            return Ok(dt.with_timezone(&offset).naive_local());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            trace!(input = s, "parsed as RFC 2822");
            return Ok(dt.with_timezone(&offset).naive_local());
        }
        for fmt in DATE_TIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                trace!(input = s, format = fmt, "parsed as wall-clock date-time");
                return Ok(dt);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                trace!(input = s, format = fmt, "parsed as date");
                return Ok(date.and_time(NaiveTime::MIN));
            }
        }

        debug!(input = raw, "no date form matched");
        Err(FormatError::InvalidDateString(raw.to_string()))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Naive(dt)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Naive(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Zoned(dt.fixed_offset())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        DateInput::Text(s.clone())
    }
}
