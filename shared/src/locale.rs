// Locale conventions behind the formatting functions

use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};

use crate::error::{FormatError, FormatResult};
use crate::models::CurrencyCode;
use crate::number::RoundedDecimal;

/// Renders an amount of money in a given currency.
///
/// Callers go through this trait and [`DateFormatter`] so that one locale's
/// conventions can be swapped for another's without touching them.
pub trait CurrencyFormatter: Send + Sync {
    fn format_currency(&self, amount: f64, currency: &CurrencyCode) -> FormatResult<String>;
}

/// Renders wall-clock date-times.
pub trait DateFormatter: Send + Sync {
    /// Offset that zoned inputs are converted to before display.
    fn display_offset(&self) -> FixedOffset;
    fn format_date(&self, dt: &NaiveDateTime) -> String;
    fn format_date_time(&self, dt: &NaiveDateTime) -> String;
}

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Malaysia Time, UTC+08:00.
pub const MYT_OFFSET_SECS: i32 = 8 * 3600;

/// Malaysian English (`en-MY`) conventions.
///
/// Amounts use `,` between thousands and `.` before the fraction. Ringgit
/// amounts are written `RM 1,234.50`; other currencies put their symbol
/// directly before the number (`US$100.00`), or the code and a no-break
/// space when the symbol is just the code (`CHF 100.00`).
///
/// Dates are written `Jan 5, 2024` and times on a 12-hour clock with a
/// two-digit hour (`02:30 PM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalaysianEnglish {
    offset: FixedOffset,
}

impl MalaysianEnglish {
    pub const GROUP_SEPARATOR: char = ',';
    pub const DECIMAL_SEPARATOR: char = '.';
    pub const RINGGIT_PREFIX: &'static str = "RM ";

    pub fn new() -> Self {
        Self {
            offset: myt_offset(),
        }
    }

    /// Same conventions, but zoned inputs are shown at `offset` instead of Malaysia Time.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    fn number(&self, rounded: &RoundedDecimal) -> String {
        let integer = rounded.grouped_integer(Self::GROUP_SEPARATOR);
        if rounded.fraction.is_empty() {
            integer
        } else {
            format!("{}{}{}", integer, Self::DECIMAL_SEPARATOR, rounded.fraction)
        }
    }

    fn ringgit(&self, amount: f64) -> String {
        let rounded = RoundedDecimal::new(amount, 2);
        let sign = if rounded.negative { "-" } else { "" };
        format!("{}{}{}", Self::RINGGIT_PREFIX, sign, self.number(&rounded))
    }

    fn generic(&self, amount: f64, currency: &CurrencyCode) -> String {
        let rounded = RoundedDecimal::new(amount, currency.minor_units() as usize);
        let sign = if rounded.negative { "-" } else { "" };
        let symbol = currency.symbol();
        // A bare alphabetic symbol would run into the digits.
        let spacing = if symbol.chars().last().is_some_and(char::is_alphabetic) {
            "\u{a0}"
        } else {
            ""
        };
        format!("{}{}{}{}", sign, symbol, spacing, self.number(&rounded))
    }
}

impl Default for MalaysianEnglish {
    fn default() -> Self {
        Self::new()
    }
}

pub fn myt_offset() -> FixedOffset {
    FixedOffset::east_opt(MYT_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

impl CurrencyFormatter for MalaysianEnglish {
    fn format_currency(&self, amount: f64, currency: &CurrencyCode) -> FormatResult<String> {
        if !amount.is_finite() {
            tracing::debug!(amount, currency = currency.code(), "rejecting non-finite amount");
            return Err(FormatError::InvalidAmount(amount));
        }
        if currency.is_ringgit() {
            Ok(self.ringgit(amount))
        } else {
            Ok(self.generic(amount, currency))
        }
    }
}

impl DateFormatter for MalaysianEnglish {
    fn display_offset(&self) -> FixedOffset {
        self.offset
    }

    fn format_date(&self, dt: &NaiveDateTime) -> String {
        dt.format(DATE_FORMAT).to_string()
    }

    fn format_date_time(&self, dt: &NaiveDateTime) -> String {
        dt.format(DATE_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_ringgit_layout() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_currency(1234.5, &code("MYR")).unwrap(), "RM 1,234.50");
        assert_eq!(fmt.format_currency(-1234.5, &code("MYR")).unwrap(), "RM -1,234.50");
        assert_eq!(fmt.format_currency(0.0, &code("MYR")).unwrap(), "RM 0.00");
    }

    #[test]
    fn test_symbol_currencies() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_currency(100.0, &code("USD")).unwrap(), "US$100.00");
        assert_eq!(fmt.format_currency(-5.0, &code("USD")).unwrap(), "-US$5.00");
        assert_eq!(fmt.format_currency(1234.5, &code("EUR")).unwrap(), "€1,234.50");
        assert_eq!(fmt.format_currency(1.0, &code("GBP")).unwrap(), "£1.00");
    }

    #[test]
    fn test_code_currencies_get_no_break_space() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_currency(100.0, &code("CHF")).unwrap(), "CHF\u{a0}100.00");
        assert_eq!(fmt.format_currency(2500.0, &code("SGD")).unwrap(), "SGD\u{a0}2,500.00");
    }

    #[test]
    fn test_minor_units_follow_currency() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_currency(1000.4, &code("JPY")).unwrap(), "¥1,000");
        assert_eq!(fmt.format_currency(1.2345, &code("KWD")).unwrap(), "KWD\u{a0}1.235");
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let fmt = MalaysianEnglish::new();
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                fmt.format_currency(amount, &code("MYR")),
                Err(FormatError::InvalidAmount(_))
            ));
            assert!(matches!(
                fmt.format_currency(amount, &code("USD")),
                Err(FormatError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_date_layout() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_date(&at(2024, 1, 5, 0, 0)), "Jan 5, 2024");
        assert_eq!(fmt.format_date(&at(2023, 12, 31, 23, 59)), "Dec 31, 2023");
        assert_eq!(fmt.format_date(&at(999, 6, 15, 0, 0)), "Jun 15, 0999");
    }

    #[test]
    fn test_date_time_clock() {
        let fmt = MalaysianEnglish::new();
        assert_eq!(fmt.format_date_time(&at(2024, 1, 5, 14, 30)), "Jan 5, 2024, 02:30 PM");
        assert_eq!(fmt.format_date_time(&at(2024, 1, 5, 0, 0)), "Jan 5, 2024, 12:00 AM");
        assert_eq!(fmt.format_date_time(&at(2024, 1, 5, 12, 5)), "Jan 5, 2024, 12:05 PM");
        assert_eq!(fmt.format_date_time(&at(2024, 1, 5, 9, 7)), "Jan 5, 2024, 09:07 AM");
    }

    #[test]
    fn test_default_offset_is_malaysia_time() {
        assert_eq!(MalaysianEnglish::default().display_offset().local_minus_utc(), 8 * 3600);
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(MalaysianEnglish::with_offset(utc).display_offset(), utc);
    }
}
