// Display helpers used by the dashboard pages to render metric cards and date fields.
use crate::error::FormatResult;
use crate::locale::{CurrencyFormatter, DateFormatter, MalaysianEnglish};
use crate::models::{CurrencyCode, DateInput, DEFAULT_CURRENCY};

/// Formats `amount` in `currency` for Malaysian-English readers.
///
/// Ringgit amounts come out as `RM 1,234.50`; any other ISO 4217 code uses
/// its own symbol and minor units, e.g. `US$100.00` or `¥1,000`.
///
/// # Errors
///
/// `InvalidCurrencyCode` for anything that is not an ISO 4217 code and
/// `InvalidAmount` for NaN or an infinity.
pub fn format_currency(amount: f64, currency: &str) -> FormatResult<String> {
    let code: CurrencyCode = currency.parse()?;
    MalaysianEnglish::default().format_currency(amount, &code)
}

/// `format_currency(amount, DEFAULT_CURRENCY)`.
pub fn format_ringgit(amount: f64) -> FormatResult<String> {
    format_currency(amount, DEFAULT_CURRENCY)
}

/// Formats a date as `Jan 5, 2024`. Strings are parsed first.
pub fn format_date(date: impl Into<DateInput>) -> FormatResult<String> {
    format_date_with(&MalaysianEnglish::default(), date)
}

/// Formats a date and time as `Jan 5, 2024, 02:30 PM`. Strings are parsed first.
pub fn format_date_time(date: impl Into<DateInput>) -> FormatResult<String> {
    format_date_time_with(&MalaysianEnglish::default(), date)
}

/// [`format_date`] with the conventions and display offset of `formatter`.
pub fn format_date_with<F: DateFormatter + ?Sized>(
    formatter: &F,
    date: impl Into<DateInput>,
) -> FormatResult<String> {
    let dt = date.into().resolve(formatter.display_offset())?;
    Ok(formatter.format_date(&dt))
}

/// [`format_date_time`] with the conventions and display offset of `formatter`.
pub fn format_date_time_with<F: DateFormatter + ?Sized>(
    formatter: &F,
    date: impl Into<DateInput>,
) -> FormatResult<String> {
    let dt = date.into().resolve(formatter.display_offset())?;
    Ok(formatter.format_date_time(&dt))
}
