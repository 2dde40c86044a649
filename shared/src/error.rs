use thiserror::Error;

/// Reasons a value cannot be rendered for display.
///
/// Every formatting call either returns the full string or exactly one of
/// these; nothing is retried or partially rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid currency code: '{0}' is not an ISO 4217 code")]
    InvalidCurrencyCode(String),

    #[error("Invalid date string: '{0}'")]
    InvalidDateString(String),

    // NaN and the infinities have no monetary meaning, so they are refused outright.
    #[error("Invalid amount: {0} is not a finite number")]
    InvalidAmount(f64),
}

pub type FormatResult<T> = Result<T, FormatError>;
