// Subcommand execution: each command turns its raw argument into one formatted string
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::Serialize;
use shared::utils::{format_date_time_with, format_date_with};
use shared::{CurrencyCode, CurrencyFormatter, MalaysianEnglish};
use tracing::debug;

use crate::config::FormatSettings;
use crate::error::CliError;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Format a monetary amount
    Currency {
        /// Amount, e.g. 1234.5
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// ISO 4217 code; defaults to the configured currency
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Format a date as "Jan 5, 2024"
    Date {
        /// Date or date-time, e.g. 2024-01-05
        value: String,
    },

    /// Format a date and time as "Jan 5, 2024, 02:30 PM"
    Datetime {
        /// Date-time, e.g. 2024-01-05T14:30:00 or 2024-01-05T06:30:00Z
        value: String,
    },

    /// Format the current time
    Now,
}

/// A formatted value together with what it was made from, for `--json` output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Rendered {
    pub input: String,
    pub output: String,
}

impl Rendered {
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn run(command: &Command, settings: &FormatSettings) -> Result<Rendered, CliError> {
    let formatter = MalaysianEnglish::with_offset(settings.offset()?);
    debug!(?command, "running command");

    match command {
        Command::Currency { amount, currency } => {
            let code = match currency {
                Some(c) => c.parse::<CurrencyCode>()?,
                None => settings.default_currency,
            };
            Ok(Rendered {
                input: format!("{} {}", amount, code),
                output: formatter.format_currency(*amount, &code)?,
            })
        }
        Command::Date { value } => Ok(Rendered {
            input: value.clone(),
            output: format_date_with(&formatter, value)?,
        }),
        Command::Datetime { value } => Ok(Rendered {
            input: value.clone(),
            output: format_date_time_with(&formatter, value)?,
        }),
        Command::Now => {
            let now: DateTime<Utc> = Utc::now();
            Ok(Rendered {
                input: now.to_rfc3339(),
                output: format_date_time_with(&formatter, now)?,
            })
        }
    }
}
