// Currency and date formatting for the donor CRM dashboard; every function is pure

pub mod error;
pub mod iso4217;
pub mod locale;
pub mod models;
pub mod number;
pub mod utils;

pub use error::{FormatError, FormatResult};
pub use locale::{CurrencyFormatter, DateFormatter, MalaysianEnglish};
pub use models::{CurrencyCode, DateInput, DEFAULT_CURRENCY};
pub use utils::{format_currency, format_date, format_date_time, format_ringgit};
