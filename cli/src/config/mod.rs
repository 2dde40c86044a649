// CLI configuration module
pub mod settings;

pub use settings::FormatSettings;
