// crm-fmt entry point
use anyhow::{Context, Result};
use clap::Parser;
use crm_cli::commands;
use crm_cli::config::FormatSettings;
use crm_cli::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the formatted value is the only thing on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let settings = FormatSettings::load(args.config.as_deref()).context("Failed to load settings")?;
    info!(
        currency = %settings.default_currency,
        offset = %settings.display_offset,
        "settings ready"
    );

    let rendered = commands::run(&args.command, &settings)
        .with_context(|| format!("Failed to format {:?}", args.command))?;

    if args.json {
        println!("{}", rendered.to_json()?);
    } else {
        println!("{}", rendered.output);
    }

    Ok(())
}
