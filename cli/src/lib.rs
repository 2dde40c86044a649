// crm-fmt library root: settings, errors and subcommands behind the binary

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;

use clap::Parser;

use commands::Command;

#[derive(Parser, Debug)]
#[command(name = "crm-fmt")]
#[command(about = "Format amounts and dates the way the donor dashboard shows them", long_about = None)]
pub struct Args {
    /// JSON settings file; the built-in defaults are used when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print {"input": ..., "output": ...} instead of the bare string
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}
