// NOTE: Command Organization Rationale
//
// Why `render` takes a request target (not just a dataset id)?
// - Reveal state lives in the query string, so the page model depends on it
// - Passing the raw target keeps the CLI a faithful stand-in for the HTTP handler

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "datapage")]
#[command(about = "Build display-ready dataset page models", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
