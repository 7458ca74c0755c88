//! Command-line flags. Each flag falls back to its environment variable.

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "fxapi", about = "Synthetic test-data HTTP service", disable_version_flag = true)]
pub struct Args {
    /// The port to listen on for HTTP requests.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Debug mode (true or false); only changes log verbosity.
    #[arg(long, env = "DEBUG", value_parser = BoolishValueParser::new())]
    pub debug: Option<bool>,

    /// Optional YAML config file.
    #[arg(long, env = "FXAPI_CONFIG")]
    pub config: Option<String>,

    /// Display version and exit.
    #[arg(long)]
    pub version: bool,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            port: self.port,
            debug: self.debug,
        }
    }
}

/// Line printed by `--version`.
pub fn version_line() -> String {
    format!("fxapi Version {}", env!("CARGO_PKG_VERSION"))
}
