//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// `nirocheck` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nirocheck",
    about = "Route-assistance inventory check-in/check-out with spreadsheet sync",
    version
)]
pub struct Args {
    /// Config file. Defaults to `<config_dir>/nirocheck/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Sheet web app URL. Overrides env and config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Directory for the ledger documents.
    #[arg(long = "state-dir", value_name = "DIR")]
    pub state_dir: Option<PathBuf>,
    /// Log file. Defaults to `<state_dir>/nirocheck.log`.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint_url: self.endpoint.clone(),
            state_dir: self.state_dir.clone(),
        }
    }
}
