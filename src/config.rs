// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Command line and runtime configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

const APP_DIR_NAME: &str = "healthhelper";
pub const DEFAULT_LOG_FILTER: &str = "info,healthhelper=debug";

/// Track what you eat and what it costs.
#[derive(Parser, Debug)]
#[command(name = "healthhelper", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the food dictionary, logs, and the diagnostics log
    #[arg(long, env = "HEALTHHELPER_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log date to open on startup (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// tracing filter directive for diagnostics output
    #[arg(long, env = "HEALTHHELPER_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

/// Settings the application runs with after defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub start_date: NaiveDate,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let data_dir = match cli.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        Ok(Self {
            data_dir,
            start_date: cli.date.unwrap_or_else(|| Local::now().date_naive()),
            log_filter: cli.log_filter,
        })
    }
}

/// `<platform data dir>/healthhelper`, e.g. `~/.local/share/healthhelper` on Linux.
fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Could not determine a data directory; pass --data-dir")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_win() {
        let cli = Cli::try_parse_from([
            "healthhelper",
            "--data-dir",
            "/tmp/hh",
            "--date",
            "2020-04-12",
            "--log-filter",
            "warn",
        ])
        .unwrap();

        let config = AppConfig::from_cli(cli).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/hh"));
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2020, 4, 12).unwrap()
        );
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(Cli::try_parse_from(["healthhelper", "--date", "04/12/2020"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
