// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

mod app;
mod config;
mod error;
mod logging;
mod logic;
mod models;
mod mvu;
mod store;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::config::{AppConfig, Cli};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    logging::init(&config.data_dir, &config.log_filter)?;
    app::run(config)
}
