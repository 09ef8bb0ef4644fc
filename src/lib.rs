pub mod cli;
pub mod core;

use crate::core::CurrencyCode;
use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Commands that run against a loaded configuration.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: Option<String>,
        json: bool,
    },
    Rates,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    // Built once; never changes for the rest of the run
    let rates = config.rate_table();

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            json,
        } => {
            let target = match to {
                Some(code) => code
                    .parse::<CurrencyCode>()
                    .context("Invalid target currency")?,
                None => config.currency.clone(),
            };
            cli::convert::run(&rates, &amount, &from, &target, json)
        }
        AppCommand::Rates => cli::rates::run(&rates),
    }
}
