use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file; `setup` writes here when given
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => fxconv::AppCommand::Convert {
                amount,
                from,
                to,
                json,
            },
            Commands::Rates => fxconv::AppCommand::Rates,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount into another currency
    Convert {
        /// Amount to convert, e.g. 100 or 12.50
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Currency the amount is expressed in, e.g. USD
        from: String,
        /// Target currency; defaults to the configured currency
        #[arg(short, long)]
        to: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the effective exchange rate table
    Rates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup_with(cli.config_path.as_deref()),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
