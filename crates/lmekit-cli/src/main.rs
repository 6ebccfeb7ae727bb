mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::PartialSettings;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 lmekit v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = PartialSettings::load(cli.toolkit_config.as_deref())?.merge_with_cli(&cli)?;
    debug!("Toolkit settings: {:?}", settings);

    let result = match cli.command {
        Commands::Resolve(args) => {
            info!("Dispatching to 'resolve' command.");
            commands::resolve::run(args)
        }
        Commands::Mapping(args) => {
            info!("Dispatching to 'mapping' command.");
            commands::mapping::run(args)
        }
        Commands::CheckDistance(args) => {
            info!("Dispatching to 'check-distance' command.");
            commands::check_distance::run(args, &settings)
        }
        Commands::Minimize(args) => {
            info!("Dispatching to 'minimize' command.");
            commands::minimize::run(args, &settings, cli.quiet)
        }
        Commands::Charges(args) => {
            info!("Dispatching to 'charges' command.");
            commands::charges::run(args, &settings)
        }
        Commands::Substitute(args) => {
            info!("Dispatching to 'substitute' command.");
            commands::substitute::run(args)
        }
        Commands::Neighbors(args) => {
            info!("Dispatching to 'neighbors' command.");
            commands::neighbors::run(args)
        }
    };

    match &result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    result
}
