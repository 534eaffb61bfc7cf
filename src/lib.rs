//! plog library root.
//! Exposes the CLI parser, the high-level run() function, and the timer,
//! store and sink modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sink;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Start => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop => cli::commands::stop::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Push { .. } => cli::commands::push::handle(&cli.command, cfg),
        Commands::Reset => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Token { .. } => cli::commands::token::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once: file, then environment
    let mut cfg = Config::load()?;

    // command line override of the staging file
    if let Some(staging) = &cli.staging {
        cfg.staging_file = staging.clone();
    }

    dispatch(&cli, &cfg)
}
