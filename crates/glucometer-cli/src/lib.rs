//! Command-line utility to manage data from home glucometer devices.
//!
//! The binary wires the [`cli`] argument definitions to the driver layer in
//! `glucometer-core` and runs one command per invocation: `help`, `info`,
//! `dump`, `datetime` or `zero`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod util;

use std::process::ExitCode;

use anyhow::Result;

pub use cli::Cli;
pub use config::Config;

/// Run the parsed command line to completion.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::from_cli(cli);
    commands::run(&config, &cli.command)
}
