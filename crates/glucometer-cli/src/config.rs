//! Process configuration.

use crate::cli::Cli;

/// Configuration assembled from the global command-line flags.
///
/// Carried explicitly into the command layer rather than read back from
/// global state, so commands can be driven from tests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Driver name resolved through the registry.
    pub driver: String,
    /// Device path handed to the driver, when it needs one.
    pub device: Option<String>,
    /// Whether verbose logging was requested.
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            driver: cli.driver.clone(),
            device: cli.device.clone(),
            verbose: cli.verbose,
        }
    }
}
