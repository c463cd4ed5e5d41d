//! Command implementations.

mod datetime;
mod dump;
mod info;
mod zero;

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use glucometer_core::drivers;

use crate::cli::Command;
use crate::config::Config;

/// Resolve the driver, run the requested command against it, and translate
/// the outcome into an exit code.
pub fn run(config: &Config, command: &Command) -> Result<ExitCode> {
    let mut meter = drivers::open(&config.driver, config.device.as_deref())
        .with_context(|| format!("error loading driver '{}'", config.driver))?;

    // `help` describes the driver without touching the device.
    if matches!(command, Command::Help) {
        println!("{}", meter.description());
        return Ok(ExitCode::SUCCESS);
    }

    meter
        .connect()
        .context("error while connecting to the meter")?;
    let info = meter
        .meter_info()
        .context("error while reading the meter information")?;
    debug!(model = %info.model, "connected to meter");

    let exit = match command {
        // handled above, before connecting
        Command::Help => ExitCode::SUCCESS,
        Command::Info => {
            info::cmd_info(meter.as_mut(), &info).context("error while executing 'info'")?;
            ExitCode::SUCCESS
        }
        Command::Dump(args) => {
            dump::cmd_dump(meter.as_mut(), &info, args).context("error while executing 'dump'")?;
            ExitCode::SUCCESS
        }
        Command::Datetime { set } => {
            datetime::cmd_datetime(meter.as_mut(), set.as_deref())
                .context("error while executing 'datetime'")?;
            ExitCode::SUCCESS
        }
        Command::Zero => zero::cmd_zero(meter.as_mut())?,
    };

    meter
        .disconnect()
        .context("error while disconnecting from the meter")?;

    Ok(exit)
}
