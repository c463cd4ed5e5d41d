//! `zero`: erase the device data log, after confirmation.

use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use glucometer_core::Meter;

pub fn cmd_zero(meter: &mut dyn Meter) -> Result<ExitCode> {
    let confirmed = Confirm::new()
        .with_prompt("Delete the device data log?")
        .default(false)
        .interact()
        .context("failed to read confirmation")?;

    if !confirmed {
        println!("\nDevice data log not zeroed.");
        return Ok(ExitCode::FAILURE);
    }

    meter
        .zero_log()
        .context("error while executing 'zero'")?;
    println!("\nDevice data log zeroed.");
    Ok(ExitCode::SUCCESS)
}
