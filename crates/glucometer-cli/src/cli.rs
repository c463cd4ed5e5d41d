//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use glucometer_types::Unit;

/// Reading field the dump can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    #[default]
    Timestamp,
    Value,
    Comment,
    MeasureMethod,
}

/// Arguments of the `dump` subcommand.
#[derive(Debug, Clone, Args)]
pub struct DumpArgs {
    /// Unit to use for the dumped data; defaults to the meter's native unit
    #[arg(long, value_name = "mg/dL|mmol/L")]
    pub unit: Option<Unit>,

    /// Field to order the dumped data by
    #[arg(long, value_enum, default_value = "timestamp")]
    pub sort_by: SortField,

    /// Enable ketone readings if available on the glucometer
    #[arg(long)]
    pub with_ketone: bool,

    /// Output results to a file yyyymmddhhmmss.csv instead of stdout
    #[arg(long)]
    pub to_file: bool,

    /// Control the location of the file output
    #[arg(long, default_value = ".")]
    pub output_folder: PathBuf,
}

#[derive(Parser)]
#[command(name = "glucometer")]
#[command(author, version, about = "Utility to manage glucometers' data", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Driver to use for connecting to the glucometer
    #[arg(long)]
    pub driver: String,

    /// Path to the glucometer device. Some drivers require this argument,
    /// others will try autodetection
    #[arg(long)]
    pub device: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display a description of the driver, including supported features
    /// and known quirks
    Help,

    /// Display information about the meter
    Info,

    /// Zero out the data log of the meter
    Zero,

    /// Dump the readings stored in the device
    Dump(DumpArgs),

    /// Read or set the date and time of the glucometer
    Datetime {
        /// Set the date rather than just reading it from the device;
        /// without a value, the current time is used
        #[arg(long, value_name = "DATETIME", num_args = 0..=1, default_missing_value = "now")]
        set: Option<String>,
    },
}
