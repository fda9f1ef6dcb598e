//! Command-line argument definitions for the MAWS converter
//!
//! Defines the CLI interface using the clap derive API. The convert command
//! mirrors the YAML configuration and lets deployment knobs be overridden
//! per invocation.

use crate::error::{ConvertError, Result};
use crate::schema::{MetadataProfile, NumericPolicy, UnitConvention};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the MAWS telemetry converter
///
/// Converts marine automatic weather station telemetry from headerless CSV
/// into self-describing NetCDF datasets.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "maws-converter",
    version,
    about = "Convert marine weather-station telemetry from CSV to annotated NetCDF",
    long_about = "Converts fixed-schema marine automatic weather station telemetry \
                  (timestamp, position, wind, temperature, humidity, pressure) into \
                  self-describing NetCDF datasets with controlled-vocabulary metadata: \
                  physical units, CF standard names, coverage extents, and provenance."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the MAWS converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert configured telemetry files to NetCDF (main command)
    Convert(ConvertArgs),
    /// Print the observation schema catalog
    Schema(SchemaArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Path to the YAML run configuration
    ///
    /// Must define input_path (source files or glob patterns) and
    /// output_path (destination directory); may define global_attributes
    /// and the annotation knobs overridden by the flags below.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        default_value = "config.yaml",
        help = "Path to YAML configuration file"
    )]
    pub config_file: PathBuf,

    /// Output directory override
    ///
    /// Replaces the configured output_path. Created if it does not exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for NetCDF artifacts"
    )]
    pub output_dir: Option<PathBuf>,

    /// Metadata profile override
    #[arg(
        long = "profile",
        value_enum,
        value_name = "PROFILE",
        help = "Metadata richness: units or cf"
    )]
    pub profile: Option<MetadataProfile>,

    /// Unit convention override
    #[arg(
        long = "convention",
        value_enum,
        value_name = "CONVENTION",
        help = "Unit-string convention: plain or cf"
    )]
    pub convention: Option<UnitConvention>,

    /// Numeric storage policy override
    #[arg(
        long = "policy",
        value_enum,
        value_name = "POLICY",
        help = "Numeric storage policy: all-float or mixed-integer"
    )]
    pub policy: Option<NumericPolicy>,

    /// Abort the batch on the first failed file
    ///
    /// By default a failed file is logged and the batch continues with the
    /// next input; the exit code reports the failure either way.
    #[arg(long = "fail-fast", help = "Abort the batch on the first failed file")]
    pub fail_fast: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the schema command
#[derive(Debug, Clone, Parser)]
pub struct SchemaArgs {
    /// Unit convention to display
    #[arg(
        long = "convention",
        value_enum,
        value_name = "CONVENTION",
        default_value = "plain",
        help = "Unit-string convention to display"
    )]
    pub convention: UnitConvention,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.config_file.exists() {
            return Err(ConvertError::configuration(format!(
                "Config file does not exist: {}",
                self.config_file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
