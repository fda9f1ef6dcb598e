//! Command implementations for the MAWS converter CLI
//!
//! Contains the command execution logic, logging setup, and console
//! reporting for the CLI interface.

use crate::cli::args::{Args, Commands, ConvertArgs, SchemaArgs};
use crate::config::Config;
use crate::constants::TIME_UNITS;
use crate::error::Result;
use crate::models::ConversionStats;
use crate::processor::Converter;
use crate::schema::{DATA_FIELDS, NumericPolicy, Storage};

use colored::*;
use tracing::{Level, info};

/// Main command runner for the MAWS converter
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<ConversionStats> {
    match args.get_command() {
        Commands::Convert(convert_args) => run_convert(convert_args),
        Commands::Schema(schema_args) => run_schema(schema_args),
    }
}

/// Convert command: load configuration, apply overrides, run the batch
fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    setup_logging(args.get_log_level());
    args.validate()?;

    info!("Loading configuration from {}", args.config_file.display());
    let mut config = Config::load(&args.config_file)?;

    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir.clone());
    }
    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }
    if let Some(convention) = args.convention {
        config = config.with_convention(convention);
    }
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    if args.fail_fast {
        config = config.with_fail_fast(true);
    }

    let converter = Converter::new(config)?;

    if !args.quiet {
        println!(
            "{}",
            "Starting MAWS telemetry conversion".bright_green().bold()
        );
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            converter.config().output_dir()?.display()
        );
    }

    let stats = converter.run()?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

fn print_summary(stats: &ConversionStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.elapsed_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files converted:".bright_cyan(),
        stats.files_converted.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        stats.total_rows.to_string().bright_white().bold()
    );
}

/// Schema command: print the 11-field observation catalog
fn run_schema(args: SchemaArgs) -> Result<ConversionStats> {
    println!(
        "{}",
        "MAWS observation schema (positional column order)"
            .bright_green()
            .bold()
    );
    println!(
        "  {:<40} {:<10} {:<18} standard name",
        "variable", "storage", "units"
    );
    println!("  {:<40} {:<10} {:<18} -", "timestamp (time coordinate)", "i64", TIME_UNITS);

    for field in &DATA_FIELDS {
        let storage = match field.storage(NumericPolicy::MixedInteger) {
            Storage::Int32 => "f64 | i32",
            Storage::Float64 => "f64",
        };
        println!(
            "  {:<40} {:<10} {:<18} {}",
            field.name,
            storage,
            field.unit(args.convention),
            field.standard_name
        );
    }

    Ok(ConversionStats::default())
}

fn setup_logging(level: &str) {
    let max_level = match level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Ignore a second init when running under the test harness
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init();
}
