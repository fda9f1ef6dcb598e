use clap::Parser;
use maws_converter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(stats) => {
            // A partial batch (continue-on-error policy) still exits non-zero
            if stats.files_failed > 0 {
                process::exit(1);
            }
            process::exit(0);
        }
        Err(error) => {
            // anyhow's alternate format prints the whole source chain
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MAWS Converter - Marine Weather Telemetry to NetCDF");
    println!("===================================================");
    println!();
    println!("Convert marine automatic weather station telemetry from headerless");
    println!("CSV into self-describing NetCDF datasets with CF metadata.");
    println!();
    println!("USAGE:");
    println!("    maws-converter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert configured telemetry files to NetCDF (main command)");
    println!("    schema      Print the observation schema catalog");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert the files listed in ./config.yaml:");
    println!("    maws-converter convert");
    println!();
    println!("    # Convert with a specific configuration and full CF metadata:");
    println!("    maws-converter convert --config deploy.yaml --profile cf");
    println!();
    println!("    # Show the field catalog with CF unit spellings:");
    println!("    maws-converter schema --convention cf");
    println!();
    println!("For detailed help on any command, use:");
    println!("    maws-converter <COMMAND> --help");
}
