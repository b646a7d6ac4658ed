//! CartoLayer CLI - Command-line interface
//!
//! This binary exercises the CartoLayer map core against GeoJSON
//! datasets: inspect layers, print the shipped legend and basemaps,
//! compute viewport telemetry, and export attribute tables.

mod commands;
mod error;
mod geojson;

use clap::{Parser, Subcommand};
use tracing::debug;

use cartolayer::logging::{default_log_dir, default_log_file, init_logging};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "cartolayer")]
#[command(version = cartolayer::VERSION)]
#[command(about = "Layer registry and viewport tooling for GeoJSON map datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect GeoJSON datasets and register them as layers
    Inspect(commands::inspect::InspectArgs),
    /// Print the shipped layer palette as the panel legend
    Legend,
    /// List basemap sources, optionally switching the active one
    Basemaps(commands::basemaps::BasemapsArgs),
    /// Compute the scale bar and permalink for a viewport
    Scale(commands::scale::ScaleArgs),
    /// Export a dataset's attribute table as CSV
    Export(commands::export::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    let _logging_guard = match init_logging(default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };
    debug!(version = cartolayer::VERSION, "CLI started");

    let result = match cli.command {
        Command::Inspect(args) => commands::inspect::run(args),
        Command::Legend => commands::legend::run(),
        Command::Basemaps(args) => commands::basemaps::run(args),
        Command::Scale(args) => commands::scale::run(args),
        Command::Export(args) => commands::export::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
