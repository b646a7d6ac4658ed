//! CSV export command.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use cartolayer::export::to_csv;

use crate::commands::inspect::load_features;
use crate::error::CliError;

/// Arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// GeoJSON file to export
    pub file: PathBuf,

    /// Output CSV path; prints to stdout when omitted
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Export a dataset's attribute table as CSV.
pub fn run(args: ExportArgs) -> Result<(), CliError> {
    let features = load_features(&args.file)?;
    let csv = to_csv(&features)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &csv).map_err(|error| CliError::FileWrite {
                path: path.display().to_string(),
                error,
            })?;
            info!(path = %path.display(), rows = features.len(), "CSV written");
            println!("Wrote {} rows to {}", features.len(), path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}
