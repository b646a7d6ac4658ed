//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and appropriate exit codes.

use std::fmt;
use std::process;

use cartolayer::basemap::BasemapError;
use cartolayer::export::ExportError;
use cartolayer::registry::RegistryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Failed to write an output file
    FileWrite { path: String, error: std::io::Error },
    /// Input file is not a usable GeoJSON feature collection
    GeoJson { path: String, message: String },
    /// Layer registration rejected
    Registry(RegistryError),
    /// Basemap selection rejected
    Basemap(BasemapError),
    /// CSV export rejected
    Export(ExportError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::GeoJson { .. } = self {
            eprintln!();
            eprintln!("Expected a GeoJSON FeatureCollection:");
            eprintln!("  {{ \"type\": \"FeatureCollection\", \"features\": [...] }}");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read '{}': {}", path, error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write '{}': {}", path, error)
            }
            CliError::GeoJson { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            CliError::Registry(e) => write!(f, "Failed to register layer: {}", e),
            CliError::Basemap(e) => write!(f, "Basemap selection failed: {}", e),
            CliError::Export(e) => write!(f, "Export failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::FileRead { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            CliError::Registry(e) => Some(e),
            CliError::Basemap(e) => Some(e),
            CliError::Export(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::Registry(e)
    }
}

impl From<BasemapError> for CliError {
    fn from(e: BasemapError) -> Self {
        CliError::Basemap(e)
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        CliError::Export(e)
    }
}
