//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`basemaps`] - Basemap listing and switching
//! - [`export`] - CSV export of a GeoJSON dataset
//! - [`inspect`] - Dataset inspection and layer registration dry-run
//! - [`legend`] - Shipped layer palette as the panel would show it
//! - [`scale`] - Scale bar and permalink for a viewport

pub mod basemaps;
pub mod export;
pub mod inspect;
pub mod legend;
pub mod scale;
