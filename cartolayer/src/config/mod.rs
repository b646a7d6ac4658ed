//! Viewer configuration.
//!
//! Settings structs plus the shipped defaults (basemap set, thematic
//! layer palette, road color table).

pub mod defaults;
mod settings;

pub use defaults::{default_basemaps, default_layers, road_color_table, road_fallback_color};
pub use settings::{AppConfig, LayerPalette, MapSettings};
