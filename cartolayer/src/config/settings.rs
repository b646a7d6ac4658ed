//! Settings structs for the viewer configuration.
//!
//! Pure data types with no parsing logic; defaults live in
//! [`defaults`](super::defaults).

use serde::{Deserialize, Serialize};

use crate::basemap::BasemapSource;
use crate::style::Rgba;
use crate::viewport::ViewportBounds;

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Map viewport settings
    pub map: MapSettings,
    /// Available basemap sources, first entry active at startup
    pub basemaps: Vec<BasemapSource>,
    /// Thematic layer palette
    pub layers: Vec<LayerPalette>,
}

/// Map viewport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Initial view bounds
    pub bounds: ViewportBounds,
    /// Minimum zoom level
    pub min_zoom: u8,
    /// Maximum zoom level
    pub max_zoom: u8,
    /// Zoom used when no permalink restores a view
    pub default_zoom: u8,
    /// Decimal places in the cursor coordinate readout
    pub coordinate_precision: usize,
}

/// Color and ordering configuration for one thematic layer.
///
/// This is presentation configuration; the layer's feature collection
/// arrives separately from the dataset collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPalette {
    /// Stable identifier
    pub id: String,
    /// Display name, unique across the palette
    pub name: String,
    /// Draw order
    pub z_order: i32,
    /// Stroke color, if uniformly stroked
    pub stroke: Option<Rgba>,
    /// Fill color, if filled
    pub fill: Option<Rgba>,
    /// Initial visibility
    pub visible: bool,
}
