//! Viewport telemetry.
//!
//! Derives the human-readable scale bar and the live cursor readout from
//! the current viewport. Everything here is recomputed per viewport
//! change event (pan or zoom), never on a timer.

pub mod permalink;

use serde::{Deserialize, Serialize};

use crate::feature::Position;

/// Approximate meters per degree of latitude.
///
/// Also used for longitude after a cos(latitude) correction. This is a
/// spherical approximation with no ellipsoidal correction; good enough
/// for an on-screen scale bar, not for surveying.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Reference on-screen length of the scale bar, in pixels.
pub const SCALE_BAR_PIXELS: f64 = 100.0;

/// Geographic extent of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Southern latitude edge
    pub south: f64,
    /// Western longitude edge
    pub west: f64,
    /// Northern latitude edge
    pub north: f64,
    /// Eastern longitude edge
    pub east: f64,
}

impl ViewportBounds {
    /// Creates bounds from edge coordinates.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// The center of the viewport.
    pub fn center(&self) -> Position {
        Position::new((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    /// Returns true if the position lies inside the bounds (inclusive).
    pub fn contains(&self, position: &Position) -> bool {
        position.lat >= self.south
            && position.lat <= self.north
            && position.lon >= self.west
            && position.lon <= self.east
    }
}

/// A resolved scale bar: representative ground distance and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleBar {
    /// Ground distance covered by [`SCALE_BAR_PIXELS`] on screen, in meters
    pub meters: f64,
    /// Display label: "x.y km" at or above 1000 m, "n m" below
    pub label: String,
}

/// Computes the scale bar for a viewport drawn at the given pixel size.
///
/// Meters-per-pixel is approximated by averaging the latitude-degree
/// conversion with a cos(mean latitude) corrected longitude-degree
/// conversion, then multiplied by the fixed 100 px reference length.
pub fn compute_scale(bounds: &ViewportBounds, px_width: u32, px_height: u32) -> ScaleBar {
    let lat_span = bounds.north - bounds.south;
    let lon_span = bounds.east - bounds.west;
    let mean_lat = (bounds.north + bounds.south) / 2.0;

    let meters_per_px_lat = lat_span * METERS_PER_DEGREE / f64::from(px_height);
    let meters_per_px_lon =
        lon_span * METERS_PER_DEGREE * mean_lat.to_radians().cos() / f64::from(px_width);

    let meters_per_px = (meters_per_px_lat + meters_per_px_lon) / 2.0;
    let meters = SCALE_BAR_PIXELS * meters_per_px;

    ScaleBar {
        meters,
        label: format_distance(meters),
    }
}

/// Formats a ground distance the way the scale bar displays it.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round() as i64)
    }
}

/// Formatted cursor coordinates for the readout panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorReadout {
    /// Latitude at fixed precision
    pub lat: String,
    /// Longitude at fixed precision
    pub lon: String,
}

/// Formats the cursor position at the given decimal precision.
pub fn format_cursor(position: &Position, precision: usize) -> CursorReadout {
    CursorReadout {
        lat: format!("{:.*}", precision, position.lat),
        lon: format!("{:.*}", precision, position.lon),
    }
}
