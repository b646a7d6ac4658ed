//! Scale bar and permalink command.

use clap::Args;

use cartolayer::config::MapSettings;
use cartolayer::viewport::permalink;
use cartolayer::viewport::{compute_scale, format_cursor, ViewportBounds};

use crate::error::CliError;

/// Arguments for the scale command.
#[derive(Debug, Args)]
pub struct ScaleArgs {
    /// Southern latitude edge of the viewport
    #[arg(long, allow_hyphen_values = true)]
    pub south: f64,

    /// Western longitude edge of the viewport
    #[arg(long, allow_hyphen_values = true)]
    pub west: f64,

    /// Northern latitude edge of the viewport
    #[arg(long, allow_hyphen_values = true)]
    pub north: f64,

    /// Eastern longitude edge of the viewport
    #[arg(long, allow_hyphen_values = true)]
    pub east: f64,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Zoom level for the permalink
    #[arg(long)]
    pub zoom: Option<u8>,
}

/// Compute the scale bar, center readout, and permalink for a viewport.
pub fn run(args: ScaleArgs) -> Result<(), CliError> {
    let settings = MapSettings::default();
    let bounds = ViewportBounds::new(args.south, args.west, args.north, args.east);
    let center = bounds.center();

    let scale = compute_scale(&bounds, args.width, args.height);
    let readout = format_cursor(&center, settings.coordinate_precision);
    let zoom = args.zoom.unwrap_or(settings.default_zoom);

    println!("Scale bar: {} ({:.1} m over 100 px)", scale.label, scale.meters);
    println!("Center:    {}, {}", readout.lat, readout.lon);
    println!("Permalink: {}", permalink::encode(zoom, center.lat, center.lon));
    Ok(())
}
