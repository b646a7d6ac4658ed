//! View permalink hash.
//!
//! Encodes the current view as a `#map=zoom/lat/lng` URL fragment so a
//! view can be shared and restored, with lat/lng at five decimals.

/// A decoded view hash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewHash {
    /// Zoom level
    pub zoom: u8,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// Encodes a view as a URL fragment.
pub fn encode(zoom: u8, lat: f64, lon: f64) -> String {
    format!("#map={}/{:.5}/{:.5}", zoom, lat, lon)
}

/// Decodes a `#map=zoom/lat/lng` fragment.
///
/// The leading `#` is optional. Returns `None` for anything that does
/// not parse as exactly three numeric components.
pub fn decode(hash: &str) -> Option<ViewHash> {
    let body = hash.strip_prefix('#').unwrap_or(hash);
    let body = body.strip_prefix("map=")?;

    let mut parts = body.split('/');
    let zoom = parts.next()?.parse::<u8>().ok()?;
    let lat = parts.next()?.parse::<f64>().ok()?;
    let lon = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(ViewHash { zoom, lat, lon })
}
