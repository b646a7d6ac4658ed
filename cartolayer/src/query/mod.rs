//! Attribute and spatial queries over feature collections.
//!
//! Read-only helpers behind the attribute-query and spatial-query panels:
//! filtering by attribute value or bounding box, great-circle distance,
//! and per-collection statistics.

use std::collections::BTreeMap;

use crate::feature::{FeatureRecord, Geometry, GeometryKind, Position};
use crate::viewport::ViewportBounds;

/// Mean Earth radius in kilometers, for the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Filters features whose attribute equals a value, case-insensitively.
///
/// Numbers compare through their display form, so `"21"` matches an
/// attribute holding the number 21.
pub fn filter_by_attribute<'a>(
    features: &'a [FeatureRecord],
    key: &str,
    value: &str,
) -> Vec<&'a FeatureRecord> {
    let wanted = value.to_lowercase();
    features
        .iter()
        .filter(|f| {
            f.attribute(key)
                .map(|v| v.display().to_lowercase() == wanted)
                .unwrap_or(false)
        })
        .collect()
}

/// Filters features against a bounding box.
///
/// Point features are tested against the bounds; features of other
/// geometry kinds pass through unfiltered.
pub fn filter_by_bounds<'a>(
    features: &'a [FeatureRecord],
    bounds: &ViewportBounds,
) -> Vec<&'a FeatureRecord> {
    features
        .iter()
        .filter(|f| match f.geometry() {
            Geometry::Point(p) => bounds.contains(p),
            _ => true,
        })
        .collect()
}

/// Great-circle distance between two positions in kilometers.
///
/// Haversine formula on a spherical Earth.
pub fn haversine_km(a: Position, b: Position) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Summary statistics for one feature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    /// Total feature count
    pub count: usize,
    /// Features per geometry kind
    pub kinds: BTreeMap<GeometryKind, usize>,
    /// Bounding box of the point features, if any
    pub point_bounds: Option<ViewportBounds>,
}

/// Computes statistics over a feature collection.
pub fn collection_stats(features: &[FeatureRecord]) -> CollectionStats {
    let mut kinds = BTreeMap::new();
    let mut bounds: Option<ViewportBounds> = None;

    for feature in features {
        *kinds.entry(feature.geometry().kind()).or_insert(0) += 1;

        for position in feature.geometry().point_positions() {
            bounds = Some(match bounds {
                None => ViewportBounds::new(position.lat, position.lon, position.lat, position.lon),
                Some(b) => ViewportBounds::new(
                    b.south.min(position.lat),
                    b.west.min(position.lon),
                    b.north.max(position.lat),
                    b.east.max(position.lon),
                ),
            });
        }
    }

    CollectionStats {
        count: features.len(),
        kinds,
        point_bounds: bounds,
    }
}
