//! Feature data type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A geographic position as a longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitude (east-west), -180.0 to 180.0
    pub lon: f64,
    /// Latitude (north-south), -90.0 to 90.0
    pub lat: f64,
}

impl Position {
    /// Creates a position from longitude and latitude.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if the position lies in the valid lat/lon ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Broad geometry classification used by styling and clustering policy.
///
/// The highlight policy branches on this (lines highlight by stroke,
/// everything else by fill), and the clustering adapter only accepts
/// `Point` geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Point or MultiPoint
    Point,
    /// LineString or MultiLineString
    Line,
    /// Polygon or MultiPolygon
    Polygon,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "point"),
            GeometryKind::Line => write!(f, "line"),
            GeometryKind::Polygon => write!(f, "polygon"),
        }
    }
}

/// Immutable feature geometry.
///
/// Coordinates follow the GeoJSON convention: positions are lon/lat,
/// polygon rings are closed, the first ring is the exterior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single position.
    Point(Position),
    /// A set of positions.
    MultiPoint(Vec<Position>),
    /// An open path of positions.
    LineString(Vec<Position>),
    /// Several open paths.
    MultiLineString(Vec<Vec<Position>>),
    /// Rings of positions; first ring is the exterior.
    Polygon(Vec<Vec<Position>>),
    /// Several polygons.
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Returns the broad kind of this geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => GeometryKind::Point,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => GeometryKind::Line,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => GeometryKind::Polygon,
        }
    }

    /// Returns true for Point and MultiPoint geometry.
    #[inline]
    pub fn is_point_kind(&self) -> bool {
        self.kind() == GeometryKind::Point
    }

    /// Returns true for LineString and MultiLineString geometry.
    #[inline]
    pub fn is_line_kind(&self) -> bool {
        self.kind() == GeometryKind::Line
    }

    /// Returns the positions of a point-kind geometry.
    ///
    /// Returns an empty vector for line and polygon kinds; callers that
    /// need those vertices should walk the variant directly.
    pub fn point_positions(&self) -> Vec<Position> {
        match self {
            Geometry::Point(p) => vec![*p],
            Geometry::MultiPoint(ps) => ps.clone(),
            _ => Vec::new(),
        }
    }
}

/// A scalar attribute value attached to a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Free-form text.
    Text(String),
    /// Numeric value (integers and floats share this variant).
    Number(f64),
    /// Explicitly absent value.
    Null,
}

impl AttrValue {
    /// Returns true if the value carries displayable data.
    ///
    /// Null values and text that is empty after trimming are absent;
    /// popup rows for absent values are omitted entirely.
    pub fn is_present(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.trim().is_empty(),
            AttrValue::Number(_) => true,
            AttrValue::Null => false,
        }
    }

    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Formats the value for display.
    ///
    /// Whole numbers print without a trailing `.0` so attribute codes
    /// read naturally in popups and CSV exports.
    pub fn display(&self) -> String {
        match self {
            AttrValue::Text(s) => s.trim().to_string(),
            AttrValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            AttrValue::Null => String::new(),
        }
    }
}

/// One geometry plus its attribute set, as supplied by the dataset
/// collaborator.
///
/// The core never mutates geometry or attributes; there are read
/// accessors only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    geometry: Geometry,
    attributes: BTreeMap<String, AttrValue>,
}

impl FeatureRecord {
    /// Creates a feature from a geometry and attribute pairs.
    pub fn new(
        geometry: Geometry,
        attributes: impl IntoIterator<Item = (String, AttrValue)>,
    ) -> Self {
        Self {
            geometry,
            attributes: attributes.into_iter().collect(),
        }
    }

    /// The feature's geometry.
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Looks up one attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Iterates over all attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes on this feature.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
