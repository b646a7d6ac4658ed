//! Feature data model
//!
//! Immutable feature records as supplied by the dataset collaborator:
//! one geometry (point, line, or polygon family) plus a scalar attribute
//! map. The rest of the library only ever reads these.

mod types;

pub use types::{AttrValue, FeatureRecord, Geometry, GeometryKind, Position};
