//! Error types for the clustering adapter.

use thiserror::Error;

use crate::feature::GeometryKind;
use crate::registry::LayerId;

/// Errors that can occur when attaching a layer to a cluster group.
///
/// Both variants are rejected at the call site with no membership
/// mutation; the caller's registry state is likewise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The layer holds geometry the adapter cannot cluster
    #[error("layer '{layer}' has {kind} geometry; only point layers can be clustered")]
    InvalidGeometry {
        /// Name of the offending layer
        layer: String,
        /// The non-point kind encountered
        kind: GeometryKind,
    },

    /// The layer id is not (or no longer) registered
    #[error("cannot cluster unregistered {0}")]
    LayerNotRegistered(LayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_display() {
        let err = ClusterError::InvalidGeometry {
            layer: "Routes".to_string(),
            kind: GeometryKind::Line,
        };
        assert_eq!(
            err.to_string(),
            "layer 'Routes' has line geometry; only point layers can be clustered"
        );
    }
}
