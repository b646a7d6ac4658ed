//! Point clustering adapter.
//!
//! Groups a clustered layer's point features into a [`ClusterGroup`] for
//! render efficiency. Membership is set-like (re-attaching a layer adds
//! nothing) and zoom-independent; only the visual grouping produced by
//! [`ClusterGroup::aggregate`] depends on the current viewport.

mod error;

pub use error::ClusterError;

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::feature::Position;
use crate::registry::{LayerId, LayerRegistry};
use crate::viewport::ViewportBounds;

/// One point feature tracked by a cluster group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterMember {
    /// Owning layer
    pub layer: LayerId,
    /// Feature index within the layer
    pub feature: usize,
    /// Placement position (first position of the feature's geometry)
    pub position: Position,
}

/// A visual cluster produced by aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterBlob {
    /// Centroid of the member positions
    pub position: Position,
    /// Members drawn into this blob
    pub members: Vec<(LayerId, usize)>,
}

impl ClusterBlob {
    /// Number of features in the blob.
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Spatial aggregation container for point features.
///
/// Owns a set of members drawn from clustered layers. Aggregation is
/// recomputed per viewport change and never alters membership or the
/// underlying feature data.
#[derive(Debug, Default)]
pub struct ClusterGroup {
    members: Vec<ClusterMember>,
    seen: HashSet<(LayerId, usize)>,
}

impl ClusterGroup {
    /// Creates an empty cluster group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a layer's point features into the group.
    ///
    /// Every feature joins exactly once: re-attaching the same layer (or
    /// attaching after the layer grew) only adds features not already
    /// members. Fails without mutating the group when the layer is
    /// unknown or holds non-point geometry. Returns the number of newly
    /// added members.
    pub fn attach(
        &mut self,
        registry: &LayerRegistry,
        id: LayerId,
    ) -> Result<usize, ClusterError> {
        let Some(handle) = registry.get(id) else {
            return Err(ClusterError::LayerNotRegistered(id));
        };

        // Validate the whole collection before touching membership.
        for feature in &handle.definition().features {
            if !feature.geometry().is_point_kind() {
                return Err(ClusterError::InvalidGeometry {
                    layer: handle.name().to_string(),
                    kind: feature.geometry().kind(),
                });
            }
        }

        let mut added = 0;
        for (index, feature) in handle.definition().features.iter().enumerate() {
            if !self.seen.insert((id, index)) {
                continue;
            }
            let positions = feature.geometry().point_positions();
            if let Some(position) = positions.first() {
                self.members.push(ClusterMember {
                    layer: id,
                    feature: index,
                    position: *position,
                });
                added += 1;
            }
        }

        debug!(layer = %id, added, total = self.members.len(), "Cluster attach");
        Ok(added)
    }

    /// Number of member features.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members in attach order.
    pub fn members(&self) -> &[ClusterMember] {
        &self.members
    }

    /// Computes the visual grouping for the current viewport.
    ///
    /// Members inside the bounds are binned on a grid whose cell size
    /// shrinks with zoom; each occupied cell yields one blob at the
    /// centroid of its members. Pure with respect to membership: calling
    /// this at different zooms never changes who belongs to the group.
    pub fn aggregate(&self, bounds: &ViewportBounds, zoom: u8) -> Vec<ClusterBlob> {
        // Eight grid cells per slippy-map tile at this zoom.
        let cell = 360.0 / 2_f64.powi(i32::from(zoom)) / 8.0;

        let mut bins: BTreeMap<(i64, i64), Vec<&ClusterMember>> = BTreeMap::new();
        for member in &self.members {
            if !bounds.contains(&member.position) {
                continue;
            }
            let key = (
                (member.position.lat / cell).floor() as i64,
                (member.position.lon / cell).floor() as i64,
            );
            bins.entry(key).or_default().push(member);
        }

        bins.into_values()
            .map(|members| {
                let n = members.len() as f64;
                let lon = members.iter().map(|m| m.position.lon).sum::<f64>() / n;
                let lat = members.iter().map(|m| m.position.lat).sum::<f64>() / n;
                ClusterBlob {
                    position: Position::new(lon, lat),
                    members: members.iter().map(|m| (m.layer, m.feature)).collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{FeatureRecord, Geometry};
    use crate::registry::LayerDefinition;
    use crate::style::{Rgba, StyleRule};

    fn point_feature(lon: f64, lat: f64) -> FeatureRecord {
        FeatureRecord::new(Geometry::Point(Position::new(lon, lat)), vec![])
    }

    fn point_layer(name: &str, z_order: i32, positions: &[(f64, f64)]) -> LayerDefinition {
        LayerDefinition::new(
            name,
            positions
                .iter()
                .map(|(lon, lat)| point_feature(*lon, *lat))
                .collect(),
            StyleRule::uniform(Rgba::opaque(35, 35, 35), 1.0)
                .with_fill(Rgba::opaque(225, 89, 137)),
        )
        .with_z_order(z_order)
        .with_clustering()
    }

    fn wide_bounds() -> ViewportBounds {
        ViewportBounds::new(-90.0, -180.0, 90.0, 180.0)
    }

    #[test]
    fn test_attach_merges_all_points() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5), (-13.9, 14.8)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        let added = group.attach(&registry, id).unwrap();
        assert_eq!(added, 2);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_reattach_does_not_duplicate() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5), (-13.9, 14.8)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, id).unwrap();
        let added = group.attach(&registry, id).unwrap();

        assert_eq!(added, 0, "Re-attach must add nothing");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_attach_two_layers() {
        let mut registry = LayerRegistry::new();
        let a = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5)]))
            .unwrap();
        let b = registry
            .register(point_layer("Marchés", 406, &[(-13.5, 14.1)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, a).unwrap();
        group.attach(&registry, b).unwrap();
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_non_point_layer_rejected_without_mutation() {
        let mut registry = LayerRegistry::new();
        let def = LayerDefinition::new(
            "Routes",
            vec![FeatureRecord::new(
                Geometry::LineString(vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)]),
                vec![],
            )],
            StyleRule::uniform(Rgba::opaque(108, 200, 32), 1.0),
        )
        .with_z_order(403);
        let id = registry.register(def).unwrap();

        let mut group = ClusterGroup::new();
        let err = group.attach(&registry, id).unwrap_err();
        assert!(matches!(err, ClusterError::InvalidGeometry { .. }));
        assert!(group.is_empty(), "Failed attach must not mutate the group");
    }

    #[test]
    fn test_unregistered_layer_rejected() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5)]))
            .unwrap();
        registry.unregister(id);

        let mut group = ClusterGroup::new();
        let err = group.attach(&registry, id).unwrap_err();
        assert_eq!(err, ClusterError::LayerNotRegistered(id));
    }

    #[test]
    fn test_aggregate_groups_nearby_points_at_low_zoom() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer(
                "Localités",
                405,
                &[(-14.20, 14.50), (-14.21, 14.51), (10.0, 50.0)],
            ))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, id).unwrap();

        let blobs = group.aggregate(&wide_bounds(), 2);
        assert_eq!(blobs.len(), 2, "Two nearby points share a blob at low zoom");
        let big = blobs.iter().find(|b| b.count() == 2).unwrap();
        assert!((big.position.lon - (-14.205)).abs() < 1e-9);
        assert!((big.position.lat - 14.505).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_splits_at_high_zoom() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5), (-13.0, 15.2)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, id).unwrap();

        let blobs = group.aggregate(&wide_bounds(), 12);
        assert_eq!(blobs.len(), 2);
        assert!(blobs.iter().all(|b| b.count() == 1));
    }

    #[test]
    fn test_aggregate_ignores_members_outside_viewport() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5), (10.0, 50.0)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, id).unwrap();

        let senegal = ViewportBounds::new(12.0, -18.0, 17.0, -11.0);
        let blobs = group.aggregate(&senegal, 8);
        assert_eq!(blobs.len(), 1);
        assert_eq!(group.len(), 2, "Aggregation never changes membership");
    }

    #[test]
    fn test_aggregate_is_pure_across_zooms() {
        let mut registry = LayerRegistry::new();
        let id = registry
            .register(point_layer("Localités", 405, &[(-14.2, 14.5), (-13.9, 14.8)]))
            .unwrap();

        let mut group = ClusterGroup::new();
        group.attach(&registry, id).unwrap();

        for zoom in [1, 5, 10, 15] {
            let _ = group.aggregate(&wide_bounds(), zoom);
        }
        assert_eq!(group.len(), 2);
    }
}
