//! Layer definition and handle types.

use crate::feature::FeatureRecord;
use crate::popup::PopupField;
use crate::style::{Rgba, StyleRule};
use std::fmt;

/// Opaque identifier for a registered layer.
///
/// Remains valid for the lifetime of the registration; operations on an
/// unregistered id are absorbed as no-ops rather than errors, so holders
/// of stale ids (e.g. a hover in flight while a layer is removed) never
/// observe a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub(super) u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Static configuration for one dataset layer.
///
/// Names must be unique within a registry (panel and legend lookups key
/// on them) and z-orders must be distinct across rendered layers.
#[derive(Debug, Clone)]
pub struct LayerDefinition {
    /// Unique display name
    pub name: String,
    /// The layer's feature collection, in dataset order
    pub features: Vec<FeatureRecord>,
    /// Styling policy
    pub style: StyleRule,
    /// Popup field list, in display order
    pub popup_fields: Vec<PopupField>,
    /// Draw order; higher draws above lower
    pub z_order: i32,
    /// Route point features through the clustering adapter
    pub clustered: bool,
}

impl LayerDefinition {
    /// Creates a definition with no popup fields, z-order 0, clustering off.
    pub fn new(
        name: impl Into<String>,
        features: Vec<FeatureRecord>,
        style: StyleRule,
    ) -> Self {
        Self {
            name: name.into(),
            features,
            style,
            popup_fields: Vec::new(),
            z_order: 0,
            clustered: false,
        }
    }

    /// Sets the popup field list.
    pub fn with_popup_fields(mut self, fields: Vec<PopupField>) -> Self {
        self.popup_fields = fields;
        self
    }

    /// Sets the draw order.
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Marks the layer's points for clustering.
    pub fn with_clustering(mut self) -> Self {
        self.clustered = true;
        self
    }
}

/// A live, renderable layer instance bound to one definition.
///
/// Created when the registry ingests a [`LayerDefinition`]; destroyed on
/// unregister or registry teardown. Visibility is mutated only through
/// registry operations, never directly.
#[derive(Debug, Clone)]
pub struct LayerHandle {
    pub(super) id: LayerId,
    pub(super) definition: LayerDefinition,
    pub(super) visible: bool,
}

impl LayerHandle {
    /// The handle's registry id.
    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer's unique name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// The layer's draw order.
    #[inline]
    pub fn z_order(&self) -> i32 {
        self.definition.z_order
    }

    /// Whether the layer is in the active render set.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the layer's points are clustered.
    #[inline]
    pub fn is_clustered(&self) -> bool {
        self.definition.clustered
    }

    /// The backing definition.
    #[inline]
    pub fn definition(&self) -> &LayerDefinition {
        &self.definition
    }

    /// Looks up one feature by index.
    pub fn feature(&self, index: usize) -> Option<&FeatureRecord> {
        self.definition.features.get(index)
    }

    /// Number of features in the layer.
    pub fn feature_count(&self) -> usize {
        self.definition.features.len()
    }
}

/// One legend/panel entry derived from a registered layer.
///
/// UI panels render checkboxes and swatches from these; they never track
/// visibility on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Layer id, for routing toggle events back to the registry
    pub id: LayerId,
    /// Layer display name
    pub name: String,
    /// Representative swatch color
    pub swatch: Rgba,
    /// Current visibility per the registry
    pub visible: bool,
}
