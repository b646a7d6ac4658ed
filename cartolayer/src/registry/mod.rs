//! Layer registry — the single source of truth for the live layer set.
//!
//! Owns the ordered collection of named layers, assigns handles, and
//! exposes the add/remove/toggle operations the UI panel drives. Panel
//! checkbox state and the rendered layer set are both derived from the
//! registry, so the two can never diverge.

mod error;
mod types;

pub use error::RegistryError;
pub use types::{LayerDefinition, LayerHandle, LayerId, LegendEntry};

use tracing::debug;

/// Registry of managed layers.
///
/// Single-threaded by design: every mutation happens on the UI event
/// queue, so interior locking is unnecessary.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<LayerHandle>,
    next_id: u64,
}

impl LayerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a layer and returns its handle id.
    ///
    /// The new layer starts visible. Fails without mutating the registry
    /// when the name is already taken or the z-order collides with a
    /// registered layer.
    pub fn register(&mut self, definition: LayerDefinition) -> Result<LayerId, RegistryError> {
        if self.layers.iter().any(|l| l.name() == definition.name) {
            return Err(RegistryError::DuplicateName(definition.name));
        }
        if let Some(taken) = self
            .layers
            .iter()
            .find(|l| l.z_order() == definition.z_order)
        {
            return Err(RegistryError::DuplicateZOrder {
                z_order: definition.z_order,
                taken_by: taken.name().to_string(),
            });
        }

        let id = LayerId(self.next_id);
        self.next_id += 1;
        debug!(layer = %id, name = %definition.name, z_order = definition.z_order, "Layer registered");
        self.layers.push(LayerHandle {
            id,
            definition,
            visible: true,
        });
        Ok(id)
    }

    /// Removes a layer from the registry and the render order.
    ///
    /// Idempotent: unregistering an unknown or already-removed id is a
    /// no-op, not an error. Returns true if a layer was removed.
    pub fn unregister(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        let removed = self.layers.len() != before;
        if removed {
            debug!(layer = %id, "Layer unregistered");
        }
        removed
    }

    /// Sets a layer's visibility.
    ///
    /// Idempotent: setting the current value again is a no-op, and an
    /// unknown id is absorbed silently. Returns true if the visibility
    /// actually changed.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> bool {
        match self.layers.iter_mut().find(|l| l.id == id) {
            Some(layer) if layer.visible != visible => {
                layer.visible = visible;
                debug!(layer = %id, name = %layer.name(), visible, "Layer visibility changed");
                true
            }
            _ => false,
        }
    }

    /// Looks up a handle by id.
    pub fn get(&self, id: LayerId) -> Option<&LayerHandle> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Looks up a handle by its unique name.
    pub fn get_by_name(&self, name: &str) -> Option<&LayerHandle> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Returns true if the id refers to a registered layer.
    pub fn contains(&self, id: LayerId) -> bool {
        self.get(id).is_some()
    }

    /// The visible layers, ascending by z-order.
    ///
    /// This is the render set; anything drawing layers or panel state
    /// derives from it.
    pub fn list_active(&self) -> Vec<&LayerHandle> {
        let mut active: Vec<&LayerHandle> = self.layers.iter().filter(|l| l.visible).collect();
        active.sort_by_key(|l| l.z_order());
        active
    }

    /// All registered layers in registration order, visible or not.
    pub fn iter(&self) -> impl Iterator<Item = &LayerHandle> {
        self.layers.iter()
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layers are registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Legend entries for every registered layer, ascending by z-order.
    ///
    /// The UI panel renders checkboxes and swatches from these rather
    /// than keeping its own visibility bookkeeping.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut by_order: Vec<&LayerHandle> = self.layers.iter().collect();
        by_order.sort_by_key(|l| l.z_order());
        by_order
            .into_iter()
            .map(|l| LegendEntry {
                id: l.id,
                name: l.name().to_string(),
                swatch: l.definition.style.swatch(),
                visible: l.visible,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Rgba, StyleRule};

    fn def(name: &str, z_order: i32) -> LayerDefinition {
        LayerDefinition::new(
            name,
            vec![],
            StyleRule::uniform(Rgba::opaque(35, 35, 35), 1.0),
        )
        .with_z_order(z_order)
    }

    #[test]
    fn test_register_starts_visible() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Régions", 400)).unwrap();
        assert!(registry.get(id).unwrap().is_visible());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_duplicate_name_rejected_without_mutation() {
        let mut registry = LayerRegistry::new();
        registry.register(def("Régions", 400)).unwrap();

        let err = registry.register(def("Régions", 401)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("Régions".to_string()));
        assert_eq!(registry.len(), 1, "Failed registration must not mutate");
    }

    #[test]
    fn test_register_duplicate_z_order_rejected() {
        let mut registry = LayerRegistry::new();
        registry.register(def("Régions", 400)).unwrap();

        let err = registry.register(def("Départements", 400)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateZOrder { z_order: 400, .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Routes", 403)).unwrap();

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id), "Second unregister is a no-op");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_unknown_id_is_noop() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Routes", 403)).unwrap();
        registry.unregister(id);
        assert!(!registry.unregister(id));
    }

    #[test]
    fn test_set_visible_idempotent() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Hydrographie", 404)).unwrap();

        assert!(!registry.set_visible(id, true), "Already visible: no-op");
        assert!(registry.set_visible(id, false));
        assert!(!registry.set_visible(id, false), "Already hidden: no-op");
        assert!(registry.set_visible(id, true));
    }

    #[test]
    fn test_set_visible_unknown_id_absorbed() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Localités", 405)).unwrap();
        registry.unregister(id);
        assert!(!registry.set_visible(id, false));
    }

    #[test]
    fn test_list_active_sorted_by_z_order() {
        let mut registry = LayerRegistry::new();
        let routes = registry.register(def("Routes", 403)).unwrap();
        let regions = registry.register(def("Régions", 400)).unwrap();
        let hydro = registry.register(def("Hydrographie", 404)).unwrap();

        let order: Vec<LayerId> = registry.list_active().iter().map(|l| l.id()).collect();
        assert_eq!(order, vec![regions, routes, hydro]);
    }

    #[test]
    fn test_list_active_reflects_visibility_exactly() {
        let mut registry = LayerRegistry::new();
        let a = registry.register(def("Régions", 400)).unwrap();
        let b = registry.register(def("Départements", 401)).unwrap();

        registry.set_visible(a, false);
        let active: Vec<LayerId> = registry.list_active().iter().map(|l| l.id()).collect();
        assert_eq!(active, vec![b]);

        registry.set_visible(a, true);
        assert_eq!(registry.list_active().len(), 2);
    }

    #[test]
    fn test_get_by_name() {
        let mut registry = LayerRegistry::new();
        let id = registry.register(def("Arrondissements", 402)).unwrap();
        assert_eq!(registry.get_by_name("Arrondissements").unwrap().id(), id);
        assert!(registry.get_by_name("missing").is_none());
    }

    #[test]
    fn test_legend_includes_hidden_layers() {
        let mut registry = LayerRegistry::new();
        let a = registry.register(def("Régions", 400)).unwrap();
        registry.register(def("Départements", 401)).unwrap();
        registry.set_visible(a, false);

        let legend = registry.legend();
        assert_eq!(legend.len(), 2, "Legend lists hidden layers too");
        assert!(!legend[0].visible);
        assert_eq!(legend[0].name, "Régions");
        assert_eq!(legend[0].swatch, Rgba::opaque(35, 35, 35));
    }

    #[test]
    fn test_ids_not_reused_after_unregister() {
        let mut registry = LayerRegistry::new();
        let first = registry.register(def("Régions", 400)).unwrap();
        registry.unregister(first);
        let second = registry.register(def("Régions", 400)).unwrap();
        assert_ne!(first, second);
    }
}
