//! Hover state machine.
//!
//! Tracks the at-most-one hovered feature and sequences the
//! reset-then-apply transition when the pointer moves between features,
//! so two features are never highlighted at the same instant.

use tracing::{debug, trace};

use super::RenderSurface;
use crate::popup::build_popup;
use crate::registry::{LayerId, LayerRegistry};
use crate::style::{resolve_style, StyleMode};

/// A (layer, feature index) pair identifying one hoverable feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    /// Owning layer
    pub layer: LayerId,
    /// Feature index within the layer's collection
    pub feature: usize,
}

impl HoverTarget {
    /// Creates a target for a feature of a layer.
    pub fn new(layer: LayerId, feature: usize) -> Self {
        Self { layer, feature }
    }
}

/// Current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    /// No feature is hovered.
    Idle,
    /// Exactly this feature is hovered.
    Hovering(HoverTarget),
}

/// Tracks hover-enter/hover-exit transitions for the whole map.
///
/// All pointer events arrive on the UI event queue in order and each
/// handler runs to completion, which is what makes the reset-then-apply
/// sequencing safe without locking.
#[derive(Debug, Default)]
pub struct HoverTracker {
    current: Option<HoverTarget>,
}

impl HoverTracker {
    /// Creates a tracker in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> HoverState {
        match self.current {
            Some(target) => HoverState::Hovering(target),
            None => HoverState::Idle,
        }
    }

    /// Handles the pointer entering a feature.
    ///
    /// Any previously hovered feature is fully reset first; only then is
    /// the highlight applied and the popup opened for the new target.
    /// Entering the feature that is already hovered is a no-op.
    pub fn pointer_enter<S: RenderSurface>(
        &mut self,
        registry: &LayerRegistry,
        surface: &mut S,
        target: HoverTarget,
    ) {
        if self.current == Some(target) {
            trace!(layer = %target.layer, feature = target.feature, "Re-enter ignored");
            return;
        }

        if let Some(previous) = self.current.take() {
            self.reset(registry, surface, previous);
        }

        let Some(handle) = registry.get(target.layer) else {
            // Layer vanished between dispatch and handling; stay idle.
            debug!(layer = %target.layer, "Hover enter on unregistered layer dropped");
            return;
        };
        let Some(feature) = handle.feature(target.feature) else {
            debug!(layer = %target.layer, feature = target.feature, "Hover enter on unknown feature dropped");
            return;
        };

        let highlight = resolve_style(feature, &handle.definition().style, StyleMode::Highlight);
        surface.apply_style(target.layer, target.feature, &highlight);

        // Popup content is built lazily, at the moment of the hover.
        let content = build_popup(feature, &handle.definition().popup_fields);
        surface.open_popup(target.layer, target.feature, &content);

        trace!(layer = %target.layer, feature = target.feature, "Hovering");
        self.current = Some(target);
    }

    /// Handles the pointer leaving a feature.
    ///
    /// Restores the base style and closes the feature's popup. A leave
    /// event for a feature that is not the current hover is ignored.
    pub fn pointer_leave<S: RenderSurface>(
        &mut self,
        registry: &LayerRegistry,
        surface: &mut S,
        target: HoverTarget,
    ) {
        if self.current != Some(target) {
            trace!(layer = %target.layer, feature = target.feature, "Leave for non-hovered feature ignored");
            return;
        }
        self.current = None;
        self.reset(registry, surface, target);
    }

    /// Restores a feature's base style and closes its popup.
    ///
    /// A stale target (layer unregistered mid-hover) is absorbed
    /// silently; a missed highlight reset is less disruptive than
    /// surfacing a transient race to the user.
    fn reset<S: RenderSurface>(
        &mut self,
        registry: &LayerRegistry,
        surface: &mut S,
        target: HoverTarget,
    ) {
        let Some(handle) = registry.get(target.layer) else {
            debug!(layer = %target.layer, "Reset target unregistered; dropping to idle");
            return;
        };
        let Some(feature) = handle.feature(target.feature) else {
            debug!(layer = %target.layer, feature = target.feature, "Reset feature missing; dropping to idle");
            return;
        };

        let base = resolve_style(feature, &handle.definition().style, StyleMode::Base);
        surface.apply_style(target.layer, target.feature, &base);

        if handle.is_clustered() {
            surface.close_layer_popups(target.layer);
        } else {
            surface.close_popup(target.layer, target.feature);
        }
        trace!(layer = %target.layer, feature = target.feature, "Hover reset");
    }
}
