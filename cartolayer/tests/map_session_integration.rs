//! Integration tests for a full viewer session.
//!
//! These tests wire the registry, interaction tracker, clustering
//! adapter, and viewport telemetry together the way the viewer shell
//! does: build layers from the shipped palette, drive pointer and toggle
//! events, and check that panel state and render state never diverge.
//!
//! Run with: `cargo test --test map_session_integration`

use cartolayer::cluster::ClusterGroup;
use cartolayer::config::{road_color_table, road_fallback_color, AppConfig};
use cartolayer::feature::{AttrValue, FeatureRecord, Geometry, Position};
use cartolayer::interaction::{HoverState, HoverTarget, HoverTracker, RenderSurface};
use cartolayer::popup::{PopupContent, PopupField};
use cartolayer::registry::{LayerDefinition, LayerId, LayerRegistry};
use cartolayer::style::{Rgba, StyleRule, StyleSpec, HIGHLIGHT_COLOR};
use cartolayer::viewport::{compute_scale, ViewportBounds};

// ============================================================================
// Test surface
// ============================================================================

/// Counts highlighted features so the "never two highlights" property is
/// observable at every instant, not just at the end of a transition.
#[derive(Default)]
struct CountingSurface {
    highlighted: std::collections::HashSet<(LayerId, usize)>,
    max_simultaneous: usize,
    open_popups: std::collections::HashSet<(LayerId, usize)>,
}

impl RenderSurface for CountingSurface {
    fn apply_style(&mut self, layer: LayerId, feature: usize, style: &StyleSpec) {
        let is_highlight =
            style.stroke_color == HIGHLIGHT_COLOR || style.fill_color == HIGHLIGHT_COLOR;
        if is_highlight {
            self.highlighted.insert((layer, feature));
        } else {
            self.highlighted.remove(&(layer, feature));
        }
        self.max_simultaneous = self.max_simultaneous.max(self.highlighted.len());
    }

    fn open_popup(&mut self, layer: LayerId, feature: usize, _content: &PopupContent) {
        self.open_popups.insert((layer, feature));
    }

    fn close_popup(&mut self, layer: LayerId, feature: usize) {
        self.open_popups.remove(&(layer, feature));
    }

    fn close_layer_popups(&mut self, layer: LayerId) {
        self.open_popups.retain(|(l, _)| *l != layer);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn region(name: &str) -> FeatureRecord {
    FeatureRecord::new(
        Geometry::Polygon(vec![vec![
            Position::new(-15.0, 14.4),
            Position::new(-13.4, 14.4),
            Position::new(-13.4, 15.6),
            Position::new(-15.0, 14.4),
        ]]),
        vec![("Région".to_string(), AttrValue::Text(name.to_string()))],
    )
}

fn road(function: &str) -> FeatureRecord {
    FeatureRecord::new(
        Geometry::LineString(vec![Position::new(-14.5, 14.2), Position::new(-14.0, 14.6)]),
        vec![(
            "FONCTION".to_string(),
            AttrValue::Text(function.to_string()),
        )],
    )
}

fn settlement(name: &str, lon: f64, lat: f64) -> FeatureRecord {
    FeatureRecord::new(
        Geometry::Point(Position::new(lon, lat)),
        vec![("NOM".to_string(), AttrValue::Text(name.to_string()))],
    )
}

fn build_registry() -> (LayerRegistry, LayerId, LayerId, LayerId) {
    let mut registry = LayerRegistry::new();

    let regions = registry
        .register(
            LayerDefinition::new(
                "Régions",
                vec![region("Fatick"), region("Kaolack")],
                StyleRule::uniform(Rgba::opaque(35, 35, 35), 1.0)
                    .with_fill(Rgba::opaque(190, 178, 151)),
            )
            .with_popup_fields(vec![PopupField::new("Région", "Région")])
            .with_z_order(400),
        )
        .unwrap();

    let roads = registry
        .register(
            LayerDefinition::new(
                "Routes",
                vec![road("Route principale"), road("Piste secondaire")],
                StyleRule::categorical(
                    "FONCTION",
                    road_color_table(),
                    road_fallback_color(),
                    1.0,
                ),
            )
            .with_popup_fields(vec![PopupField::new("FONCTION", "Fonction")])
            .with_z_order(403),
        )
        .unwrap();

    let settlements = registry
        .register(
            LayerDefinition::new(
                "Localités",
                vec![
                    settlement("Ndangane", -14.20, 14.50),
                    settlement("Fimela", -14.21, 14.51),
                    settlement("Podor", -14.96, 16.65),
                ],
                StyleRule::uniform(Rgba::opaque(35, 35, 35), 1.0)
                    .with_fill(Rgba::opaque(225, 89, 137)),
            )
            .with_popup_fields(vec![PopupField::new("NOM", "Localité")])
            .with_z_order(405)
            .with_clustering(),
        )
        .unwrap();

    (registry, regions, roads, settlements)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_hover_walk_never_double_highlights() {
    let (registry, regions, roads, settlements) = build_registry();
    let mut tracker = HoverTracker::new();
    let mut surface = CountingSurface::default();

    // Sweep the pointer across features of three layers without
    // intervening leave events, as fast mouse movement produces.
    let walk = [
        HoverTarget::new(regions, 0),
        HoverTarget::new(roads, 0),
        HoverTarget::new(roads, 1),
        HoverTarget::new(settlements, 2),
        HoverTarget::new(regions, 1),
    ];
    for target in walk {
        tracker.pointer_enter(&registry, &mut surface, target);
    }

    assert_eq!(surface.max_simultaneous, 1, "No instant with two highlights");
    assert_eq!(
        tracker.state(),
        HoverState::Hovering(HoverTarget::new(regions, 1))
    );
    assert_eq!(surface.open_popups.len(), 1, "Only the last popup is open");

    tracker.pointer_leave(&registry, &mut surface, HoverTarget::new(regions, 1));
    assert!(surface.highlighted.is_empty());
    assert!(surface.open_popups.is_empty());
}

#[test]
fn test_panel_toggles_drive_render_set() {
    let (mut registry, regions, roads, settlements) = build_registry();

    // The panel reads the legend, the user unticks two boxes.
    let legend = registry.legend();
    assert_eq!(legend.len(), 3);
    assert!(legend.iter().all(|e| e.visible));

    registry.set_visible(roads, false);
    registry.set_visible(settlements, false);
    registry.set_visible(settlements, false); // double event from the UI

    let active: Vec<LayerId> = registry.list_active().iter().map(|l| l.id()).collect();
    assert_eq!(active, vec![regions]);

    // Panel re-render pulls from the registry and agrees with it.
    let legend = registry.legend();
    assert_eq!(
        legend.iter().filter(|e| e.visible).count(),
        1,
        "Panel state is derived, so it matches the render set"
    );

    registry.set_visible(roads, true);
    let active: Vec<LayerId> = registry.list_active().iter().map(|l| l.id()).collect();
    assert_eq!(active, vec![regions, roads]);
}

#[test]
fn test_layer_removed_mid_hover_is_absorbed() {
    let (mut registry, _, roads, _) = build_registry();
    let mut tracker = HoverTracker::new();
    let mut surface = CountingSurface::default();

    tracker.pointer_enter(&registry, &mut surface, HoverTarget::new(roads, 0));
    registry.unregister(roads);
    tracker.pointer_leave(&registry, &mut surface, HoverTarget::new(roads, 0));

    assert_eq!(tracker.state(), HoverState::Idle);
}

#[test]
fn test_cluster_lifecycle_against_registry() {
    let (registry, _, _, settlements) = build_registry();
    let mut cluster = ClusterGroup::new();

    assert_eq!(cluster.attach(&registry, settlements).unwrap(), 3);
    assert_eq!(cluster.attach(&registry, settlements).unwrap(), 0);
    assert_eq!(cluster.len(), 3);

    // Zoomed out over Senegal: the two Sine-Saloum villages merge.
    let senegal = ViewportBounds::new(12.0, -18.0, 17.0, -11.0);
    let blobs = cluster.aggregate(&senegal, 6);
    assert_eq!(blobs.len(), 2);
    assert!(blobs.iter().any(|b| b.count() == 2));

    // Zoomed in: everything separates, membership unchanged.
    let blobs = cluster.aggregate(&senegal, 14);
    assert_eq!(blobs.len(), 3);
    assert_eq!(cluster.len(), 3);
}

#[test]
fn test_default_palette_registers_cleanly() {
    let config = AppConfig::default();
    let mut registry = LayerRegistry::new();

    for palette in &config.layers {
        let stroke = palette.stroke.unwrap_or(Rgba::opaque(35, 35, 35));
        let mut rule = StyleRule::uniform(stroke, 1.0);
        if let Some(fill) = palette.fill {
            rule = rule.with_fill(fill);
        }
        let def = LayerDefinition::new(palette.name.clone(), vec![], rule)
            .with_z_order(palette.z_order);
        registry
            .register(def)
            .unwrap_or_else(|e| panic!("Palette entry '{}' rejected: {}", palette.name, e));
    }

    assert_eq!(registry.list_active().len(), config.layers.len());
}

#[test]
fn test_scale_recomputes_across_zoom_events() {
    // Pan/zoom sequence over the default view; each event recomputes.
    let wide = ViewportBounds::new(14.0, -15.1, 15.6, -13.4);
    let near = ViewportBounds::new(14.49, -14.27, 14.51, -14.24);

    let coarse = compute_scale(&wide, 800, 600);
    let fine = compute_scale(&near, 800, 600);

    assert!(coarse.meters > fine.meters);
    assert!(coarse.label.ends_with("km"));
    assert!(fine.meters < 1000.0);
    assert!(
        !fine.label.ends_with("km"),
        "Close-in view reads in meters: {}",
        fine.label
    );
}
