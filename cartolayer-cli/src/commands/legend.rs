//! Shipped palette legend command.

use cartolayer::config::{road_color_table, road_fallback_color, AppConfig};
use cartolayer::registry::{LayerDefinition, LayerRegistry};
use cartolayer::style::{Rgba, StyleRule};

use crate::error::CliError;

/// Register the shipped layer palette and print the legend the panel
/// would render.
pub fn run() -> Result<(), CliError> {
    let config = AppConfig::default();
    let mut registry = LayerRegistry::new();

    for palette in &config.layers {
        // The road layer colors by function; everything else is uniform.
        let rule = if palette.id == "routes" {
            StyleRule::categorical("FONCTION", road_color_table(), road_fallback_color(), 1.0)
        } else {
            let stroke = palette.stroke.unwrap_or(Rgba::opaque(35, 35, 35));
            let mut rule = StyleRule::uniform(stroke, 1.0);
            if let Some(fill) = palette.fill {
                rule = rule.with_fill(fill);
            }
            rule
        };
        let mut definition = LayerDefinition::new(palette.name.clone(), vec![], rule)
            .with_z_order(palette.z_order);
        if palette.id == "localites" {
            definition = definition.with_clustering();
        }
        let id = registry.register(definition)?;
        if !palette.visible {
            registry.set_visible(id, false);
        }
    }

    println!("Shipped palette ({} layers, bottom to top):", registry.len());
    for entry in registry.legend() {
        let marker = if entry.visible { "x" } else { " " };
        println!("  [{}] {:24} {}", marker, entry.name, entry.swatch.to_css());
    }
    Ok(())
}
