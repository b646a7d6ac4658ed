//! Built-in configuration defaults.
//!
//! Carries the shipped basemap set and the thematic layer palette for
//! the Senegal datasets the viewer ships with.

use super::settings::{AppConfig, LayerPalette, MapSettings};
use crate::basemap::BasemapSource;
use crate::style::Rgba;
use crate::viewport::ViewportBounds;

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            bounds: ViewportBounds::new(
                14.455587820623908,
                -15.038297818826887,
                15.590279642926522,
                -13.401600485252754,
            ),
            min_zoom: 1,
            max_zoom: 20,
            default_zoom: 8,
            coordinate_precision: 6,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            basemaps: default_basemaps(),
            layers: default_layers(),
        }
    }
}

/// The shipped basemap sources; the first entry is the startup basemap.
pub fn default_basemaps() -> Vec<BasemapSource> {
    vec![
        BasemapSource {
            id: "osm".to_string(),
            name: "OpenStreetMap".to_string(),
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 19,
        },
        BasemapSource {
            id: "satellite".to_string(),
            name: "Satellite".to_string(),
            url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                .to_string(),
            attribution: "© Esri".to_string(),
            max_zoom: 18,
        },
        BasemapSource {
            id: "terrain".to_string(),
            name: "Terrain".to_string(),
            url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenTopoMap".to_string(),
            max_zoom: 17,
        },
        BasemapSource {
            id: "dark".to_string(),
            name: "Sombre".to_string(),
            url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "© CartoDB".to_string(),
            max_zoom: 19,
        },
    ]
}

/// The shipped thematic layer palette, ascending by draw order.
pub fn default_layers() -> Vec<LayerPalette> {
    let boundary_stroke = Some(Rgba::opaque(35, 35, 35));
    vec![
        LayerPalette {
            id: "region".to_string(),
            name: "Régions".to_string(),
            z_order: 400,
            stroke: boundary_stroke,
            fill: Some(Rgba::opaque(190, 178, 151)),
            visible: true,
        },
        LayerPalette {
            id: "departement".to_string(),
            name: "Départements".to_string(),
            z_order: 401,
            stroke: boundary_stroke,
            fill: Some(Rgba::opaque(183, 72, 75)),
            visible: true,
        },
        LayerPalette {
            id: "arrondissement".to_string(),
            name: "Arrondissements".to_string(),
            z_order: 402,
            stroke: boundary_stroke,
            fill: Some(Rgba::opaque(232, 113, 141)),
            visible: true,
        },
        LayerPalette {
            id: "routes".to_string(),
            name: "Routes".to_string(),
            z_order: 403,
            stroke: None,
            fill: None,
            visible: true,
        },
        LayerPalette {
            id: "hydrographie".to_string(),
            name: "Hydrographie".to_string(),
            z_order: 404,
            stroke: Some(Rgba::opaque(152, 125, 183)),
            fill: None,
            visible: true,
        },
        LayerPalette {
            id: "localites".to_string(),
            name: "Localités".to_string(),
            z_order: 405,
            stroke: boundary_stroke,
            fill: Some(Rgba::opaque(225, 89, 137)),
            visible: true,
        },
    ]
}

/// The categorical road-function color table.
///
/// Road layers color by the `FONCTION` attribute; values outside the
/// table take the fallback returned by [`road_fallback_color`].
pub fn road_color_table() -> Vec<(String, Rgba)> {
    [
        ("Autres pistes", Rgba::opaque(108, 200, 32)),
        ("Autres routes", Rgba::opaque(207, 71, 189)),
        ("Chemin de fer", Rgba::opaque(29, 161, 227)),
        ("Digues", Rgba::opaque(104, 113, 238)),
        ("Piste automobile", Rgba::opaque(108, 200, 32)),
        ("Piste secondaire", Rgba::opaque(133, 149, 135)),
        ("Route principale", Rgba::opaque(21, 210, 163)),
        ("Route principale à 2 voies", Rgba::opaque(222, 214, 60)),
        ("Route principale à 4 voies", Rgba::opaque(216, 86, 119)),
    ]
    .into_iter()
    .map(|(name, color)| (name.to_string(), color))
    .collect()
}

/// Fallback color for road functions outside the table.
pub fn road_fallback_color() -> Rgba {
    Rgba::opaque(108, 200, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_consistent() {
        let config = AppConfig::default();
        assert_eq!(config.basemaps.len(), 4);
        assert_eq!(config.basemaps[0].id, "osm");
        assert_eq!(config.layers.len(), 6);
        assert!(config.map.min_zoom < config.map.max_zoom);
    }

    #[test]
    fn test_default_layers_have_distinct_z_orders() {
        let layers = default_layers();
        for (i, a) in layers.iter().enumerate() {
            for b in layers.iter().skip(i + 1) {
                assert_ne!(a.z_order, b.z_order, "{} vs {}", a.name, b.name);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_road_table_has_fallback_entry_style() {
        let table = road_color_table();
        assert_eq!(table.len(), 9);
        assert!(table.iter().any(|(name, _)| name == "Route principale"));
    }
}
