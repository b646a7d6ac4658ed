//! Per-layer styling rules and pure style resolution.
//!
//! A [`StyleRule`] describes how a layer draws its features: a uniform
//! stroke/fill, or a categorical color keyed on one attribute with a
//! fallback for unmapped values. [`resolve_style`] maps a feature and a
//! rule to a concrete [`StyleSpec`] in either base or highlight mode.

mod color;
mod resolver;

pub use color::Rgba;
pub use resolver::resolve_style;

use serde::{Deserialize, Serialize};

/// Color applied to the hovered feature.
///
/// Line geometries receive it as stroke, everything else as fill.
pub const HIGHLIGHT_COLOR: Rgba = Rgba::opaque(255, 255, 0);

/// Resolved visual parameters for one feature.
///
/// Every field is a required output: the presentation layer applies the
/// whole spec on both highlight and reset, so partial specs would leave
/// stale channels behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Overall stroke opacity (0.0-1.0)
    pub opacity: f64,
    /// Stroke color
    pub stroke_color: Rgba,
    /// Stroke width in pixels
    pub stroke_weight: f64,
    /// Fill color
    pub fill_color: Rgba,
    /// Fill opacity (0.0 for unfilled line layers)
    pub fill_opacity: f64,
}

/// Which of the two deterministically-related styles to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    /// The layer's configured appearance.
    Base,
    /// The hover appearance derived from the base style.
    Highlight,
}

/// Styling policy for one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleRule {
    /// One stroke (and optional fill) for every feature.
    Uniform {
        /// Stroke color
        stroke: Rgba,
        /// Stroke width in pixels
        weight: f64,
        /// Fill color; `None` for unfilled line layers
        fill: Option<Rgba>,
    },
    /// Stroke color chosen by an attribute value.
    Categorical {
        /// Attribute key the lookup reads
        attribute: String,
        /// Category value to color, matched exactly
        table: Vec<(String, Rgba)>,
        /// Color for values with no table entry
        fallback: Rgba,
        /// Stroke width in pixels
        weight: f64,
    },
}

impl StyleRule {
    /// Creates a uniform rule with no fill.
    pub fn uniform(stroke: Rgba, weight: f64) -> Self {
        StyleRule::Uniform {
            stroke,
            weight,
            fill: None,
        }
    }

    /// Adds a fill color to a uniform rule. No effect on categorical rules.
    pub fn with_fill(mut self, color: Rgba) -> Self {
        if let StyleRule::Uniform { fill, .. } = &mut self {
            *fill = Some(color);
        }
        self
    }

    /// Creates a categorical rule keyed on one attribute.
    pub fn categorical(
        attribute: impl Into<String>,
        table: Vec<(String, Rgba)>,
        fallback: Rgba,
        weight: f64,
    ) -> Self {
        StyleRule::Categorical {
            attribute: attribute.into(),
            table,
            fallback,
            weight,
        }
    }

    /// Representative color for legend swatches.
    ///
    /// Uniform rules prefer their fill; categorical rules use the fallback.
    pub fn swatch(&self) -> Rgba {
        match self {
            StyleRule::Uniform { stroke, fill, .. } => fill.unwrap_or(*stroke),
            StyleRule::Categorical { fallback, .. } => *fallback,
        }
    }
}
