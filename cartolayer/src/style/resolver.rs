//! Pure style resolution.
//!
//! `resolve_style` is called at initial render, at highlight time, and at
//! reset time. It is deterministic for identical inputs, so the reset path
//! restores exactly the base style without any saved-state bookkeeping.

use super::{Rgba, StyleMode, StyleRule, StyleSpec, HIGHLIGHT_COLOR};
use crate::feature::FeatureRecord;

/// Resolves the visual style for one feature under a layer's style rule.
///
/// The base style comes from the rule (uniform colors, or a categorical
/// lookup on one attribute with a fallback for unmapped values — unmapped
/// values never error). The highlight style is derived from the base by
/// geometry kind: line geometries substitute the stroke color only, while
/// polygon and point geometries substitute the fill color at full opacity.
pub fn resolve_style(feature: &FeatureRecord, rule: &StyleRule, mode: StyleMode) -> StyleSpec {
    let base = base_style(feature, rule);
    match mode {
        StyleMode::Base => base,
        StyleMode::Highlight => highlight_style(feature, base),
    }
}

fn base_style(feature: &FeatureRecord, rule: &StyleRule) -> StyleSpec {
    match rule {
        StyleRule::Uniform {
            stroke,
            weight,
            fill,
        } => from_parts(*stroke, *weight, *fill),
        StyleRule::Categorical {
            attribute,
            table,
            fallback,
            weight,
        } => {
            let stroke = feature
                .attribute(attribute)
                .map(|value| value.display())
                .and_then(|text| {
                    table
                        .iter()
                        .find(|(category, _)| *category == text)
                        .map(|(_, color)| *color)
                })
                .unwrap_or(*fallback);
            from_parts(stroke, *weight, None)
        }
    }
}

fn from_parts(stroke: Rgba, weight: f64, fill: Option<Rgba>) -> StyleSpec {
    StyleSpec {
        opacity: 1.0,
        stroke_color: stroke,
        stroke_weight: weight,
        fill_color: fill.unwrap_or(stroke),
        fill_opacity: if fill.is_some() { 1.0 } else { 0.0 },
    }
}

fn highlight_style(feature: &FeatureRecord, mut spec: StyleSpec) -> StyleSpec {
    if feature.geometry().is_line_kind() {
        spec.stroke_color = HIGHLIGHT_COLOR;
    } else {
        spec.fill_color = HIGHLIGHT_COLOR;
        spec.fill_opacity = 1.0;
    }
    spec
}
