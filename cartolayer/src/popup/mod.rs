//! Popup content construction.
//!
//! Builds the structured attribute table shown when a feature is hovered.
//! Rows are emitted in field-list order, rows whose attribute carries no
//! data are omitted entirely, and values containing an embedded image URL
//! mark the content so the presentation layer can size the popup
//! differently. Building never mutates the input feature.

use crate::feature::FeatureRecord;
use serde::{Deserialize, Serialize};

/// Image file extensions recognized by media detection.
///
/// Detection is syntactic (extension match on the value text); no fetch
/// is ever performed to confirm the URL resolves to an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "avif"];

/// One (attribute key, display label) pair of a layer's popup field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupField {
    /// Attribute key to read from the feature
    pub key: String,
    /// Label shown in the popup row
    pub label: String,
}

impl PopupField {
    /// Creates a field mapping an attribute key to a display label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Creates a field whose label is the attribute key itself.
    pub fn keyed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
        }
    }
}

/// One emitted popup row. The value is HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupRow {
    /// Display label from the field list
    pub label: String,
    /// Escaped attribute value
    pub value: String,
}

/// Structured popup content for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupContent {
    /// Rows in field-list order; absent attributes emit no row.
    pub rows: Vec<PopupRow>,
    /// True when any row's value carries an embedded image URL.
    pub has_media: bool,
}

impl PopupContent {
    /// Returns true if no rows were emitted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds popup content for a feature from a layer's field list.
///
/// For each field, in order, a row is emitted only when the attribute
/// value is present (non-null, non-empty after trimming). Values are
/// escaped so the presentation layer can insert them as-is.
pub fn build_popup(feature: &FeatureRecord, fields: &[PopupField]) -> PopupContent {
    let mut rows = Vec::new();
    let mut has_media = false;

    for field in fields {
        let Some(value) = feature.attribute(&field.key) else {
            continue;
        };
        if !value.is_present() {
            continue;
        }

        let text = value.display();
        if has_image_extension(&text) {
            has_media = true;
        }
        rows.push(PopupRow {
            label: field.label.clone(),
            value: escape_html(&text),
        });
    }

    PopupContent { rows, has_media }
}

/// Checks whether a value ends in a known image file extension.
///
/// A trailing query string or fragment is stripped first so URLs like
/// `photo.png?w=300` are still recognized.
fn has_image_extension(value: &str) -> bool {
    let trimmed = value.trim();
    let path = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or(trimmed)
        .to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
}

/// Escapes the characters HTML treats specially.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
