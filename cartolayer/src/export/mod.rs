//! Attribute export.
//!
//! Writes a feature collection's attribute table as CSV for the download
//! panel. The header row comes from the first feature's attribute keys;
//! values containing separators or quotes are quoted.

use thiserror::Error;

use crate::feature::FeatureRecord;

/// Errors from attribute export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// There is nothing to derive a header from
    #[error("cannot export an empty feature collection")]
    EmptyCollection,
}

/// Renders a feature collection's attributes as CSV.
///
/// Column order follows the first feature's attribute keys; features
/// missing a key emit an empty cell. Values are quoted when they contain
/// a comma, quote, or newline, with embedded quotes doubled.
pub fn to_csv(features: &[FeatureRecord]) -> Result<String, ExportError> {
    let first = features.first().ok_or(ExportError::EmptyCollection)?;
    let keys: Vec<&str> = first.attributes().map(|(k, _)| k).collect();

    let mut csv = String::new();
    csv.push_str(
        &keys
            .iter()
            .map(|k| escape_csv(k))
            .collect::<Vec<_>>()
            .join(","),
    );
    csv.push('\n');

    for feature in features {
        let row: Vec<String> = keys
            .iter()
            .map(|key| {
                feature
                    .attribute(key)
                    .map(|v| escape_csv(&v.display()))
                    .unwrap_or_default()
            })
            .collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
