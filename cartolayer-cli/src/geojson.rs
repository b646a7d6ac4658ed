//! GeoJSON ingestion.
//!
//! The library core never parses datasets; this module plays the dataset
//! collaborator role for the CLI, converting a GeoJSON FeatureCollection
//! into the core's feature records.

use cartolayer::feature::{AttrValue, FeatureRecord, Geometry, Position};
use serde_json::Value;

/// Parses a GeoJSON FeatureCollection into feature records.
///
/// Features with a null geometry are skipped; everything else must be
/// one of the six supported geometry types.
pub fn parse_collection(text: &str) -> Result<Vec<FeatureRecord>, String> {
    let root: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing 'features' array".to_string())?;

    let mut records = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match parse_feature(feature) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(message) => return Err(format!("feature {}: {}", index, message)),
        }
    }
    Ok(records)
}

fn parse_feature(feature: &Value) -> Result<Option<FeatureRecord>, String> {
    let geometry_value = feature
        .get("geometry")
        .ok_or_else(|| "missing 'geometry'".to_string())?;
    if geometry_value.is_null() {
        return Ok(None);
    }

    let geometry = parse_geometry(geometry_value)?;

    let mut attributes = Vec::new();
    if let Some(properties) = feature.get("properties").and_then(Value::as_object) {
        for (key, value) in properties {
            attributes.push((key.clone(), parse_attribute(value)));
        }
    }

    Ok(Some(FeatureRecord::new(geometry, attributes)))
}

fn parse_attribute(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Number(n) => n
            .as_f64()
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::Null),
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Bool(b) => AttrValue::Text(b.to_string()),
        // Nested arrays/objects are rare in exports; keep them as text.
        other => AttrValue::Text(other.to_string()),
    }
}

fn parse_geometry(geometry: &Value) -> Result<Geometry, String> {
    let kind = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing geometry 'type'".to_string())?;
    let coordinates = geometry
        .get("coordinates")
        .ok_or_else(|| "missing 'coordinates'".to_string())?;

    match kind {
        "Point" => Ok(Geometry::Point(parse_position(coordinates)?)),
        "MultiPoint" => Ok(Geometry::MultiPoint(parse_positions(coordinates)?)),
        "LineString" => Ok(Geometry::LineString(parse_positions(coordinates)?)),
        "MultiLineString" => Ok(Geometry::MultiLineString(parse_position_lists(coordinates)?)),
        "Polygon" => Ok(Geometry::Polygon(parse_position_lists(coordinates)?)),
        "MultiPolygon" => {
            let polygons = as_array(coordinates)?
                .iter()
                .map(parse_position_lists)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::MultiPolygon(polygons))
        }
        other => Err(format!("unsupported geometry type '{}'", other)),
    }
}

fn parse_position(value: &Value) -> Result<Position, String> {
    let parts = as_array(value)?;
    if parts.len() < 2 {
        return Err("position needs at least two coordinates".to_string());
    }
    let lon = parts[0]
        .as_f64()
        .ok_or_else(|| "non-numeric longitude".to_string())?;
    let lat = parts[1]
        .as_f64()
        .ok_or_else(|| "non-numeric latitude".to_string())?;
    Ok(Position::new(lon, lat))
}

fn parse_positions(value: &Value) -> Result<Vec<Position>, String> {
    as_array(value)?.iter().map(parse_position).collect()
}

fn parse_position_lists(value: &Value) -> Result<Vec<Vec<Position>>, String> {
    as_array(value)?.iter().map(parse_positions).collect()
}

fn as_array(value: &Value) -> Result<&Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| "expected an array".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartolayer::feature::GeometryKind;

    #[test]
    fn test_parse_point_collection() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-14.2, 14.5] },
                    "properties": { "NOM": "Ndangane", "NUM_VILLAG": 12, "LIBELLE": null }
                }
            ]
        }"#;

        let records = parse_collection(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].geometry().kind(), GeometryKind::Point);
        assert_eq!(
            records[0].attribute("NOM"),
            Some(&AttrValue::Text("Ndangane".to_string()))
        );
        assert_eq!(
            records[0].attribute("NUM_VILLAG"),
            Some(&AttrValue::Number(12.0))
        );
        assert_eq!(records[0].attribute("LIBELLE"), Some(&AttrValue::Null));
    }

    #[test]
    fn test_parse_multipolygon() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]]
                    },
                    "properties": {}
                }
            ]
        }"#;

        let records = parse_collection(text).unwrap();
        assert_eq!(records[0].geometry().kind(), GeometryKind::Polygon);
    }

    #[test]
    fn test_null_geometry_skipped() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": null, "properties": { "NOM": "x" } }
            ]
        }"#;
        assert!(parse_collection(text).unwrap().is_empty());
    }

    #[test]
    fn test_missing_features_rejected() {
        let err = parse_collection(r#"{ "type": "Feature" }"#).unwrap_err();
        assert!(err.contains("features"));
    }

    #[test]
    fn test_unsupported_geometry_reports_index() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "GeometryCollection", "coordinates": [] },
                    "properties": {}
                }
            ]
        }"#;
        let err = parse_collection(text).unwrap_err();
        assert!(err.contains("feature 0"));
        assert!(err.contains("GeometryCollection"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_collection("not json").is_err());
    }
}
