//! Dataset inspection command.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use cartolayer::feature::FeatureRecord;
use cartolayer::query::{collection_stats, filter_by_attribute};
use cartolayer::registry::{LayerDefinition, LayerRegistry};
use cartolayer::style::{Rgba, StyleRule};

use crate::error::CliError;
use crate::geojson;

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// GeoJSON files to inspect, one layer each
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only count features whose attribute matches, as KEY=VALUE
    #[arg(long, value_name = "KEY=VALUE")]
    pub filter: Option<String>,
}

/// Load each file as a layer, print its statistics, and show the
/// resulting legend.
pub fn run(args: InspectArgs) -> Result<(), CliError> {
    let filter = args.filter.as_deref().map(parse_filter).transpose()?;

    let mut registry = LayerRegistry::new();
    let base_z = 400;

    for (index, path) in args.files.iter().enumerate() {
        let features = load_features(path)?;
        let name = layer_name(path, index);
        info!(layer = %name, count = features.len(), "Dataset loaded");

        print_stats(&name, &features, filter.as_ref());

        let definition = LayerDefinition::new(
            name,
            features,
            StyleRule::uniform(Rgba::opaque(35, 35, 35), 1.0),
        )
        .with_z_order(base_z + index as i32);
        registry.register(definition)?;
    }

    println!("Legend ({} layers):", registry.len());
    for entry in registry.legend() {
        println!("  [{}] {} {}", entry.swatch.to_css(), entry.id, entry.name);
    }
    Ok(())
}

/// Read and parse one GeoJSON file.
pub fn load_features(path: &PathBuf) -> Result<Vec<FeatureRecord>, CliError> {
    let text = fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: path.display().to_string(),
        error,
    })?;
    geojson::parse_collection(&text).map_err(|message| CliError::GeoJson {
        path: path.display().to_string(),
        message,
    })
}

fn layer_name(path: &PathBuf, index: usize) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("layer-{}", index))
}

fn parse_filter(raw: &str) -> Result<(String, String), CliError> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| CliError::GeoJson {
            path: "--filter".to_string(),
            message: format!("expected KEY=VALUE, got '{}'", raw),
        })
}

fn print_stats(name: &str, features: &[FeatureRecord], filter: Option<&(String, String)>) {
    let stats = collection_stats(features);

    println!("{}:", name);
    println!("  Features: {}", stats.count);
    for (kind, count) in &stats.kinds {
        println!("  {}: {}", kind, count);
    }
    if let Some(bounds) = &stats.point_bounds {
        println!(
            "  Point bounds: [{:.5}, {:.5}] .. [{:.5}, {:.5}]",
            bounds.south, bounds.west, bounds.north, bounds.east
        );
    }
    if let Some((key, value)) = filter {
        let hits = filter_by_attribute(features, key, value);
        println!("  Matching {}={}: {}", key, value, hits.len());
    }
    println!();
}
