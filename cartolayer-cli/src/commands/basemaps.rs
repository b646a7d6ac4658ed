//! Basemap listing and switching command.

use clap::Args;

use cartolayer::basemap::BasemapRegistry;
use cartolayer::config::default_basemaps;

use crate::error::CliError;

/// Arguments for the basemaps command.
#[derive(Debug, Args)]
pub struct BasemapsArgs {
    /// Activate this basemap id before listing
    #[arg(long, value_name = "ID")]
    pub activate: Option<String>,

    /// Revert to the previously active basemap after activating
    #[arg(long)]
    pub revert: bool,
}

/// List the shipped basemap sources, optionally exercising a switch.
pub fn run(args: BasemapsArgs) -> Result<(), CliError> {
    let mut registry = BasemapRegistry::new(default_basemaps())?;

    if let Some(id) = &args.activate {
        registry.set_active(id)?;
    }
    if args.revert && !registry.revert() {
        println!("Nothing to revert to; keeping '{}'", registry.active().id);
    }

    for (source, active) in registry.entries() {
        let marker = if active { "*" } else { " " };
        println!(
            "{} {:12} {:20} max zoom {:2}  {}",
            marker, source.id, source.name, source.max_zoom, source.url
        );
    }
    Ok(())
}
