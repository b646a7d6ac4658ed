//! CartoLayer - Layer rendering and interaction core for a vector map viewer
//!
//! This library provides the stateful core of an interactive map viewer:
//! per-layer styling rules, popup construction, hover highlight bookkeeping,
//! point clustering, and the registry that keeps UI visibility toggles and
//! the live render set in agreement.
//!
//! # High-Level API
//!
//! Feature collections arrive pre-parsed from a dataset collaborator. The
//! [`registry`] module turns each collection into a managed layer, and the
//! [`interaction`] module drives hover transitions against it:
//!
//! ```
//! use cartolayer::registry::{LayerDefinition, LayerRegistry};
//! use cartolayer::style::{Rgba, StyleRule};
//!
//! let mut registry = LayerRegistry::new();
//! let def = LayerDefinition::new(
//!     "Regions",
//!     vec![],
//!     StyleRule::uniform(Rgba::new(35, 35, 35, 1.0), 1.0)
//!         .with_fill(Rgba::new(190, 178, 151, 1.0)),
//! );
//! let id = registry.register(def).unwrap();
//! assert!(registry.get(id).unwrap().is_visible());
//! ```

pub mod basemap;
pub mod cluster;
pub mod config;
pub mod export;
pub mod feature;
pub mod interaction;
pub mod logging;
pub mod popup;
pub mod query;
pub mod registry;
pub mod style;
pub mod viewport;

/// Version of the CartoLayer library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
