//! Basemap selection.
//!
//! Tracks which raster tile source is active. The tile collaborator only
//! needs two requests from the core: "set active basemap id" and "revert
//! to previous". Exactly one source is active at any time; activating a
//! source deactivates whichever was active before, with no per-item
//! bookkeeping for the UI to get out of sync with.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// One raster tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasemapSource {
    /// Stable identifier ("osm", "satellite", ...)
    pub id: String,
    /// Display name for the basemap panel
    pub name: String,
    /// Tile URL template
    pub url: String,
    /// Attribution line
    pub attribution: String,
    /// Maximum zoom the source serves
    pub max_zoom: u8,
}

/// Errors from basemap selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasemapError {
    /// No source carries this id
    #[error("unknown basemap id: '{0}'")]
    UnknownId(String),

    /// A registry needs at least one source
    #[error("basemap registry cannot be empty")]
    Empty,
}

/// Ordered set of basemap sources with one active selection.
#[derive(Debug, Clone)]
pub struct BasemapRegistry {
    sources: Vec<BasemapSource>,
    active: usize,
    previous: Option<usize>,
}

impl BasemapRegistry {
    /// Creates a registry with the first source active.
    pub fn new(sources: Vec<BasemapSource>) -> Result<Self, BasemapError> {
        if sources.is_empty() {
            return Err(BasemapError::Empty);
        }
        Ok(Self {
            sources,
            active: 0,
            previous: None,
        })
    }

    /// Activates a source by id.
    ///
    /// The clicked source becomes active and every other source becomes
    /// inactive. Re-activating the active source is a no-op. An unknown
    /// id is rejected without changing the selection.
    pub fn set_active(&mut self, id: &str) -> Result<(), BasemapError> {
        let index = self
            .sources
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| BasemapError::UnknownId(id.to_string()))?;

        if index != self.active {
            self.previous = Some(self.active);
            self.active = index;
            debug!(basemap = %id, "Basemap switched");
        }
        Ok(())
    }

    /// Reverts to the previously active source.
    ///
    /// Returns false (and keeps the selection) when no switch has
    /// happened yet.
    pub fn revert(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.previous = Some(self.active);
                self.active = previous;
                debug!(basemap = %self.sources[self.active].id, "Basemap reverted");
                true
            }
            None => false,
        }
    }

    /// The active source.
    pub fn active(&self) -> &BasemapSource {
        &self.sources[self.active]
    }

    /// All sources paired with their active flag; exactly one is true.
    pub fn entries(&self) -> Vec<(&BasemapSource, bool)> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, s)| (s, i == self.active))
            .collect()
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Always false; an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
