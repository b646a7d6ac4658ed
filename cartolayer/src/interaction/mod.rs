//! Interaction state tracking.
//!
//! Pointer events flow in here; highlight styles, base-style resets, and
//! popup open/close commands flow out through the [`RenderSurface`]
//! seam. At most one feature is hovered at any instant.

mod surface;
mod tracker;

pub use surface::RenderSurface;
pub use tracker::{HoverState, HoverTarget, HoverTracker};
