//! Render surface seam.
//!
//! The tracker never touches the presentation layer directly; it issues
//! style and popup commands through this trait. Tests substitute a
//! recording implementation.

use crate::popup::PopupContent;
use crate::registry::LayerId;
use crate::style::StyleSpec;

/// Sink for the visual side effects of hover transitions.
///
/// Implemented by the presentation layer (or a test double). The tracker
/// chooses between [`close_popup`](RenderSurface::close_popup) and
/// [`close_layer_popups`](RenderSurface::close_layer_popups) from the
/// layer handle's variant (clustered layers only support layer-wide
/// close), so implementations never need runtime capability probing.
pub trait RenderSurface {
    /// Applies a resolved style to one feature.
    fn apply_style(&mut self, layer: LayerId, feature: usize, style: &StyleSpec);

    /// Opens a popup for one feature.
    fn open_popup(&mut self, layer: LayerId, feature: usize, content: &PopupContent);

    /// Closes the popup of one feature.
    fn close_popup(&mut self, layer: LayerId, feature: usize);

    /// Closes every popup owned by a layer.
    ///
    /// Used for cluster-group layers, where per-feature close is not
    /// available; the alternative would be leaving a stale popup open.
    fn close_layer_popups(&mut self, layer: LayerId);
}
