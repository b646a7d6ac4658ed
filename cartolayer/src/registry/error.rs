//! Error types for registry operations.
//!
//! All registry errors are recoverable: a rejected registration leaves
//! the registry untouched, and the caller may retry with a corrected
//! definition.

use thiserror::Error;

/// Errors that can occur when registering a layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A layer with this name is already registered
    #[error("layer name already registered: '{0}'")]
    DuplicateName(String),

    /// Another rendered layer already uses this draw order
    #[error("z-order {z_order} already used by layer '{taken_by}'")]
    DuplicateZOrder {
        /// The colliding z-order value
        z_order: i32,
        /// Name of the layer holding it
        taken_by: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = RegistryError::DuplicateName("Régions".to_string());
        assert_eq!(err.to_string(), "layer name already registered: 'Régions'");
    }

    #[test]
    fn test_duplicate_z_order_display() {
        let err = RegistryError::DuplicateZOrder {
            z_order: 400,
            taken_by: "Régions".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "z-order 400 already used by layer 'Régions'"
        );
    }
}
