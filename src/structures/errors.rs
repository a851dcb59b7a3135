//! Construction errors for the data-structure engines

use std::fmt;

/// Errors raised while creating a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A fixed-capacity structure was requested with no slots
    ZeroCapacity { structure: &'static str },

    /// The buffer for the requested capacity could not be allocated
    CapacityTooLarge {
        structure: &'static str,
        capacity: usize,
    },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::ZeroCapacity { structure } => {
                write!(f, "{} capacity must be at least 1", structure)
            }
            StructureError::CapacityTooLarge {
                structure,
                capacity,
            } => write!(f, "Cannot allocate a {} of capacity {}", structure, capacity),
        }
    }
}

impl std::error::Error for StructureError {}
