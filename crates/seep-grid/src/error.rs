//! Error types for grid property storage.

use std::error::Error;
use std::fmt;

/// Errors detected when registering grid properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid was declared with zero cells.
    ZeroCells,
    /// A property's value count does not match the grid's cell count.
    CellCountMismatch {
        /// Name of the offending property.
        property: String,
        /// The grid's declared cell count.
        expected: usize,
        /// Number of values actually supplied.
        got: usize,
    },
    /// A property with this name is already registered.
    DuplicateProperty {
        /// Name of the offending property.
        property: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCells => write!(f, "grid must have at least one cell"),
            Self::CellCountMismatch {
                property,
                expected,
                got,
            } => {
                write!(
                    f,
                    "property '{property}' has {got} values, grid has {expected} cells"
                )
            }
            Self::DuplicateProperty { property } => {
                write!(f, "property '{property}' is already registered")
            }
        }
    }
}

impl Error for GridError {}
