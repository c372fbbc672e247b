//! Per-cell grid property storage for reservoir simulation configuration.
//!
//! [`GridProperties`] answers the two questions configuration components
//! ask of the grid: "is an integer property named X present" and "give me
//! its per-cell values". Lengths are validated at insertion time so every
//! stored property has exactly one value per grid cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod properties;

pub use error::GridError;
pub use properties::GridProperties;
