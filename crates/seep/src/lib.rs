//! Seep: reservoir deck configuration tables and their collaborators.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Seep sub-crates. For most users, adding `seep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // A metric deck enabling threshold pressure with one barrier record.
//! let deck = Deck::new(UnitSystem::Metric)
//!     .with(DeckKeyword::bare("RUNSPEC"))
//!     .with(DeckKeyword::new(
//!         "EQLOPTS",
//!         vec![DeckRecord::new(vec![DeckItem::str("OPTION1", "THPRES")])],
//!     ))
//!     .with(DeckKeyword::bare("SOLUTION"))
//!     .with(DeckKeyword::new(
//!         "THPRES",
//!         vec![DeckRecord::new(vec![
//!             DeckItem::int("REGION1", 1),
//!             DeckItem::int("REGION2", 2),
//!             DeckItem::double("VALUE", Dimension::Pressure, 1.0),
//!         ])],
//!     ));
//!
//! // A four-cell grid classified into two equilibration regions.
//! let mut grid = GridProperties::new(4).unwrap();
//! grid.insert_int("EQLNUM", vec![1, 1, 2, 2]).unwrap();
//!
//! let config = SimulationConfig::from_deck(&deck, &grid).unwrap();
//! let thpres = config.threshold_pressure();
//! assert!(thpres.has_region_barrier(2, 1));
//! assert_eq!(thpres.threshold_pressure(2, 1), Ok(1.0e5)); // 1 barsa in Pa
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`deck`] | `seep-deck` | Typed keywords, records, items, sections, units |
//! | [`grid`] | `seep-grid` | Per-cell grid property storage |
//! | [`simconfig`] | `seep-simconfig` | Threshold pressure table and owning config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Typed deck model (`seep-deck`).
///
/// Keywords, records, named items with present/defaulted value slots,
/// [`deck::Section`] views, and SI unit conversion.
pub use seep_deck as deck;

/// Grid property storage (`seep-grid`).
///
/// [`grid::GridProperties`] holds the named per-cell integer arrays
/// configuration components validate against.
pub use seep_grid as grid;

/// Simulation configuration tables (`seep-simconfig`).
///
/// [`simconfig::ThresholdPressure`] and its owning
/// [`simconfig::SimulationConfig`].
pub use seep_simconfig as simconfig;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    pub use seep_deck::{
        Deck, DeckError, DeckItem, DeckKeyword, DeckRecord, Dimension, Section, UnitSystem,
    };
    pub use seep_grid::{GridError, GridProperties};
    pub use seep_simconfig::{
        Barrier, RegionPair, SimulationConfig, ThpresError, ThresholdPressure,
    };
}
