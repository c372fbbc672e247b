//! Simulation configuration built from deck keywords.
//!
//! The central component is [`ThresholdPressure`]: a symmetric lookup
//! table of inter-region pressure barriers, extracted from the deck's
//! EQLOPTS/THPRES keywords and validated against the grid's EQLNUM
//! region classification. [`SimulationConfig`] is the owning context
//! the rest of a simulation pipeline holds on to.
//!
//! Construction either completes fully validated or fails with a
//! [`ThpresError`] naming the misconfiguration; decks that do not use
//! the feature build an empty, inactive table without error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod simulation;
pub mod thpres;

pub use error::ThpresError;
pub use simulation::SimulationConfig;
pub use thpres::{Barrier, RegionPair, ThresholdPressure};
