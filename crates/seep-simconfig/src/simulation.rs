//! The owning simulation-configuration object.

use crate::error::ThpresError;
use crate::thpres::ThresholdPressure;
use seep_deck::Deck;
use seep_grid::GridProperties;

/// Simulation configuration assembled from the deck's configuration
/// keywords.
///
/// Owns the derived configuration tables for the lifetime of a simulation
/// run; downstream solve setup queries them through the accessors. Today
/// that is the threshold pressure table.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    threshold_pressure: ThresholdPressure,
}

impl SimulationConfig {
    /// Build the configuration from a parsed deck and the grid properties.
    ///
    /// Fails if any owned table fails validation; there is no partially
    /// constructed configuration.
    pub fn from_deck(deck: &Deck, grid: &GridProperties) -> Result<Self, ThpresError> {
        Ok(Self {
            threshold_pressure: ThresholdPressure::from_deck(deck, grid)?,
        })
    }

    /// The inter-region threshold pressure table.
    pub fn threshold_pressure(&self) -> &ThresholdPressure {
        &self.threshold_pressure
    }

    /// Whether the deck activated the threshold pressure feature.
    pub fn use_threshold_pressure(&self) -> bool {
        self.threshold_pressure.active()
    }
}
