//! Threshold pressure barriers between equilibration regions.
//!
//! The THPRES feature is activated by two cooperating deck entries: the
//! `THPRES` flag inside the RUNSPEC `EQLOPTS` keyword, and the `THPRES`
//! data keyword in SOLUTION listing region pairs with optional pressure
//! magnitudes. Region references are bounded by the maximum value of the
//! grid's EQLNUM classification array.
//!
//! Construction is an ordered validation pipeline; each misconfiguration
//! fails with its own [`ThpresError`] variant so callers (and tests) can
//! tell the failure modes apart.

use crate::error::ThpresError;
use indexmap::IndexMap;
use seep_deck::{Deck, Section};
use seep_grid::GridProperties;
use std::fmt;

/// RUNSPEC keyword carrying equilibration option flags.
const EQLOPTS: &str = "EQLOPTS";
/// SOLUTION keyword carrying barrier records.
const THPRES: &str = "THPRES";
/// Grid property holding per-cell equilibration region ids.
const EQLNUM: &str = "EQLNUM";
/// EQLOPTS token enabling the threshold pressure feature.
const THPRES_OPTION: &str = "THPRES";
/// EQLOPTS token for the unimplemented irreversible variant.
const IRREVERS_OPTION: &str = "IRREVERS";

/// Item names within a THPRES record.
const REGION1: &str = "REGION1";
const REGION2: &str = "REGION2";
const VALUE: &str = "VALUE";

/// An unordered pair of region ids, canonicalized on construction.
///
/// The smaller id is always stored first, so `(a, b)` and `(b, a)`
/// compare and hash identically. All insertion and lookup paths go
/// through [`RegionPair::new`], which is what keeps the table's
/// symmetry invariant structural rather than conventional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionPair {
    low: i32,
    high: i32,
}

impl RegionPair {
    /// Canonicalize two region ids into an unordered pair.
    pub fn new(r1: i32, r2: i32) -> Self {
        if r1 <= r2 {
            Self { low: r1, high: r2 }
        } else {
            Self { low: r2, high: r1 }
        }
    }

    /// The smaller region id.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// The larger region id.
    pub fn high(&self) -> i32 {
        self.high
    }
}

impl fmt::Display for RegionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// The state of one declared barrier.
///
/// A barrier record may default its pressure magnitude, deferring the
/// value to a later source. That state is distinct from "no barrier":
/// it answers `has_region_barrier` but not `has_threshold_pressure`,
/// and reading its value is an error rather than a silent zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Barrier {
    /// Barrier declared, magnitude never supplied.
    Unvalued,
    /// Barrier with a known pressure, in pascals.
    Pressure(f64),
}

/// Symmetric lookup table of inter-region threshold pressure barriers.
///
/// Built once from the deck and grid by [`ThresholdPressure::from_deck`],
/// then queried read-only. Decks that do not use the feature produce an
/// empty, inactive table through the same constructor without error.
#[derive(Clone, Debug, Default)]
pub struct ThresholdPressure {
    active: bool,
    table: IndexMap<RegionPair, Barrier>,
}

impl ThresholdPressure {
    /// Build and validate the table from the deck's RUNSPEC/SOLUTION
    /// sections and the grid's EQLNUM property.
    ///
    /// The non-error inactive paths: either section absent, or the
    /// EQLOPTS THPRES option unset with no THPRES keyword. Everything
    /// else either activates the feature or fails with a
    /// [`ThpresError`] naming the misconfiguration.
    pub fn from_deck(deck: &Deck, grid: &GridProperties) -> Result<Self, ThpresError> {
        let (runspec, solution) = match (Section::runspec(deck), Section::solution(deck)) {
            (Some(r), Some(s)) => (r, s),
            _ => return Ok(Self::default()),
        };

        // 1. Is the THPRES option set in EQLOPTS?
        let mut option_enabled = false;
        if let Some(eqlopts) = runspec.keyword(EQLOPTS) {
            if let Some(record) = eqlopts.record(0) {
                for item in record.iter() {
                    if !item.has_value(0) {
                        continue;
                    }
                    let option = item.get_string(0)?;
                    if option == IRREVERS_OPTION {
                        return Err(ThpresError::IrreversibleOption);
                    }
                    if option == THPRES_OPTION {
                        option_enabled = true;
                    }
                    // Unrecognized equilibration options are ignored.
                }
            }
        }

        // 2. Option state must agree with the SOLUTION keyword.
        let keyword = match (option_enabled, solution.keyword(THPRES)) {
            (true, Some(keyword)) => keyword,
            (true, None) => return Err(ThpresError::MissingThpresKeyword),
            (false, _) => return Ok(Self::default()),
        };

        // 3. Region references are bounded by the EQLNUM maximum.
        let eqlnum = grid
            .int_property(EQLNUM)
            .ok_or(ThpresError::MissingEqlnum)?;
        let max_region = eqlnum.iter().copied().max().unwrap_or(0);
        if max_region == 0 {
            return Err(ThpresError::DegenerateEqlnum);
        }

        // 4. Ingest barrier records; later records for a pair win.
        let mut table = IndexMap::new();
        for (index, record) in keyword.iter().enumerate() {
            let region1 = record.item(REGION1)?;
            let region2 = record.item(REGION2)?;
            let value = record.item(VALUE)?;

            if !region1.has_value(0) || !region2.has_value(0) {
                return Err(ThpresError::MissingRegion { record: index });
            }
            let r1 = region1.get_int(0)?;
            let r2 = region2.get_int(0)?;
            for region in [r1, r2] {
                if region > max_region {
                    return Err(ThpresError::RegionOutOfRange {
                        region,
                        max: max_region,
                    });
                }
            }

            let barrier = if value.has_value(0) {
                Barrier::Pressure(value.get_si_double(0, deck.unit_system())?)
            } else {
                Barrier::Unvalued
            };
            table.insert(RegionPair::new(r1, r2), barrier);
        }

        Ok(Self {
            active: true,
            table,
        })
    }

    /// Whether the threshold pressure feature was activated by the deck.
    ///
    /// Distinguishes "feature on with zero barriers" from "feature off";
    /// both have an empty table.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether a barrier (valued or not) exists between two regions.
    pub fn has_region_barrier(&self, r1: i32, r2: i32) -> bool {
        self.table.contains_key(&RegionPair::new(r1, r2))
    }

    /// Whether a barrier with a known pressure exists between two regions.
    pub fn has_threshold_pressure(&self, r1: i32, r2: i32) -> bool {
        matches!(
            self.table.get(&RegionPair::new(r1, r2)),
            Some(Barrier::Pressure(_))
        )
    }

    /// The threshold pressure between two regions, in pascals.
    ///
    /// No barrier configured means no pressure differential required:
    /// `Ok(0.0)`. A barrier declared without a magnitude is a
    /// configuration defect, reported as
    /// [`ThpresError::UnresolvedPressure`] with the queried region ids.
    pub fn threshold_pressure(&self, r1: i32, r2: i32) -> Result<f64, ThpresError> {
        match self.table.get(&RegionPair::new(r1, r2)) {
            None => Ok(0.0),
            Some(Barrier::Pressure(pressure)) => Ok(*pressure),
            Some(Barrier::Unvalued) => Err(ThpresError::UnresolvedPressure {
                region1: r1,
                region2: r2,
            }),
        }
    }

    /// Number of distinct canonical region pairs with a barrier.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no barriers are configured.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
