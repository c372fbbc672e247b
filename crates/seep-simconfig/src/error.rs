//! Error types for simulation-configuration construction and queries.

use seep_deck::DeckError;
use std::error::Error;
use std::fmt;

/// Errors from threshold-pressure construction and value queries.
///
/// Every construction-time variant is fatal: the table is either fully
/// validated or never built. [`UnresolvedPressure`](Self::UnresolvedPressure)
/// is the one query-time variant, raised when a barrier was declared in the
/// deck without a magnitude and a caller asks for its value anyway.
#[derive(Clone, Debug, PartialEq)]
pub enum ThpresError {
    /// The deck requests the IRREVERS variant of the THPRES option,
    /// which is not implemented.
    IrreversibleOption,
    /// The EQLOPTS THPRES option is set in RUNSPEC but no THPRES keyword
    /// is present in SOLUTION.
    MissingThpresKeyword,
    /// THPRES is active but the grid has no EQLNUM property to validate
    /// region references against.
    MissingEqlnum,
    /// The EQLNUM property is present but every value is zero, so no
    /// region can be referenced.
    DegenerateEqlnum,
    /// A THPRES record omits one of its region references.
    MissingRegion {
        /// Zero-based index of the offending record.
        record: usize,
    },
    /// A THPRES record references a region id above the EQLNUM maximum.
    RegionOutOfRange {
        /// The offending region id.
        region: i32,
        /// The maximum region id observed in EQLNUM.
        max: i32,
    },
    /// A pressure value was requested for a pair whose barrier was
    /// declared without a magnitude.
    UnresolvedPressure {
        /// First region id as queried.
        region1: i32,
        /// Second region id as queried.
        region2: i32,
    },
    /// Typed access to a deck item failed while reading EQLOPTS or THPRES.
    Deck(DeckError),
}

impl fmt::Display for ThpresError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IrreversibleOption => {
                write!(f, "IRREVERS variant of the THPRES option is not implemented")
            }
            Self::MissingThpresKeyword => {
                write!(
                    f,
                    "EQLOPTS THPRES option is set in RUNSPEC, \
                     but no THPRES keyword is found in SOLUTION"
                )
            }
            Self::MissingEqlnum => {
                write!(f, "THPRES is active but no EQLNUM property is present")
            }
            Self::DegenerateEqlnum => write!(f, "all EQLNUM values are zero"),
            Self::MissingRegion { record } => {
                write!(f, "THPRES record {record} is missing a region reference")
            }
            Self::RegionOutOfRange { region, max } => {
                write!(
                    f,
                    "THPRES references region {region}, above the EQLNUM maximum {max}"
                )
            }
            Self::UnresolvedPressure { region1, region2 } => {
                write!(
                    f,
                    "the THPRES value for regions {region1} and {region2} \
                     has not been initialized"
                )
            }
            Self::Deck(e) => write!(f, "deck: {e}"),
        }
    }
}

impl Error for ThpresError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Deck(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DeckError> for ThpresError {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}
