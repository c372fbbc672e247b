//! Deck item values, physical dimensions, and unit systems.

use crate::error::DeckError;
use smallvec::SmallVec;
use std::fmt;

/// A single scalar value stored in a deck item.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemValue {
    /// An integer value (region ids, counts, table indices).
    Int(i32),
    /// A floating-point value in deck units.
    Double(f64),
    /// A string token (keywords inside records, option flags, well names).
    Str(String),
}

impl ItemValue {
    /// Type name used in [`DeckError::TypeMismatch`] diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
        }
    }
}

/// Physical dimension tag attached to a deck item.
///
/// Determines the deck-unit to SI conversion factor applied by
/// [`DeckItem::get_si_double`]. Only the dimensions needed by the
/// simulation-configuration keywords are listed; dimensionless is the
/// default for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// No conversion; the deck value is used as-is.
    Dimensionless,
    /// Pressure: barsa (metric decks) or psia (field decks), converted to Pa.
    Pressure,
}

/// The unit convention a deck was written in.
///
/// Decks declare their unit system in the RUNSPEC section; all dimensioned
/// values in the deck are interpreted under that convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitSystem {
    /// Metric convention: pressure in barsa.
    Metric,
    /// Field convention: pressure in psia.
    Field,
}

/// Pascals per barsa.
const PA_PER_BARSA: f64 = 1.0e5;
/// Pascals per psia.
const PA_PER_PSIA: f64 = 6894.75729;

impl UnitSystem {
    /// Multiplicative factor converting a deck value of the given
    /// dimension to SI.
    pub fn si_factor(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Dimensionless => 1.0,
            Dimension::Pressure => match self {
                Self::Metric => PA_PER_BARSA,
                Self::Field => PA_PER_PSIA,
            },
        }
    }

    /// Convert a deck value of the given dimension to SI.
    pub fn to_si(&self, dimension: Dimension, value: f64) -> f64 {
        value * self.si_factor(dimension)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "METRIC"),
            Self::Field => write!(f, "FIELD"),
        }
    }
}

/// A named item within a deck record.
///
/// An item holds zero or more values of one scalar type. A defaulted slot
/// is modeled as an absent value: `has_value` returns false and the typed
/// accessors return [`DeckError::NoSuchValue`]. Most items carry at most
/// one value, so storage is inline.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckItem {
    name: String,
    dimension: Dimension,
    values: SmallVec<[ItemValue; 1]>,
}

impl DeckItem {
    /// An item holding a single integer value.
    pub fn int(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            dimension: Dimension::Dimensionless,
            values: smallvec::smallvec![ItemValue::Int(value)],
        }
    }

    /// An item holding a single dimensioned floating-point value
    /// (in deck units).
    pub fn double(name: impl Into<String>, dimension: Dimension, value: f64) -> Self {
        Self {
            name: name.into(),
            dimension,
            values: smallvec::smallvec![ItemValue::Double(value)],
        }
    }

    /// An item holding a single string token.
    pub fn str(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: Dimension::Dimensionless,
            values: smallvec::smallvec![ItemValue::Str(value.into())],
        }
    }

    /// An item that was present in the deck but left defaulted: it has a
    /// name and a dimension but no value at any position.
    pub fn defaulted(name: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            name: name.into(),
            dimension,
            values: SmallVec::new(),
        }
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's physical dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Whether a value is present at the given position.
    ///
    /// False for defaulted slots and positions past the end.
    pub fn has_value(&self, index: usize) -> bool {
        index < self.values.len()
    }

    fn value(&self, index: usize) -> Result<&ItemValue, DeckError> {
        self.values.get(index).ok_or_else(|| DeckError::NoSuchValue {
            item: self.name.clone(),
            index,
        })
    }

    fn mismatch(&self, expected: &'static str, found: &ItemValue) -> DeckError {
        DeckError::TypeMismatch {
            item: self.name.clone(),
            expected,
            found: found.type_name(),
        }
    }

    /// The integer value at the given position.
    pub fn get_int(&self, index: usize) -> Result<i32, DeckError> {
        match self.value(index)? {
            ItemValue::Int(v) => Ok(*v),
            other => Err(self.mismatch("int", other)),
        }
    }

    /// The floating-point value at the given position, in deck units.
    pub fn get_double(&self, index: usize) -> Result<f64, DeckError> {
        match self.value(index)? {
            ItemValue::Double(v) => Ok(*v),
            other => Err(self.mismatch("double", other)),
        }
    }

    /// The string value at the given position.
    pub fn get_string(&self, index: usize) -> Result<&str, DeckError> {
        match self.value(index)? {
            ItemValue::Str(v) => Ok(v),
            other => Err(self.mismatch("string", other)),
        }
    }

    /// The floating-point value at the given position, converted from deck
    /// units to SI under the given unit system.
    pub fn get_si_double(&self, index: usize, units: UnitSystem) -> Result<f64, DeckError> {
        Ok(units.to_si(self.dimension, self.get_double(index)?))
    }
}
