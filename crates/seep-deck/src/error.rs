//! Error types for typed deck access.

use std::error::Error;
use std::fmt;

/// Errors from typed access to deck records and items.
///
/// Every accessor on [`DeckRecord`](crate::DeckRecord) and
/// [`DeckItem`](crate::DeckItem) reports failure through this enum; none
/// of them panic on bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// The record has no item with the requested name.
    NoSuchItem {
        /// The requested item name.
        item: String,
    },
    /// The item has no value at the requested position.
    ///
    /// Defaulted and omitted slots are indistinguishable at this level;
    /// both report "no value". Callers that need to branch on presence
    /// use [`DeckItem::has_value`](crate::DeckItem::has_value) first.
    NoSuchValue {
        /// Name of the item that was probed.
        item: String,
        /// The value position that was requested.
        index: usize,
    },
    /// The stored value's type does not match the accessor used.
    TypeMismatch {
        /// Name of the item that was probed.
        item: String,
        /// Type name the accessor expected.
        expected: &'static str,
        /// Type name of the value actually stored.
        found: &'static str,
    },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchItem { item } => write!(f, "record has no item named '{item}'"),
            Self::NoSuchValue { item, index } => {
                write!(f, "item '{item}' has no value at position {index}")
            }
            Self::TypeMismatch {
                item,
                expected,
                found,
            } => {
                write!(f, "item '{item}' holds a {found} value, expected {expected}")
            }
        }
    }
}

impl Error for DeckError {}
