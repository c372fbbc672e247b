//! Deck records and keywords.

use crate::error::DeckError;
use crate::item::DeckItem;

/// One record of a deck keyword: an ordered collection of named items.
///
/// Items are looked up by name (the grammar assigns each position a name)
/// or iterated in deck order.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckRecord {
    items: Vec<DeckItem>,
}

impl DeckRecord {
    /// Build a record from its items, in deck order.
    pub fn new(items: Vec<DeckItem>) -> Self {
        Self { items }
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Result<&DeckItem, DeckError> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .ok_or_else(|| DeckError::NoSuchItem {
                item: name.to_string(),
            })
    }

    /// The item at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&DeckItem> {
        self.items.get(index)
    }

    /// Iterate the items in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckItem> {
        self.items.iter()
    }

    /// Number of items in the record.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the record has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A deck keyword: a name plus zero or more records.
///
/// Section delimiters (RUNSPEC, SOLUTION, ...) are ordinary keywords with
/// no records; data keywords like THPRES carry one record per input line.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckKeyword {
    name: String,
    records: Vec<DeckRecord>,
}

impl DeckKeyword {
    /// A keyword with no records (section delimiters, bare flags).
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// A keyword with the given records.
    pub fn new(name: impl Into<String>, records: Vec<DeckRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// The keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record at the given position, if any.
    pub fn record(&self, index: usize) -> Option<&DeckRecord> {
        self.records.get(index)
    }

    /// Iterate the records in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the keyword has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
