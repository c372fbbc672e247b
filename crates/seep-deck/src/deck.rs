//! The deck: an ordered keyword stream with a unit system.

use crate::item::UnitSystem;
use crate::record::DeckKeyword;

/// A parsed input deck: keywords in file order plus the unit convention
/// the deck's dimensioned values are written in.
///
/// The deck is a flat stream; section structure is recovered by
/// [`Section`](crate::Section) views over the delimiter keywords.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    keywords: Vec<DeckKeyword>,
    unit_system: UnitSystem,
}

impl Deck {
    /// An empty deck under the given unit convention.
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            keywords: Vec::new(),
            unit_system,
        }
    }

    /// Append a keyword to the stream.
    pub fn push(&mut self, keyword: DeckKeyword) {
        self.keywords.push(keyword);
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, keyword: DeckKeyword) -> Self {
        self.push(keyword);
        self
    }

    /// Whether any keyword with the given name occurs in the deck.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|kw| kw.name() == name)
    }

    /// The first occurrence of the named keyword, if any.
    pub fn keyword(&self, name: &str) -> Option<&DeckKeyword> {
        self.keywords.iter().find(|kw| kw.name() == name)
    }

    /// Iterate all keywords in file order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckKeyword> {
        self.keywords.iter()
    }

    /// All keywords as a slice, in file order.
    pub fn keywords(&self) -> &[DeckKeyword] {
        &self.keywords
    }

    /// The deck's unit convention.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Number of keywords in the stream.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the deck has no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_finds_first_occurrence() {
        let deck = Deck::new(UnitSystem::Metric)
            .with(DeckKeyword::bare("RUNSPEC"))
            .with(DeckKeyword::bare("SOLUTION"));
        assert!(deck.has_keyword("RUNSPEC"));
        assert!(!deck.has_keyword("THPRES"));
        assert_eq!(deck.keyword("SOLUTION").map(DeckKeyword::name), Some("SOLUTION"));
    }
}
