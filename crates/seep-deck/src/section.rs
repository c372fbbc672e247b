//! Section views over the deck's delimiter keywords.

use crate::deck::Deck;
use crate::record::DeckKeyword;

/// The eight section delimiter keywords, in the order the grammar
/// requires them to appear.
pub const SECTION_DELIMITERS: [&str; 8] = [
    "RUNSPEC", "GRID", "EDIT", "PROPS", "REGIONS", "SOLUTION", "SUMMARY", "SCHEDULE",
];

/// Whether a keyword name is a section delimiter.
pub fn is_section_delimiter(name: &str) -> bool {
    SECTION_DELIMITERS.contains(&name)
}

/// A borrowed view of one section of a deck: the keywords between a
/// delimiter keyword and the next delimiter (or the end of the deck).
///
/// The delimiter keyword itself is not part of the view.
#[derive(Clone, Copy, Debug)]
pub struct Section<'a> {
    name: &'a str,
    keywords: &'a [DeckKeyword],
}

impl<'a> Section<'a> {
    /// The named section of the deck, or `None` if its delimiter keyword
    /// is absent.
    pub fn of(deck: &'a Deck, name: &str) -> Option<Section<'a>> {
        let all = deck.keywords();
        let start = all.iter().position(|kw| kw.name() == name)?;
        let body = &all[start + 1..];
        let end = body
            .iter()
            .position(|kw| is_section_delimiter(kw.name()))
            .unwrap_or(body.len());
        Some(Section {
            name: all[start].name(),
            keywords: &body[..end],
        })
    }

    /// The RUNSPEC section, if present.
    pub fn runspec(deck: &'a Deck) -> Option<Section<'a>> {
        Self::of(deck, "RUNSPEC")
    }

    /// The SOLUTION section, if present.
    pub fn solution(deck: &'a Deck) -> Option<Section<'a>> {
        Self::of(deck, "SOLUTION")
    }

    /// The section's delimiter name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether the section contains the named keyword.
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|kw| kw.name() == name)
    }

    /// The first occurrence of the named keyword within the section.
    pub fn keyword(&self, name: &str) -> Option<&'a DeckKeyword> {
        self.keywords.iter().find(|kw| kw.name() == name)
    }

    /// Iterate the section's keywords in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &'a DeckKeyword> {
        self.keywords.iter()
    }

    /// Number of keywords in the section.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the section contains no keywords.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
