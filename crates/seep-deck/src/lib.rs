//! Typed keyword/record/item model for reservoir simulation input decks.
//!
//! This crate defines the post-tokenization shape of an input deck: an
//! ordered stream of [`DeckKeyword`]s, each holding [`DeckRecord`]s of
//! named [`DeckItem`]s, with [`Section`] views recovering the RUNSPEC /
//! SOLUTION / ... structure from the delimiter keywords.
//!
//! Raw deck text never enters this crate — a tokenizer produces these
//! types, and configuration components consume them. Items distinguish
//! "value present" from "slot defaulted" via [`DeckItem::has_value`], and
//! dimensioned values convert to SI through the deck's [`UnitSystem`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deck;
pub mod error;
pub mod item;
pub mod record;
pub mod section;

pub use deck::Deck;
pub use error::DeckError;
pub use item::{DeckItem, Dimension, ItemValue, UnitSystem};
pub use record::{DeckKeyword, DeckRecord};
pub use section::{is_section_delimiter, Section, SECTION_DELIMITERS};
