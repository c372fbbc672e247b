//! Benchmark fixtures for the Seep configuration crates.
//!
//! Provides deterministic deck/grid builders shared by the criterion
//! benches: a THPRES deck with a configurable number of barrier records
//! and an EQLNUM grid with a configurable cell count.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_deck::{Deck, DeckItem, DeckKeyword, DeckRecord, Dimension, UnitSystem};
use seep_grid::GridProperties;

/// Number of distinct regions used by the benchmark fixtures.
pub const REGION_COUNT: i32 = 32;

/// A metric deck with the THPRES option enabled and `records` barrier
/// records over [`REGION_COUNT`] regions. Every fourth record leaves its
/// pressure defaulted.
pub fn thpres_deck(records: usize) -> Deck {
    let mut barrier_records = Vec::with_capacity(records);
    for i in 0..records {
        let r1 = (i as i32 % REGION_COUNT) + 1;
        let r2 = ((i as i32 + 7) % REGION_COUNT) + 1;
        let value = if i % 4 == 3 {
            DeckItem::defaulted("VALUE", Dimension::Pressure)
        } else {
            DeckItem::double("VALUE", Dimension::Pressure, 0.5 + i as f64)
        };
        barrier_records.push(DeckRecord::new(vec![
            DeckItem::int("REGION1", r1),
            DeckItem::int("REGION2", r2),
            value,
        ]));
    }

    Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(DeckKeyword::new(
            "EQLOPTS",
            vec![DeckRecord::new(vec![DeckItem::str("OPTION1", "THPRES")])],
        ))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(DeckKeyword::new("THPRES", barrier_records))
}

/// An EQLNUM grid with `cells` cells cycling through [`REGION_COUNT`]
/// regions, so the maximum region id is always `REGION_COUNT`.
pub fn eqlnum_grid(cells: usize) -> GridProperties {
    let mut grid = GridProperties::new(cells).expect("benchmark grid has cells");
    let values: Vec<i32> = (0..cells).map(|i| (i as i32 % REGION_COUNT) + 1).collect();
    grid.insert_int("EQLNUM", values).expect("fresh grid accepts EQLNUM");
    grid
}
