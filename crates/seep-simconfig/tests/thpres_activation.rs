//! Activation and failure paths for threshold pressure construction.
//!
//! Each test drives `ThresholdPressure::from_deck` through one of the
//! configuration states a real deck can be in: feature unused, feature
//! consistently enabled, and every flavor of misconfiguration.

use seep_deck::{Deck, DeckItem, DeckKeyword, DeckRecord, Dimension, UnitSystem};
use seep_grid::GridProperties;
use seep_simconfig::{SimulationConfig, ThpresError, ThresholdPressure};

fn eqlopts(options: &[&str]) -> DeckKeyword {
    let items = options
        .iter()
        .enumerate()
        .map(|(i, opt)| DeckItem::str(format!("OPTION{}", i + 1), *opt))
        .collect();
    DeckKeyword::new("EQLOPTS", vec![DeckRecord::new(items)])
}

fn thpres_keyword(records: Vec<DeckRecord>) -> DeckKeyword {
    DeckKeyword::new("THPRES", records)
}

fn barrier(r1: i32, r2: i32, pressure: Option<f64>) -> DeckRecord {
    let value = match pressure {
        Some(p) => DeckItem::double("VALUE", Dimension::Pressure, p),
        None => DeckItem::defaulted("VALUE", Dimension::Pressure),
    };
    DeckRecord::new(vec![
        DeckItem::int("REGION1", r1),
        DeckItem::int("REGION2", r2),
        value,
    ])
}

fn grid(eqlnum: Vec<i32>) -> GridProperties {
    let mut grid = GridProperties::new(eqlnum.len()).unwrap();
    grid.insert_int("EQLNUM", eqlnum).unwrap();
    grid
}

#[test]
fn deck_without_runspec_is_inactive() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(vec![barrier(1, 2, Some(1.0))]));
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(!table.active());
    assert_eq!(table.len(), 0);
    assert!(!table.has_region_barrier(1, 2));
    assert_eq!(table.threshold_pressure(1, 2), Ok(0.0));
}

#[test]
fn deck_without_solution_is_inactive() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(eqlopts(&["THPRES"]));
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(!table.active());
    assert_eq!(table.len(), 0);
}

#[test]
fn keyword_without_option_is_inactive() {
    // THPRES data in SOLUTION but the EQLOPTS option unset: the feature
    // stays off and the records are not ingested.
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(vec![barrier(1, 2, Some(1.0))]));
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(!table.active());
    assert!(table.is_empty());
}

#[test]
fn irrevers_option_is_rejected() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(eqlopts(&["IRREVERS"]))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(vec![barrier(1, 2, Some(1.0))]));
    match ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])) {
        Err(ThpresError::IrreversibleOption) => {}
        other => panic!("expected IrreversibleOption, got {other:?}"),
    }
}

#[test]
fn unrecognized_options_are_ignored() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(eqlopts(&["MOBILE", "QUIESC", "THPRES"]))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(vec![barrier(1, 2, Some(1.0))]));
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(table.active());
    assert_eq!(table.len(), 1);
}

#[test]
fn defaulted_option_slots_are_skipped() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(DeckKeyword::new(
            "EQLOPTS",
            vec![DeckRecord::new(vec![
                DeckItem::defaulted("OPTION1", Dimension::Dimensionless),
                DeckItem::str("OPTION2", "THPRES"),
            ])],
        ))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(vec![barrier(1, 2, None)]));
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(table.active());
}

#[test]
fn option_without_keyword_is_inconsistent() {
    let deck = Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(eqlopts(&["THPRES"]))
        .with(DeckKeyword::bare("SOLUTION"));
    match ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])) {
        Err(ThpresError::MissingThpresKeyword) => {}
        other => panic!("expected MissingThpresKeyword, got {other:?}"),
    }
}

fn active_deck(records: Vec<DeckRecord>) -> Deck {
    Deck::new(UnitSystem::Metric)
        .with(DeckKeyword::bare("RUNSPEC"))
        .with(eqlopts(&["THPRES"]))
        .with(DeckKeyword::bare("SOLUTION"))
        .with(thpres_keyword(records))
}

#[test]
fn missing_eqlnum_property_fails() {
    let deck = active_deck(vec![barrier(1, 2, Some(1.0))]);
    let empty_grid = GridProperties::new(2).unwrap();
    match ThresholdPressure::from_deck(&deck, &empty_grid) {
        Err(ThpresError::MissingEqlnum) => {}
        other => panic!("expected MissingEqlnum, got {other:?}"),
    }
}

#[test]
fn all_zero_eqlnum_fails() {
    let deck = active_deck(vec![barrier(1, 2, Some(1.0))]);
    match ThresholdPressure::from_deck(&deck, &grid(vec![0, 0, 0])) {
        Err(ThpresError::DegenerateEqlnum) => {}
        other => panic!("expected DegenerateEqlnum, got {other:?}"),
    }
}

#[test]
fn region_reference_above_maximum_fails() {
    // EQLNUM maximum is 3; a record referencing region 4 must fail.
    let deck = active_deck(vec![barrier(2, 4, Some(1.0))]);
    match ThresholdPressure::from_deck(&deck, &grid(vec![1, 2, 3])) {
        Err(ThpresError::RegionOutOfRange { region: 4, max: 3 }) => {}
        other => panic!("expected RegionOutOfRange, got {other:?}"),
    }
}

#[test]
fn valued_barrier_round_trips_through_queries() {
    let deck = active_deck(vec![barrier(2, 5, Some(1.0))]);
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 3, 5])).unwrap();
    assert!(table.has_region_barrier(5, 2));
    assert!(table.has_region_barrier(2, 5));
    assert!(table.has_threshold_pressure(2, 5));
    // 1.0 barsa stored as 1.0e5 Pa, returned exactly.
    assert_eq!(table.threshold_pressure(5, 2), Ok(1.0e5));
    assert_eq!(table.len(), 1);
}

#[test]
fn unvalued_barrier_is_present_but_unreadable() {
    let deck = active_deck(vec![barrier(1, 2, None)]);
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(table.has_region_barrier(1, 2));
    assert!(!table.has_threshold_pressure(1, 2));
    match table.threshold_pressure(2, 1) {
        Err(ThpresError::UnresolvedPressure {
            region1: 2,
            region2: 1,
        }) => {}
        other => panic!("expected UnresolvedPressure, got {other:?}"),
    }
}

#[test]
fn active_table_with_zero_records_is_empty_but_active() {
    let deck = active_deck(vec![]);
    let table = ThresholdPressure::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(table.active());
    assert!(table.is_empty());
    assert_eq!(table.threshold_pressure(1, 2), Ok(0.0));
}

#[test]
fn simulation_config_owns_the_table() {
    let deck = active_deck(vec![barrier(1, 2, Some(2.5))]);
    let config = SimulationConfig::from_deck(&deck, &grid(vec![1, 2])).unwrap();
    assert!(config.use_threshold_pressure());
    assert_eq!(config.threshold_pressure().threshold_pressure(2, 1), Ok(2.5e5));
}

#[test]
fn simulation_config_propagates_construction_failure() {
    let deck = active_deck(vec![barrier(1, 9, Some(1.0))]);
    match SimulationConfig::from_deck(&deck, &grid(vec![1, 2])) {
        Err(ThpresError::RegionOutOfRange { region: 9, max: 2 }) => {}
        other => panic!("expected RegionOutOfRange, got {other:?}"),
    }
}
