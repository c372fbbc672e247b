//! Named per-cell integer property storage.

use crate::error::GridError;
use indexmap::IndexMap;

/// Per-cell grid properties keyed by name.
///
/// Holds the region-classification arrays (EQLNUM and friends) that
/// configuration components validate against. Every property carries
/// exactly one `i32` per grid cell; the length is checked at insertion
/// so downstream consumers can scan values without re-validating.
#[derive(Clone, Debug)]
pub struct GridProperties {
    cell_count: usize,
    int_properties: IndexMap<String, Vec<i32>>,
}

impl GridProperties {
    /// A property store for a grid with the given cell count.
    pub fn new(cell_count: usize) -> Result<Self, GridError> {
        if cell_count == 0 {
            return Err(GridError::ZeroCells);
        }
        Ok(Self {
            cell_count,
            int_properties: IndexMap::new(),
        })
    }

    /// Register a per-cell integer property.
    ///
    /// Rejects value arrays whose length differs from the grid's cell
    /// count, and duplicate names (`IndexMap::insert` overwrites silently).
    pub fn insert_int(
        &mut self,
        name: impl Into<String>,
        values: Vec<i32>,
    ) -> Result<(), GridError> {
        let name = name.into();
        if values.len() != self.cell_count {
            return Err(GridError::CellCountMismatch {
                property: name,
                expected: self.cell_count,
                got: values.len(),
            });
        }
        if self.int_properties.contains_key(&name) {
            return Err(GridError::DuplicateProperty { property: name });
        }
        self.int_properties.insert(name, values);
        Ok(())
    }

    /// Whether an integer property with the given name is registered.
    pub fn has_int_property(&self, name: &str) -> bool {
        self.int_properties.contains_key(name)
    }

    /// The per-cell values of the named property, if registered.
    pub fn int_property(&self, name: &str) -> Option<&[i32]> {
        self.int_properties.get(name).map(Vec::as_slice)
    }

    /// The grid's cell count.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let mut grid = GridProperties::new(4).unwrap();
        grid.insert_int("EQLNUM", vec![1, 1, 2, 2]).unwrap();
        assert!(grid.has_int_property("EQLNUM"));
        assert_eq!(grid.int_property("EQLNUM"), Some(&[1, 1, 2, 2][..]));
        assert!(!grid.has_int_property("FIPNUM"));
        assert_eq!(grid.int_property("FIPNUM"), None);
    }

    #[test]
    fn zero_cell_grid_rejected() {
        match GridProperties::new(0) {
            Err(GridError::ZeroCells) => {}
            other => panic!("expected ZeroCells, got {other:?}"),
        }
    }

    #[test]
    fn cell_count_mismatch_rejected() {
        let mut grid = GridProperties::new(4).unwrap();
        match grid.insert_int("EQLNUM", vec![1, 2]) {
            Err(GridError::CellCountMismatch {
                expected: 4,
                got: 2,
                ..
            }) => {}
            other => panic!("expected CellCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_property_rejected() {
        let mut grid = GridProperties::new(2).unwrap();
        grid.insert_int("EQLNUM", vec![1, 2]).unwrap();
        match grid.insert_int("EQLNUM", vec![2, 1]) {
            Err(GridError::DuplicateProperty { property }) => assert_eq!(property, "EQLNUM"),
            other => panic!("expected DuplicateProperty, got {other:?}"),
        }
        // Original values untouched.
        assert_eq!(grid.int_property("EQLNUM"), Some(&[1, 2][..]));
    }
}
