//! Per-cell candidate domains and the partially filled grid

use thiserror::Error;

use crate::collections::Square;
use crate::puzzle::{CellId, Puzzle, Value};

use super::ValueSet;

/// A terminal contradiction signal: a cell was pruned to no candidates,
/// so the puzzle has no solution
#[derive(Debug, Error)]
#[error("cell {0} has no remaining candidates")]
pub(crate) struct EmptyDomain(pub CellId);

/// Owns every cell's candidate set and the partially filled grid.
///
/// Domains only shrink after initialization. A grid value of `0` means
/// the cell is unassigned.
pub(crate) struct DomainStore {
    domains: Square<ValueSet>,
    grid: Square<Value>,
}

impl DomainStore {
    /// Initializes every domain to `1..=width`, then applies the givens
    /// directly, bypassing propagation
    pub fn new(puzzle: &Puzzle) -> Self {
        let width = puzzle.width();
        let mut store = Self {
            domains: Square::with_width_and_value(width, ValueSet::with_all(width)),
            grid: Square::with_width_and_value(width, 0),
        };
        for given in puzzle.givens() {
            store.domains[given.cell] = ValueSet::single(width, given.value);
            store.grid[given.cell] = given.value;
        }
        store
    }

    pub fn domain(&self, cell: CellId) -> &ValueSet {
        &self.domains[cell]
    }

    /// Removes a candidate, failing if the cell's domain becomes empty.
    /// Returns false if the value was not a candidate.
    pub fn remove(&mut self, cell: CellId, value: Value) -> Result<bool, EmptyDomain> {
        let domain = &mut self.domains[cell];
        if !domain.remove(value) {
            return Ok(false);
        }
        if domain.is_empty() {
            return Err(EmptyDomain(cell));
        }
        Ok(true)
    }

    /// Writes every singleton domain's value into the grid. Idempotent.
    pub fn collapse_singletons(&mut self) {
        for cell in 0..self.grid.len() {
            if let Some(value) = self.domains[cell].single_value() {
                self.grid[cell] = value;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.grid.iter().all(|&value| value != 0)
    }

    pub fn grid(&self) -> &Square<Value> {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainStore, EmptyDomain};
    use crate::puzzle::{Given, Puzzle};

    fn store(width: usize, givens: Vec<Given>) -> DomainStore {
        DomainStore::new(&Puzzle::new(width, vec![], givens).unwrap())
    }

    #[test]
    fn init_full_domains() {
        let store = store(4, vec![]);
        for cell in 0..16 {
            assert_eq!(
                vec![1, 2, 3, 4],
                store.domain(cell).iter().collect::<Vec<_>>()
            );
            assert_eq!(0, store.grid()[cell]);
        }
    }

    #[test]
    fn givens_applied_at_init() {
        let store = store(3, vec![Given { cell: 4, value: 2 }]);
        assert_eq!(2, store.grid()[4]);
        assert_eq!(Some(2), store.domain(4).single_value());
    }

    #[test]
    fn remove_to_empty_is_an_error() {
        let mut store = store(2, vec![]);
        assert!(store.remove(0, 1).unwrap());
        assert!(!store.remove(0, 1).unwrap());
        assert!(matches!(store.remove(0, 2), Err(EmptyDomain(0))));
    }

    #[test]
    fn collapse_singletons_idempotent() {
        let mut store = store(2, vec![]);
        store.remove(3, 1).unwrap();
        store.collapse_singletons();
        assert_eq!(2, store.grid()[3]);
        assert_eq!(0, store.grid()[0]);
        store.collapse_singletons();
        assert_eq!(2, store.grid()[3]);
    }
}
