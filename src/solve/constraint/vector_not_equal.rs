//! Generalized AC-3 over the not-equal relation between every pair of
//! cells sharing a row or column

use crate::collections::WorkQueue;
use crate::puzzle::{CellId, Puzzle};
use crate::solve::domain::{DomainStore, EmptyDomain};

/// Revises every row/column arc to a worklist-empty fixpoint.
/// Returns whether any domain shrank.
pub(crate) fn propagate_vectors(
    puzzle: &Puzzle,
    store: &mut DomainStore,
) -> Result<bool, EmptyDomain> {
    let mut queue: WorkQueue<(CellId, CellId)> = WorkQueue::default();
    for cell in 0..puzzle.cell_count() {
        for &neighbor in puzzle.neighbors(cell) {
            queue.insert((cell, neighbor));
        }
    }
    let mut revised_any = false;
    while let Some((xi, xj)) = queue.pop_front() {
        if !revise(store, xi, xj)? {
            continue;
        }
        revised_any = true;
        // xi shrank, so arcs pointing at it may prune further
        for &xk in puzzle.neighbors(xi) {
            if xk != xj {
                queue.insert((xk, xi));
            }
        }
    }
    Ok(revised_any)
}

/// Revises the arc (xi, xj). A candidate `x` of `xi` is removed only
/// when `xj` cannot take any value different from `x`, i.e. its domain
/// is exactly the singleton `{x}`.
fn revise(store: &mut DomainStore, xi: CellId, xj: CellId) -> Result<bool, EmptyDomain> {
    let forced = match store.domain(xj).single_value() {
        Some(value) => value,
        None => return Ok(false),
    };
    store.remove(xi, forced)
}

#[cfg(test)]
mod tests {
    use super::{propagate_vectors, revise};
    use crate::puzzle::{Given, Puzzle};
    use crate::solve::domain::DomainStore;

    fn free_puzzle(width: usize) -> Puzzle {
        Puzzle::new(width, vec![], vec![]).unwrap()
    }

    #[test]
    fn revise_prunes_only_against_a_singleton() {
        let puzzle = free_puzzle(3);
        let mut store = DomainStore::new(&puzzle);
        // D(1) = {2, 3}: cell 0 keeps all candidates
        store.remove(1, 1).unwrap();
        assert!(!revise(&mut store, 0, 1).unwrap());
        assert_eq!(3, store.domain(0).len());
        // D(1) = {3}: cell 0 must lose 3
        store.remove(1, 2).unwrap();
        assert!(revise(&mut store, 0, 1).unwrap());
        assert_eq!(vec![1, 2], store.domain(0).iter().collect::<Vec<_>>());
        // already pruned, nothing left to do
        assert!(!revise(&mut store, 0, 1).unwrap());
    }

    #[test]
    fn propagation_is_idempotent() {
        let puzzle = Puzzle::new(3, vec![], vec![Given { cell: 0, value: 1 }]).unwrap();
        let mut store = DomainStore::new(&puzzle);
        assert!(propagate_vectors(&puzzle, &mut store).unwrap());
        assert!(!propagate_vectors(&puzzle, &mut store).unwrap());
    }

    #[test]
    fn singleton_chain() {
        // forcing (0, 0) in a 2x2 grid determines every other cell
        let puzzle = Puzzle::new(2, vec![], vec![Given { cell: 0, value: 1 }]).unwrap();
        let mut store = DomainStore::new(&puzzle);
        propagate_vectors(&puzzle, &mut store).unwrap();
        assert_eq!(Some(2), store.domain(1).single_value());
        assert_eq!(Some(2), store.domain(2).single_value());
        assert_eq!(Some(1), store.domain(3).single_value());
    }

    #[test]
    fn conflicting_givens_empty_a_domain() {
        let givens = vec![Given { cell: 0, value: 1 }, Given { cell: 1, value: 1 }];
        let puzzle = Puzzle::new(2, vec![], givens).unwrap();
        let mut store = DomainStore::new(&puzzle);
        assert!(propagate_vectors(&puzzle, &mut store).is_err());
    }
}
