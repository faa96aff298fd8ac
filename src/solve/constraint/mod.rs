//! Constraint propagation

pub(crate) use self::cage_target::{propagate_cages, reduce};
pub(crate) use self::vector_not_equal::propagate_vectors;

mod cage_target;
mod vector_not_equal;

use crate::puzzle::{Puzzle, Solution};
use crate::solve::domain::{DomainStore, EmptyDomain};

pub(crate) enum PropagateResult {
    /// Propagation completed the grid
    Solved(Solution),
    /// A fixpoint was reached short of a full solution
    Unsolved,
    /// A domain was emptied, the puzzle has no solution
    Invalid,
}

/// Alternates row/column and cage passes, collapsing singleton domains
/// into the grid between rounds, until the grid completes, a domain
/// empties, or neither pass changes anything
pub(crate) fn propagate(puzzle: &Puzzle, store: &mut DomainStore) -> PropagateResult {
    let mut rounds = 0;
    loop {
        rounds += 1;
        store.collapse_singletons();
        if store.is_complete() {
            debug!("Propagation completed the grid (round {})", rounds);
            return PropagateResult::Solved(store.grid().clone());
        }
        match propagate_round(puzzle, store) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Propagation reached a fixpoint after {} rounds", rounds);
                return PropagateResult::Unsolved;
            }
            Err(empty) => {
                debug!("{} at {:?}", empty, puzzle.coord(empty.0));
                return PropagateResult::Invalid;
            }
        }
    }
}

fn propagate_round(puzzle: &Puzzle, store: &mut DomainStore) -> Result<bool, EmptyDomain> {
    let vectors = propagate_vectors(puzzle, store)?;
    let cages = propagate_cages(puzzle, store)?;
    Ok(vectors || cages)
}

#[cfg(test)]
mod tests {
    use super::{propagate, propagate_cages, propagate_vectors, PropagateResult};
    use crate::puzzle::{Cage, Given, Operator, Puzzle};
    use crate::solve::domain::DomainStore;

    #[test]
    fn propagation_alone_solves_a_forced_grid() {
        let puzzle = Puzzle::new(2, vec![], vec![Given { cell: 0, value: 1 }]).unwrap();
        let mut store = DomainStore::new(&puzzle);
        match propagate(&puzzle, &mut store) {
            PropagateResult::Solved(solution) => {
                assert_eq!(vec![1, 2, 2, 1], solution.iter().copied().collect::<Vec<_>>());
            }
            _ => panic!("expected a solved grid"),
        }
    }

    #[test]
    fn unreachable_cage_target_is_invalid() {
        let cages = vec![Cage::new(vec![0, 1], Operator::Add, 7).unwrap()];
        let puzzle = Puzzle::new(3, cages, vec![]).unwrap();
        let mut store = DomainStore::new(&puzzle);
        assert!(matches!(
            propagate(&puzzle, &mut store),
            PropagateResult::Invalid
        ));
    }

    #[test]
    fn fixpoint_leaves_no_more_work() {
        let cages = vec![
            Cage::new(vec![0, 1], Operator::Add, 4).unwrap(),
            Cage::new(vec![3, 6], Operator::Multiply, 6).unwrap(),
        ];
        let puzzle = Puzzle::new(3, cages, vec![]).unwrap();
        let mut store = DomainStore::new(&puzzle);
        assert!(matches!(
            propagate(&puzzle, &mut store),
            PropagateResult::Unsolved
        ));
        // both propagators are exhausted at the fixpoint
        assert!(!propagate_vectors(&puzzle, &mut store).unwrap());
        assert!(!propagate_cages(&puzzle, &mut store).unwrap());
    }
}
