//! Generalized arc consistency over each cage's arithmetic relation

use itertools::Itertools;

use crate::collections::WorkQueue;
use crate::puzzle::{Cage, CellId, Operator, Puzzle, Value};
use crate::solve::domain::{DomainStore, EmptyDomain};

/// Revises every cage member against the rest of its cage to a
/// worklist-empty fixpoint. Returns whether any domain shrank.
pub(crate) fn propagate_cages(
    puzzle: &Puzzle,
    store: &mut DomainStore,
) -> Result<bool, EmptyDomain> {
    let mut queue: WorkQueue<CellId> = WorkQueue::default();
    for cage in puzzle.cages() {
        for &cell in cage.cells() {
            queue.insert(cell);
        }
    }
    let mut revised_any = false;
    while let Some(xi) = queue.pop_front() {
        let cage_id = puzzle.cage_of(xi).expect("queued cells belong to cages");
        if !revise_member(puzzle.cage(cage_id), store, xi)? {
            continue;
        }
        revised_any = true;
        for &xk in puzzle.cage(cage_id).cells() {
            if xk != xi {
                queue.insert(xk);
            }
        }
    }
    Ok(revised_any)
}

/// Removes candidates of `xi` that no combination of the remaining cage
/// members' candidates can extend to the cage target
fn revise_member(cage: &Cage, store: &mut DomainStore, xi: CellId) -> Result<bool, EmptyDomain> {
    let rest: Vec<CellId> = cage
        .cells()
        .iter()
        .copied()
        .filter(|&cell| cell != xi)
        .collect();
    let operator = cage.operator();
    let target = cage.target();
    let doomed: Vec<Value> = match rest[..] {
        // a cage of one cell pins the cell to its target
        [] => store
            .domain(xi)
            .iter()
            .filter(|&x| x != target)
            .collect(),
        [xj] => {
            let supports = store.domain(xj);
            store
                .domain(xi)
                .iter()
                .filter(|&x| !supports.iter().any(|y| operator.pair_satisfies(x, y, target)))
                .collect()
        }
        // reduce every combination of the rest to one aggregate value;
        // the n-ary reduction exists only for add and multiply, and
        // wide subtract/divide cages are rejected at puzzle build time
        _ => {
            let aggregates: Vec<Value> = rest
                .iter()
                .map(|&cell| store.domain(cell).iter().collect::<Vec<_>>())
                .multi_cartesian_product()
                .filter_map(|combo| reduce(operator, &combo))
                .collect();
            store
                .domain(xi)
                .iter()
                .filter(|&x| {
                    !aggregates
                        .iter()
                        .any(|&aggregate| operator.pair_satisfies(x, aggregate, target))
                })
                .collect()
        }
    };
    let mut revised = false;
    for x in doomed {
        store.remove(xi, x)?;
        revised = true;
    }
    Ok(revised)
}

/// Combines values under an add or multiply operator. `None` means the
/// aggregate overflows and so cannot reach any target.
pub(crate) fn reduce(operator: Operator, values: &[Value]) -> Option<Value> {
    match operator {
        Operator::Add => values.iter().try_fold(0, |acc: Value, &v| acc.checked_add(v)),
        Operator::Multiply => values.iter().try_fold(1, |acc: Value, &v| acc.checked_mul(v)),
        Operator::Subtract | Operator::Divide => {
            unreachable!("no n-ary reduction for subtract or divide")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{propagate_cages, reduce};
    use crate::puzzle::{Cage, Operator, Puzzle};
    use crate::solve::domain::DomainStore;

    fn propagate(puzzle: &Puzzle) -> Result<DomainStore, ()> {
        let mut store = DomainStore::new(puzzle);
        match propagate_cages(puzzle, &mut store) {
            Ok(_) => Ok(store),
            Err(_) => Err(()),
        }
    }

    fn one_cage(width: usize, cells: Vec<usize>, operator: Operator, target: i32) -> Puzzle {
        let cages = vec![Cage::new(cells, operator, target).unwrap()];
        Puzzle::new(width, cages, vec![]).unwrap()
    }

    #[test]
    fn pair_add() {
        let puzzle = one_cage(3, vec![0, 1], Operator::Add, 3);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(vec![1, 2], store.domain(0).iter().collect::<Vec<_>>());
        assert_eq!(vec![1, 2], store.domain(1).iter().collect::<Vec<_>>());
        // cells outside the cage are untouched
        assert_eq!(3, store.domain(2).len());
    }

    #[test]
    fn pair_multiply() {
        let puzzle = one_cage(4, vec![0, 4], Operator::Multiply, 6);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(vec![2, 3], store.domain(0).iter().collect::<Vec<_>>());
    }

    #[test]
    fn pair_subtract_checks_both_directions() {
        let puzzle = one_cage(3, vec![0, 3], Operator::Subtract, 2);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(vec![1, 3], store.domain(0).iter().collect::<Vec<_>>());
        assert_eq!(vec![1, 3], store.domain(3).iter().collect::<Vec<_>>());
    }

    #[test]
    fn pair_divide_checks_both_directions() {
        let puzzle = one_cage(4, vec![0, 4], Operator::Divide, 3);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(vec![1, 3], store.domain(0).iter().collect::<Vec<_>>());
    }

    #[test]
    fn single_cell_cage_pins_the_target() {
        let puzzle = one_cage(3, vec![4], Operator::Add, 2);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(Some(2), store.domain(4).single_value());
    }

    #[test]
    fn wide_add_uses_aggregates() {
        // 1 cannot reach 8 with two more cells from {1, 2, 3}
        let puzzle = one_cage(3, vec![0, 1, 2], Operator::Add, 8);
        let store = propagate(&puzzle).unwrap();
        assert_eq!(vec![2, 3], store.domain(0).iter().collect::<Vec<_>>());
    }

    #[test]
    fn reduce_overflow_cannot_reach_a_target() {
        assert_eq!(Some(6), reduce(Operator::Multiply, &[2, 3]));
        assert_eq!(None, reduce(Operator::Multiply, &[2_000_000_000, 2]));
        assert_eq!(None, reduce(Operator::Add, &[2_000_000_000, 2_000_000_000]));
    }

    #[test]
    fn unreachable_target_empties_a_domain() {
        let puzzle = one_cage(3, vec![0, 1], Operator::Add, 7);
        assert!(propagate(&puzzle).is_err());
    }
}
