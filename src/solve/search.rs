//! Backtracking search over the assignments propagation could not finish
//!
//! Search reads the pruned domains but never mutates them; only the
//! tentative grid entry is written and undone on backtrack, so no
//! domain-restoration bookkeeping is needed.

use itertools::Itertools;

use crate::collections::Square;
use crate::puzzle::{Cage, CellId, Puzzle, Solution, Value};
use crate::solve::constraint::reduce;
use crate::solve::domain::DomainStore;

pub(crate) enum SearchResult {
    NoSolution,
    Solution(Solution),
}

pub(crate) fn search_solution(puzzle: &Puzzle, store: &DomainStore) -> SearchResult {
    let mut grid = store.grid().clone();
    if backtrack(puzzle, store, &mut grid, 1) {
        SearchResult::Solution(grid)
    } else {
        SearchResult::NoSolution
    }
}

fn backtrack(puzzle: &Puzzle, store: &DomainStore, grid: &mut Square<Value>, depth: u32) -> bool {
    let cell = match select_cell(store, grid) {
        Some(cell) => cell,
        None => return true,
    };
    for value in store.domain(cell).iter() {
        if !is_consistent(puzzle, store, grid, cell, value) {
            continue;
        }
        debug!(
            "Guessing {} at {:?} (depth {})",
            value,
            puzzle.coord(cell),
            depth
        );
        grid[cell] = value;
        if backtrack(puzzle, store, grid, depth + 1) {
            return true;
        }
        grid[cell] = 0;
    }
    false
}

/// Most-constrained-variable selection: the unassigned cell with the
/// smallest domain, scanning in grid order so ties go to the first cell
fn select_cell(store: &DomainStore, grid: &Square<Value>) -> Option<CellId> {
    (0..grid.len())
        .filter(|&cell| grid[cell] == 0)
        .min_by_key(|&cell| store.domain(cell).len())
}

/// Checks a tentative assignment against the cell's row and column
/// neighbors and its cage, without committing it
fn is_consistent(
    puzzle: &Puzzle,
    store: &DomainStore,
    grid: &Square<Value>,
    cell: CellId,
    value: Value,
) -> bool {
    if value < 1 || value > puzzle.width() as Value {
        return false;
    }
    if puzzle
        .neighbors(cell)
        .iter()
        .any(|&neighbor| grid[neighbor] == value)
    {
        return false;
    }
    match puzzle.cage_of(cell) {
        Some(cage_id) => cage_consistent(puzzle.cage(cage_id), store, grid, cell, value),
        None => true,
    }
}

/// Checks the cage relation against the tentative assignment: already
/// assigned members are fixed, unassigned members range over their
/// pruned domains. For a complete cage this is exact arithmetic; for an
/// incomplete one, "some completion could still reach the target".
fn cage_consistent(
    cage: &Cage,
    store: &DomainStore,
    grid: &Square<Value>,
    cell: CellId,
    value: Value,
) -> bool {
    let rest: Vec<CellId> = cage
        .cells()
        .iter()
        .copied()
        .filter(|&member| member != cell)
        .collect();
    let operator = cage.operator();
    let target = cage.target();
    match rest[..] {
        [] => operator.satisfies(&[value], target),
        [other] => match grid[other] {
            0 => store
                .domain(other)
                .iter()
                .any(|y| operator.pair_satisfies(value, y, target)),
            fixed => operator.pair_satisfies(value, fixed, target),
        },
        // wide cages are add or multiply (enforced at puzzle build time)
        _ => rest
            .iter()
            .map(|&member| match grid[member] {
                0 => store.domain(member).iter().collect::<Vec<_>>(),
                fixed => vec![fixed],
            })
            .multi_cartesian_product()
            .filter_map(|combo| reduce(operator, &combo))
            .any(|aggregate| operator.pair_satisfies(value, aggregate, target)),
    }
}
