//! Solve puzzles with constraint propagation and backtracking search

pub(crate) use self::value_set::ValueSet;

mod constraint;
mod domain;
mod search;
mod value_set;

use crate::puzzle::{Puzzle, Solution};

use self::constraint::{propagate, PropagateResult};
use self::domain::DomainStore;
use self::search::{search_solution, SearchResult};

pub enum SolveResult {
    /// The puzzle cannot be solved - there may be an error in the puzzle
    Unsolvable,
    /// The puzzle was solved
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    /// Whether backtracking search was needed after propagation
    pub used_search: bool,
}

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn solve(&self) -> SolveResult {
        let mut store = DomainStore::new(self.puzzle);
        match propagate(self.puzzle, &mut store) {
            PropagateResult::Solved(solution) => {
                // singleton collapse can complete the grid in the same
                // round that would have surfaced a contradiction, so a
                // propagation-only solution is checked in full
                if self.puzzle.verify_solution(&solution) {
                    SolveResult::Solved(SolvedData {
                        solution,
                        used_search: false,
                    })
                } else {
                    SolveResult::Unsolvable
                }
            }
            PropagateResult::Invalid => SolveResult::Unsolvable,
            PropagateResult::Unsolved => {
                info!("Begin backtracking");
                match search_solution(self.puzzle, &store) {
                    SearchResult::Solution(solution) => {
                        debug_assert!(self.puzzle.verify_solution(&solution));
                        SolveResult::Solved(SolvedData {
                            solution,
                            used_search: true,
                        })
                    }
                    SearchResult::NoSolution => SolveResult::Unsolvable,
                }
            }
        }
    }
}
