//! The puzzle model: grid size, cages and given values

pub use self::cage::{Cage, Operator};

mod cage;
mod parse;

use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

pub type CageId = usize;
pub type CellId = usize;
pub type Value = i32;

/// A completed assignment of values to every cell
pub type Solution = Square<Value>;

/// A value supplied directly by the puzzle description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Given {
    pub cell: CellId,
    pub value: Value,
}

/// An unsolved puzzle
#[derive(Debug)]
pub struct Puzzle {
    /// The width and height of the puzzle
    width: usize,
    cages: Vec<Cage>,
    givens: Vec<Given>,
    /// The cage containing each cell, if any
    cage_map: Square<Option<CageId>>,
    /// Cells sharing a row or column with each cell, row neighbors first
    neighbor_map: Vec<Vec<CellId>>,
}

impl Puzzle {
    /// Creates a puzzle with the specified width, cages and givens
    pub fn new(width: usize, cages: Vec<Cage>, givens: Vec<Given>) -> Result<Self, InvalidPuzzle> {
        if width == 0 {
            return Err(InvalidPuzzle::new("puzzle width must be positive".into()));
        }
        let cage_map = cage_map(width, &cages)?;
        validate_givens(width, &givens)?;
        let neighbor_map = neighbor_map(width);
        Ok(Self {
            width,
            cages,
            givens,
            cage_map,
            neighbor_map,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleFromFileError> {
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let puzzle = Self::parse(&buf)?;
        Ok(puzzle)
    }

    /// Parses a puzzle from its text description
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse::parse_puzzle(s)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width.pow(2)
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id]
    }

    pub fn givens(&self) -> &[Given] {
        &self.givens
    }

    /// The cage a cell belongs to, if any
    pub fn cage_of(&self, cell: CellId) -> Option<CageId> {
        self.cage_map[cell]
    }

    /// Every cell sharing a row or column with the given cell
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        &self.neighbor_map[cell]
    }

    pub fn coord(&self, cell: CellId) -> Coord {
        self.cage_map.coord_at(cell)
    }

    /// Checks a solution against every row, column, cage and given
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.width() != self.width {
            return false;
        }
        let latin = (0..self.width).all(|i| {
            let row = (0..self.width).map(|j| solution[Coord::new(i, j)]);
            let col = (0..self.width).map(|j| solution[Coord::new(j, i)]);
            is_permutation(self.width, row) && is_permutation(self.width, col)
        });
        latin
            && self.cages.iter().all(|cage| {
                let values: Vec<Value> = cage.cells().iter().map(|&id| solution[id]).collect();
                cage.operator().satisfies(&values, cage.target())
            })
            && self
                .givens
                .iter()
                .all(|given| solution[given.cell] == given.value)
    }
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.cages == other.cages && self.givens == other.givens
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width)?;
        writeln!(f, "{}", self.cages.len() + self.givens.len())?;
        for cage in &self.cages {
            write!(f, "{} {}", cage.operator().symbol(), cage.target())?;
            for &cell in cage.cells() {
                let coord = self.coord(cell);
                write!(f, " {},{}", coord.row(), coord.col())?;
            }
            writeln!(f)?;
        }
        for given in &self.givens {
            let coord = self.coord(given.cell);
            writeln!(f, "v {} {},{}", given.value, coord.row(), coord.col())?;
        }
        Ok(())
    }
}

fn is_permutation(width: usize, values: impl Iterator<Item = Value>) -> bool {
    let mut seen = vec![false; width];
    for value in values {
        if value < 1 || value > width as Value {
            return false;
        }
        let i = (value - 1) as usize;
        if seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Maps each cell to the index of the cage containing it, rejecting
/// out-of-range and doubly-caged cells
fn cage_map(width: usize, cages: &[Cage]) -> Result<Square<Option<CageId>>, InvalidPuzzle> {
    let mut map = Square::with_width_and_value(width, None);
    for (id, cage) in cages.iter().enumerate() {
        for &cell in cage.cells() {
            if cell >= map.len() {
                return Err(InvalidPuzzle::new(format!(
                    "cage cell {} is outside the {}x{} grid",
                    cell, width, width
                )));
            }
            if map[cell].is_some() {
                return Err(InvalidPuzzle::new(format!(
                    "cell {:?} belongs to two cages",
                    map.coord_at(cell)
                )));
            }
            map[cell] = Some(id);
        }
    }
    Ok(map)
}

fn validate_givens(width: usize, givens: &[Given]) -> Result<(), InvalidPuzzle> {
    for (i, given) in givens.iter().enumerate() {
        if given.cell >= width.pow(2) {
            return Err(InvalidPuzzle::new(format!(
                "given cell {} is outside the {}x{} grid",
                given.cell, width, width
            )));
        }
        if given.value < 1 || given.value > width as Value {
            return Err(InvalidPuzzle::new(format!(
                "given value {} is not in 1..={}",
                given.value, width
            )));
        }
        if givens[..i].iter().any(|g| g.cell == given.cell) {
            return Err(InvalidPuzzle::new(format!(
                "cell {} has two given values",
                given.cell
            )));
        }
    }
    Ok(())
}

/// Builds each cell's row and column neighbors, row neighbors first
fn neighbor_map(width: usize) -> Vec<Vec<CellId>> {
    (0..width.pow(2))
        .map(|cell| {
            let (row, col) = (cell / width, cell % width);
            let row_neighbors = (0..width).filter(|&j| j != col).map(|j| row * width + j);
            let col_neighbors = (0..width).filter(|&i| i != row).map(|i| i * width + col);
            row_neighbors.chain(col_neighbors).collect()
        })
        .collect()
}
