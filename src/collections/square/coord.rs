use std::fmt::{self, Debug, Formatter};

/// Coordinates of a cell in a [`Square`](super::Square), 0-indexed
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// The row-major index of this coordinate in a square of the given width
    pub fn as_cell_id(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
