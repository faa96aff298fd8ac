//! A square grid container

mod coord;

pub use self::coord::Coord;

use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

/// A container of elements arranged in a square grid, indexed by
/// row-major cell id or by [`Coord`]
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a `Square` of the given width, filled with a value
    pub fn with_width_and_value(width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    /// The width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of cells in the grid
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn row_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len());
        index / self.width
    }

    pub fn col_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len());
        index % self.width
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::new(self.row_at(index), self.col_at(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Iterates over the rows of the grid as slices
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.elements[coord.as_cell_id(self.width)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        &mut self.elements[coord.as_cell_id(self.width)]
    }
}

impl<T: Display> Display for Square<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
