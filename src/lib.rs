//! Solve KenKen-style arithmetic Latin square puzzles
//!
//! A puzzle is an n×n grid where every row and column must contain each
//! value in `1..=n` exactly once, partitioned into "cages" of cells whose
//! values must combine to a target number under an arithmetic operator.
//! Puzzles are solved with constraint propagation (generalized arc
//! consistency) followed by backtracking search when propagation alone
//! does not finish the grid.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod puzzle;
pub mod solve;
