//! Error types for reading and validating puzzles

use std::fmt::{self, Display, Formatter};
use std::io;

use thiserror::Error;

/// A structurally well-formed puzzle description that does not describe
/// a valid puzzle (out-of-range cells, overlapping cages, ...)
#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

/// A syntax error with the line it occurred on (1-based)
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("{} (line {})", kind, line)]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum ParseErrorKind {
    InvalidCell(String),
    InvalidConstraintCount(String),
    InvalidSize(String),
    InvalidTarget(String),
    MissingCell,
    TrailingInput(String),
    UnexpectedEnd,
    UnknownOperator(String),
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InvalidCell(token) => write!(f, "invalid cell \"{}\"", token),
            ParseErrorKind::InvalidConstraintCount(token) => {
                write!(f, "invalid constraint count \"{}\"", token)
            }
            ParseErrorKind::InvalidSize(token) => write!(f, "invalid puzzle size \"{}\"", token),
            ParseErrorKind::InvalidTarget(token) => write!(f, "invalid target \"{}\"", token),
            ParseErrorKind::MissingCell => write!(f, "constraint names no cells"),
            ParseErrorKind::TrailingInput(token) => {
                write!(f, "unexpected trailing input \"{}\"", token)
            }
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseErrorKind::UnknownOperator(token) => {
                write!(f, "unknown operator \"{}\"", token)
            }
        }
    }
}
