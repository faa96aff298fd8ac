//! Parse puzzles from text
//!
//! The format is line oriented: the grid size, the number of constraint
//! records, then one record per line. A record is either a cage,
//! `<operator> <target> <cell>...`, or a given value, `v <value> <cell>`,
//! where a cell is written `row,col` with 0-indexed coordinates.

use crate::error::{ParseError, ParseErrorKind, ParsePuzzleError};
use crate::puzzle::{Cage, CellId, Given, Operator, Puzzle, Value};

pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut lines = Lines::new(s);
    let (line, token) = lines.next_line()?;
    let size: usize = token
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ParseError::new(line, ParseErrorKind::InvalidSize(token.into())))?;
    let (line, token) = lines.next_line()?;
    let count: usize = token.parse().map_err(|_| {
        ParseError::new(line, ParseErrorKind::InvalidConstraintCount(token.into()))
    })?;
    let mut cages = Vec::new();
    let mut givens = Vec::new();
    for _ in 0..count {
        let (line, record) = lines.next_line()?;
        parse_record(line, record, size, &mut cages, &mut givens)?;
    }
    if let Ok((line, token)) = lines.next_line() {
        return Err(ParseError::new(line, ParseErrorKind::TrailingInput(token.into())).into());
    }
    let puzzle = Puzzle::new(size, cages, givens)?;
    Ok(puzzle)
}

fn parse_record(
    line: usize,
    record: &str,
    size: usize,
    cages: &mut Vec<Cage>,
    givens: &mut Vec<Given>,
) -> Result<(), ParsePuzzleError> {
    let mut tokens = record.split_whitespace();
    let head = tokens.next().expect("blank lines are skipped");
    let target_token = tokens
        .next()
        .ok_or_else(|| ParseError::new(line, ParseErrorKind::UnexpectedEnd))?;
    let target: Value = target_token.parse().map_err(|_| {
        ParseError::new(line, ParseErrorKind::InvalidTarget(target_token.into()))
    })?;
    let cells = tokens
        .map(|token| parse_cell(line, token, size))
        .collect::<Result<Vec<CellId>, ParseError>>()?;
    if cells.is_empty() {
        return Err(ParseError::new(line, ParseErrorKind::MissingCell).into());
    }
    if head == "v" {
        match *cells {
            [cell] => givens.push(Given {
                cell,
                value: target,
            }),
            _ => {
                return Err(ParseError::new(
                    line,
                    ParseErrorKind::TrailingInput(record.into()),
                )
                .into())
            }
        }
    } else {
        let operator = head
            .chars()
            .next()
            .filter(|_| head.len() == 1)
            .and_then(Operator::from_symbol)
            .ok_or_else(|| ParseError::new(line, ParseErrorKind::UnknownOperator(head.into())))?;
        cages.push(Cage::new(cells, operator, target)?);
    }
    Ok(())
}

fn parse_cell(line: usize, token: &str, size: usize) -> Result<CellId, ParseError> {
    let invalid = || ParseError::new(line, ParseErrorKind::InvalidCell(token.into()));
    let (row, col) = token.split_once(',').ok_or_else(invalid)?;
    let row: usize = row.parse().map_err(|_| invalid())?;
    let col: usize = col.parse().map_err(|_| invalid())?;
    if row >= size || col >= size {
        return Err(invalid());
    }
    Ok(row * size + col)
}

/// Numbers lines 1-based and skips blank ones
struct Lines<'a> {
    iter: std::str::Lines<'a>,
    current: usize,
}

impl<'a> Lines<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            iter: s.lines(),
            current: 0,
        }
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), ParseError> {
        loop {
            let line = self
                .iter
                .next()
                .ok_or_else(|| ParseError::new(self.current + 1, ParseErrorKind::UnexpectedEnd))?;
            self.current += 1;
            let line = line.trim();
            if !line.is_empty() {
                return Ok((self.current, line));
            }
        }
    }
}
