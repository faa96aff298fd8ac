use crate::error::InvalidPuzzle;
use crate::puzzle::{CellId, Value};

/// A cage in a puzzle
///
/// A cage is a group of cells whose values must combine to the target
/// number under the cage's arithmetic operator.
#[derive(Debug, PartialEq)]
pub struct Cage {
    cells: Box<[CellId]>,
    operator: Operator,
    target: Value,
}

impl Cage {
    pub fn new(
        cells: impl Into<Box<[CellId]>>,
        operator: Operator,
        target: Value,
    ) -> Result<Self, InvalidPuzzle> {
        let cage = Cage {
            cells: cells.into(),
            operator,
            target,
        };
        cage.validate()?;
        Ok(cage)
    }

    /// The IDs of the cells in the cage
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    fn validate(&self) -> Result<(), InvalidPuzzle> {
        if self.cells.is_empty() {
            return Err(InvalidPuzzle::new("cage has no cells".into()));
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if self.cells[..i].contains(cell) {
                return Err(InvalidPuzzle::new(format!(
                    "cell {} appears twice in one cage",
                    cell
                )));
            }
        }
        match self.operator {
            Operator::Subtract | Operator::Divide if self.cells.len() != 2 => {
                Err(InvalidPuzzle::new(format!(
                    "{} cages must have exactly two cells",
                    self.operator.symbol()
                )))
            }
            _ => Ok(()),
        }
    }
}

/// The math operator of a cage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The character representation of the operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Retrieves the `Operator` for a symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        let operator = match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            _ => return None,
        };
        Some(operator)
    }

    /// Checks a complete pair of values against the target.
    ///
    /// Subtraction and division are checked in both directions since
    /// cages do not order their cells. Arithmetic is widened to `i64`
    /// so a large target cannot overflow.
    pub fn pair_satisfies(self, a: Value, b: Value, target: Value) -> bool {
        let (a, b, target) = (i64::from(a), i64::from(b), i64::from(target));
        match self {
            Operator::Add => a + b == target,
            Operator::Subtract => a - b == target || b - a == target,
            Operator::Multiply => a * b == target,
            Operator::Divide => a == target * b || b == target * a,
        }
    }

    /// Checks a complete list of cage values against the target.
    /// An aggregate that overflows cannot equal any target.
    pub fn satisfies(self, values: &[Value], target: Value) -> bool {
        match self {
            Operator::Add => {
                values.iter().try_fold(0, |acc: Value, &v| acc.checked_add(v)) == Some(target)
            }
            Operator::Multiply => {
                values.iter().try_fold(1, |acc: Value, &v| acc.checked_mul(v)) == Some(target)
            }
            Operator::Subtract | Operator::Divide => match *values {
                [a] => a == target,
                [a, b] => self.pair_satisfies(a, b, target),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cage, Operator};

    #[test]
    fn subtract_pair_either_direction() {
        assert!(Operator::Subtract.pair_satisfies(1, 3, 2));
        assert!(Operator::Subtract.pair_satisfies(3, 1, 2));
        assert!(!Operator::Subtract.pair_satisfies(3, 2, 2));
    }

    #[test]
    fn divide_pair_either_direction() {
        assert!(Operator::Divide.pair_satisfies(2, 4, 2));
        assert!(Operator::Divide.pair_satisfies(4, 2, 2));
        // 3/2 is not an integer quotient
        assert!(!Operator::Divide.pair_satisfies(3, 2, 2));
    }

    #[test]
    fn satisfies() {
        assert!(Operator::Add.satisfies(&[1, 2, 4], 7));
        assert!(!Operator::Add.satisfies(&[1, 2, 4], 8));
        assert!(Operator::Multiply.satisfies(&[2, 3, 4], 24));
        assert!(Operator::Subtract.satisfies(&[1, 4], 3));
        assert!(Operator::Divide.satisfies(&[4, 1], 4));
    }

    #[test]
    fn huge_targets_do_not_overflow() {
        assert!(!Operator::Divide.pair_satisfies(1, 2, 1_100_000_000));
        assert!(!Operator::Divide.pair_satisfies(2, 2, i32::MAX));
        assert!(Operator::Divide.pair_satisfies(1_100_000_000, 1, 1_100_000_000));
        assert!(!Operator::Multiply.satisfies(&[2_000_000_000, 2], 4));
    }

    #[test]
    fn wide_subtract_cage_rejected() {
        assert!(Cage::new(vec![0, 1, 2], Operator::Subtract, 1).is_err());
        assert!(Cage::new(vec![0, 1], Operator::Subtract, 1).is_ok());
    }

    #[test]
    fn duplicate_cell_rejected() {
        assert!(Cage::new(vec![0, 1, 0], Operator::Add, 5).is_err());
    }
}
