use std::fmt::{self, Debug, Formatter};

use crate::collections::RangeSet;
use crate::puzzle::Value;

/// A set of candidate puzzle values, a small abstraction over `RangeSet`
#[derive(Clone)]
pub(crate) struct ValueSet(RangeSet);

impl ValueSet {
    /// Creates a set containing every value in `1..=max`
    pub fn with_all(max: usize) -> Self {
        let mut set = RangeSet::with_all(max + 1);
        set.remove(0);
        ValueSet(set)
    }

    /// Creates a set containing only the given value
    pub fn single(max: usize, value: Value) -> Self {
        let mut set = RangeSet::new(max + 1);
        set.insert(value as usize);
        ValueSet(set)
    }

    pub fn remove(&mut self, value: Value) -> bool {
        self.0.remove(value as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn single_value(&self) -> Option<Value> {
        self.0.single_value().map(|n| n as Value)
    }

    /// Iterates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().map(|n| n as Value)
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSet;

    #[test]
    fn with_all_excludes_zero() {
        let set = ValueSet::with_all(4);
        assert_eq!(4, set.len());
        assert_eq!(vec![1, 2, 3, 4], set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn single() {
        let set = ValueSet::single(4, 3);
        assert_eq!(Some(3), set.single_value());
    }
}
