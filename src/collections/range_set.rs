use std::fmt::{self, Debug, Formatter};

/// A set of `usize` values bounded by a maximum, with O(1) insert,
/// remove and membership tests
#[derive(Clone)]
pub struct RangeSet {
    len: usize,
    members: Vec<bool>,
}

impl RangeSet {
    /// Creates an empty set that can hold values below `bound`
    pub fn new(bound: usize) -> Self {
        Self {
            len: 0,
            members: vec![false; bound],
        }
    }

    /// Creates a set containing every value below `bound`
    pub fn with_all(bound: usize) -> Self {
        Self {
            len: bound,
            members: vec![true; bound],
        }
    }

    /// Returns false if the value was already present
    pub fn insert(&mut self, n: usize) -> bool {
        if self.members[n] {
            return false;
        }
        self.members[n] = true;
        self.len += 1;
        true
    }

    /// Returns false if the value was not present
    pub fn remove(&mut self, n: usize) -> bool {
        if !self.members[n] {
            return false;
        }
        self.members[n] = false;
        self.len -= 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// The sole member of the set, if it has exactly one
    pub fn single_value(&self) -> Option<usize> {
        if self.len == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterates over the members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, &present)| if present { Some(i) } else { None })
    }
}

impl Debug for RangeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RangeSet;

    #[test]
    #[should_panic]
    fn insert_out_of_bounds() {
        let mut set = RangeSet::new(4);
        set.insert(4);
    }

    #[test]
    fn insert_remove() {
        let mut set = RangeSet::new(4);
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(1, set.len());
        assert!(set.remove(2));
        assert!(!set.remove(2));
        assert!(set.is_empty());
    }

    #[test]
    fn iter_ascending() {
        let mut set = RangeSet::new(5);
        set.insert(3);
        set.insert(0);
        set.insert(4);
        assert_eq!(vec![0, 3, 4], set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn single_value() {
        let mut set = RangeSet::with_all(3);
        assert_eq!(None, set.single_value());
        set.remove(0);
        set.remove(2);
        assert_eq!(Some(1), set.single_value());
        set.remove(1);
        assert_eq!(None, set.single_value());
    }
}
