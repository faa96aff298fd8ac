//! Domain-agnostic containers used by the puzzle model and solver

pub mod range_set;
pub mod square;

pub use self::range_set::RangeSet;
pub use self::square::Square;

use linked_hash_set::LinkedHashSet;

/// A deduplicating FIFO set, used as a revision worklist
pub(crate) type WorkQueue<T> = LinkedHashSet<T, ahash::RandomState>;
