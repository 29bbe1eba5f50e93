//! Generic half-open intervals carrying a payload
//!
//! Input type for the lane partitioner. Duplicates, nesting, and partial
//! overlap are all expected; there is no uniqueness constraint.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval with an attached payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Interval<T> {
    pub start: usize,
    pub end: usize,
    pub item: T,
}

impl<T> Interval<T> {
    pub fn new(start: usize, end: usize, item: T) -> Self {
        Self { start, end, item }
    }

    /// Overlap under the adjacency rule: touching intervals do not overlap
    pub fn overlaps<U>(&self, other: &Interval<U>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let a = Interval::new(0, 3, ());
        let b = Interval::new(3, 5, ());
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn nested_intervals_overlap() {
        let outer = Interval::new(0, 10, ());
        let inner = Interval::new(2, 4, ());
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn zero_width_interval_at_boundary_does_not_overlap() {
        let z = Interval::new(3, 3, ());
        let before = Interval::new(0, 3, ());
        let after = Interval::new(3, 10, ());
        assert!(!z.overlaps(&before));
        assert!(!z.overlaps(&after));
    }

    #[test]
    fn zero_width_interval_strictly_inside_overlaps() {
        let z = Interval::new(3, 3, ());
        let around = Interval::new(0, 10, ());
        assert!(z.overlaps(&around));
        assert!(around.overlaps(&z));
    }
}
