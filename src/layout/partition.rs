//! Greedy interval partitioning into non-overlapping lanes
//!
//! Classic interval-graph coloring: assign each interval to the
//! smallest-indexed lane whose most recent occupant has ended by the
//! interval's start. The greedy earliest-available-lane strategy over
//! start-sorted input produces the minimum possible number of lanes
//! (equal to the maximum number of simultaneously overlapping intervals).

use crate::models::Interval;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Partition intervals into the minimum number of non-overlapping lanes
///
/// Input intervals are half-open with `start <= end`; duplicates, nesting,
/// and zero-width intervals are all fine. Adjacency does not count as
/// overlap, so an interval may enter a lane whose last occupant ends
/// exactly at the interval's start.
///
/// Lanes come back in creation order; within a lane, items are in start
/// order. Every input item lands in exactly one lane. O(n log n).
pub fn partition_intervals<T>(intervals: Vec<Interval<T>>) -> Vec<Vec<Interval<T>>> {
    let mut sorted = intervals;
    // Stable sort: exact (start, end) ties keep their input order
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    // Min-heap of (earliest lane end, lane index)
    let mut heap: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();
    let mut lanes: Vec<Vec<Interval<T>>> = Vec::new();

    for iv in sorted {
        match heap.peek() {
            Some(&Reverse((end, lane))) if end <= iv.start => {
                heap.pop();
                heap.push(Reverse((iv.end, lane)));
                lanes[lane].push(iv);
            }
            _ => {
                let lane = lanes.len();
                heap.push(Reverse((iv.end, lane)));
                lanes.push(vec![iv]);
            }
        }
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: usize, end: usize, item: u32) -> Interval<u32> {
        Interval::new(start, end, item)
    }

    fn items(lane: &[Interval<u32>]) -> Vec<u32> {
        lane.iter().map(|i| i.item).collect()
    }

    #[test]
    fn disjoint_intervals_share_one_lane() {
        let lanes = partition_intervals(vec![iv(0, 2, 1), iv(3, 5, 2), iv(5, 7, 3)]);
        assert_eq!(lanes.len(), 1);
        assert_eq!(items(&lanes[0]), vec![1, 2, 3]);
    }

    #[test]
    fn overlapping_intervals_split_lanes() {
        let lanes = partition_intervals(vec![iv(0, 5, 1), iv(1, 3, 2)]);
        assert_eq!(lanes.len(), 2);
        assert_eq!(items(&lanes[0]), vec![1]);
        assert_eq!(items(&lanes[1]), vec![2]);
    }

    #[test]
    fn adjacency_reuses_a_lane() {
        // [0,3) and [3,6) touch but do not overlap
        let lanes = partition_intervals(vec![iv(0, 3, 1), iv(3, 6, 2)]);
        assert_eq!(lanes.len(), 1);
    }

    #[test]
    fn zero_width_interval_gets_placed() {
        let lanes = partition_intervals(vec![iv(2, 2, 1), iv(2, 5, 2)]);
        assert_eq!(lanes.len(), 1);
        assert_eq!(items(&lanes[0]), vec![1, 2]);
    }

    #[test]
    fn identical_intervals_each_get_a_lane() {
        let lanes = partition_intervals(vec![iv(1, 4, 1), iv(1, 4, 2), iv(1, 4, 3)]);
        assert_eq!(lanes.len(), 3);
        // Stable ties: lane index follows input order
        assert_eq!(items(&lanes[0]), vec![1]);
        assert_eq!(items(&lanes[1]), vec![2]);
        assert_eq!(items(&lanes[2]), vec![3]);
    }

    #[test]
    fn nested_intervals_stack() {
        let lanes = partition_intervals(vec![iv(0, 10, 1), iv(2, 4, 2), iv(5, 7, 3)]);
        assert_eq!(lanes.len(), 2);
        assert_eq!(items(&lanes[0]), vec![1]);
        assert_eq!(items(&lanes[1]), vec![2, 3]);
    }

    #[test]
    fn empty_input_yields_no_lanes() {
        let lanes = partition_intervals(Vec::<Interval<u32>>::new());
        assert!(lanes.is_empty());
    }
}
