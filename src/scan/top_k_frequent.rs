//! Most frequent values

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// The `k` most frequent values of `nums`, most frequent first
///
/// Counts in one pass, then keeps a min-heap of at most `k` candidates so
/// the selection costs O(m log k) for `m` distinct values. Ties on count go
/// to the smaller value. Returns every distinct value when `k` exceeds
/// their number.
///
/// # Examples
///
/// ```
/// use scanlab::top_k_frequent;
///
/// assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
/// ```
pub fn top_k_frequent<T>(nums: &[T], k: usize) -> Vec<T>
where
    T: Copy + Eq + Hash + Ord,
{
    if k == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<T, usize> = HashMap::new();
    for &x in nums {
        *counts.entry(x).or_insert(0) += 1;
    }

    // Rank: higher count wins, then smaller value
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (value, count) in counts {
        heap.push(Reverse((count, Reverse(value))));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Ascending by Reverse(rank) is best rank first
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((_, Reverse(value)))| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
        assert_eq!(top_k_frequent(&[1], 1), vec![1]);
    }

    #[test]
    fn test_order_and_ties() {
        let nums = [5, 3, 3, 9, 9, 9, 4, 4, 5, 7];
        // counts: 9 -> 3; 3, 4, 5 -> 2; 7 -> 1
        assert_eq!(top_k_frequent(&nums, 3), vec![9, 3, 4]);
        assert_eq!(top_k_frequent(&nums, 10), vec![9, 3, 4, 5, 7]);
    }

    #[test]
    fn test_degenerate_k_and_input() {
        assert!(top_k_frequent(&[1, 2, 3], 0).is_empty());
        assert!(top_k_frequent::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_strings() {
        let words = ["kiwi", "fig", "kiwi", "plum", "fig", "kiwi"];
        assert_eq!(top_k_frequent(&words, 2), vec!["kiwi", "fig"]);
    }
}
