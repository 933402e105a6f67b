//! Binary search for the span of a target value

/// First and last index of `target` in the ascending slice `nums`
///
/// Runs two binary searches, one biased left and one biased right.
/// Returns `None` when `target` does not occur.
///
/// # Examples
///
/// ```
/// use scanlab::search_range;
///
/// assert_eq!(search_range(&[5, 7, 7, 8, 8, 10], &8), Some((3, 4)));
/// assert_eq!(search_range(&[5, 7, 7, 8, 8, 10], &6), None);
/// ```
pub fn search_range<T: Ord>(nums: &[T], target: &T) -> Option<(usize, usize)> {
    let first = find_edge(nums, target, Edge::First)?;
    let last = find_edge(nums, target, Edge::Last)?;
    Some((first, last))
}

#[derive(Clone, Copy)]
enum Edge {
    First,
    Last,
}

fn find_edge<T: Ord>(nums: &[T], target: &T, edge: Edge) -> Option<usize> {
    // Half-open range [lo, hi)
    let mut lo = 0;
    let mut hi = nums.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        match nums[mid].cmp(target) {
            std::cmp::Ordering::Equal => {
                found = Some(mid);
                match edge {
                    Edge::First => hi = mid,
                    Edge::Last => lo = mid + 1,
                }
            }
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }

    found
}
