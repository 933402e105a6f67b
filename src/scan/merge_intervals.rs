//! Merging overlapping closed intervals

/// Merges overlapping `(start, end)` intervals
///
/// Works on a copy sorted by start, then sweeps once: an interval whose
/// start is at or before the previous end extends it. Touching intervals
/// such as `(1, 4)` and `(4, 5)` merge. Output is sorted by start.
///
/// # Examples
///
/// ```
/// use scanlab::merge_intervals;
///
/// let merged = merge_intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
/// assert_eq!(merged, vec![(1, 6), (8, 10), (15, 18)]);
/// ```
pub fn merge_intervals<T: Copy + Ord>(intervals: &[(T, T)]) -> Vec<(T, T)> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(T, T)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged
}
