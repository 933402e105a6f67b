//! Minimum window containing every character of a pattern

use std::collections::HashMap;

/// Smallest substring of `s` that contains every character of `t`,
/// counting multiplicity
///
/// Returns the leftmost such window when several share the minimum length,
/// and an empty string when either input is empty or no window exists.
///
/// # Examples
///
/// ```
/// use scanlab::min_window_substring;
///
/// assert_eq!(min_window_substring("ADOBECODEBANC", "ABC"), "BANC");
/// assert_eq!(min_window_substring("a", "aa"), "");
/// ```
pub fn min_window_substring(s: &str, t: &str) -> String {
    if s.is_empty() || t.is_empty() {
        return String::new();
    }

    let mut required: HashMap<char, usize> = HashMap::new();
    for c in t.chars() {
        *required.entry(c).or_insert(0) += 1;
    }

    let chars: Vec<char> = s.chars().collect();
    let mut window: HashMap<char, usize> = HashMap::with_capacity(required.len());
    let mut formed = 0;
    let mut best: Option<(usize, usize)> = None; // (start, len)
    let mut left = 0;

    for (right, &c) in chars.iter().enumerate() {
        let count = {
            let slot = window.entry(c).or_insert(0);
            *slot += 1;
            *slot
        };
        if required.get(&c) == Some(&count) {
            formed += 1;
        }

        // Contract while every distinct required character is satisfied
        while formed == required.len() {
            let len = right - left + 1;
            if best.map_or(true, |(_, best_len)| len < best_len) {
                best = Some((left, len));
            }

            let out = chars[left];
            if let Some(count) = window.get_mut(&out) {
                *count -= 1;
                if required.get(&out).is_some_and(|&need| *count < need) {
                    formed -= 1;
                }
            }
            left += 1;
        }
    }

    match best {
        Some((start, len)) => chars[start..start + len].iter().collect(),
        None => String::new(),
    }
}
