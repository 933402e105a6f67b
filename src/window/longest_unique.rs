//! Longest substring without repeating characters

use std::collections::HashSet;

/// Length, in characters, of the longest substring of `s` with no repeats
///
/// # Examples
///
/// ```
/// use scanlab::longest_unique_substring;
///
/// assert_eq!(longest_unique_substring("abcabcbb"), 3);
/// assert_eq!(longest_unique_substring(""), 0);
/// ```
pub fn longest_unique_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut seen = HashSet::with_capacity(chars.len().min(128));
    let mut left = 0;
    let mut best = 0;

    for (right, &c) in chars.iter().enumerate() {
        // Drop characters from the left until `c` is no longer in the window
        while seen.contains(&c) {
            seen.remove(&chars[left]);
            left += 1;
        }
        seen.insert(c);
        best = best.max(right - left + 1);
    }

    best
}
