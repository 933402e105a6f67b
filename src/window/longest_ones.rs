//! Longest run of ones with a bounded number of flips

use num_traits::Zero;

use crate::error::{Result, ScanError};

/// Length of the longest window containing at most `k` zeros
///
/// Equivalently, the longest run of ones obtainable by flipping at most `k`
/// zeros. Any non-zero element counts as a one. An empty input yields 0.
///
/// # Errors
///
/// [`ScanError::NegativeFlipBudget`] when `k < 0`.
///
/// # Examples
///
/// ```
/// use scanlab::longest_ones;
///
/// let nums = [1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0];
/// assert_eq!(longest_ones(&nums, 2).unwrap(), 6);
/// ```
pub fn longest_ones<T>(nums: &[T], k: i64) -> Result<usize>
where
    T: Zero,
{
    if k < 0 {
        return Err(ScanError::NegativeFlipBudget { k });
    }
    let budget = usize::try_from(k).unwrap_or(usize::MAX);

    let mut left = 0;
    let mut zeros = 0usize;
    let mut best = 0;

    for right in 0..nums.len() {
        if nums[right].is_zero() {
            zeros += 1;
        }

        // Shrink until the window holds at most `budget` zeros
        while zeros > budget {
            if nums[left].is_zero() {
                zeros -= 1;
            }
            left += 1;
        }

        best = best.max(right - left + 1);
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        assert_eq!(longest_ones(&[1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0], 2), Ok(6));
    }

    #[test]
    fn test_second_reference_case() {
        let nums = [0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1];
        assert_eq!(longest_ones(&nums, 3), Ok(10));
    }

    #[test]
    fn test_zero_budget_is_longest_existing_run() {
        assert_eq!(longest_ones(&[1, 1, 0, 1, 1, 1, 0, 1], 0), Ok(3));
        assert_eq!(longest_ones(&[0, 0, 0], 0), Ok(0));
    }

    #[test]
    fn test_budget_covers_all_zeros() {
        let nums = [0u8, 1, 0, 1, 0];
        assert_eq!(longest_ones(&nums, 3), Ok(5));
        assert_eq!(longest_ones(&nums, i64::MAX), Ok(5));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(longest_ones::<i32>(&[], 1), Ok(0));
    }

    #[test]
    fn test_negative_budget() {
        assert_eq!(
            longest_ones(&[1, 0], -1),
            Err(ScanError::NegativeFlipBudget { k: -1 })
        );
    }
}
