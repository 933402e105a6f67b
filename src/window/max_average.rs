//! Maximum average over a fixed-size window

use num_traits::{AsPrimitive, PrimInt};

use crate::error::{Result, ScanError};

/// Returns the maximum average of any contiguous run of exactly `k` elements
///
/// The window sum is widened to `i128` and updated in O(1) per step, so a
/// window whose total leaves `T`'s range still averages correctly. The single
/// floating-point division happens after the scan.
///
/// # Arguments
///
/// * `nums` - Input sequence
/// * `k` - Window size, must satisfy `1 <= k <= nums.len()`
///
/// # Errors
///
/// [`ScanError::WindowOutOfRange`] when `k` is zero or larger than the input.
///
/// # Panics
///
/// Only for `i128`/`u128` elements whose window sum leaves `i128`'s range;
/// `u128` values above `i128::MAX` are not supported.
///
/// # Examples
///
/// ```
/// use scanlab::max_average;
///
/// let avg = max_average(&[1, 12, -5, -6, 50, 3], 4).unwrap();
/// assert_eq!(avg, 12.75);
/// ```
pub fn max_average<T>(nums: &[T], k: usize) -> Result<f64>
where
    T: PrimInt + AsPrimitive<i128>,
{
    if k == 0 || k > nums.len() {
        return Err(ScanError::WindowOutOfRange { k, len: nums.len() });
    }

    // Initial window
    let mut curr: i128 = nums[..k].iter().map(|&x| x.as_()).sum();
    let mut best = curr;

    for right in k..nums.len() {
        // Leaving element first: `curr` always contains it
        curr = curr - nums[right - k].as_() + nums[right].as_();
        best = best.max(curr);
    }

    Ok(best as f64 / k as f64)
}
