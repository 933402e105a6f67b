//! Minimum positive starting value

use num_traits::{AsPrimitive, PrimInt};

use crate::error::{Result, ScanError};

/// Smallest `x` such that `x + nums[0] + ... + nums[i] >= 1` for every `i`
///
/// The running minimum starts at zero rather than at the first prefix sum,
/// so an input whose prefix sums never go negative yields exactly 1.
/// Prefix sums are accumulated in `i128`, so they may leave `T`'s range as
/// long as the answer itself fits.
///
/// # Errors
///
/// [`ScanError::EmptyInput`] for an empty slice, and
/// [`ScanError::Unrepresentable`] when the answer does not fit in `T`
/// (e.g. `[i32::MIN]` needs `2^31 + 1`).
///
/// # Panics
///
/// Only for `i128`/`u128` elements whose prefix sums leave `i128`'s range.
///
/// # Examples
///
/// ```
/// use scanlab::min_start_value;
///
/// assert_eq!(min_start_value(&[-3, 2, -3, 4, 2]).unwrap(), 5);
/// assert_eq!(min_start_value(&[1, 2]).unwrap(), 1);
/// ```
pub fn min_start_value<T>(nums: &[T]) -> Result<T>
where
    T: PrimInt + AsPrimitive<i128>,
{
    if nums.is_empty() {
        return Err(ScanError::EmptyInput { routine: "min_start_value" });
    }

    let mut sum: i128 = 0;
    let mut lowest: i128 = 0;
    for &x in nums {
        sum += x.as_();
        lowest = lowest.min(sum);
    }

    num_traits::cast(1 - lowest).ok_or(ScanError::Unrepresentable {
        routine: "min_start_value",
    })
}
