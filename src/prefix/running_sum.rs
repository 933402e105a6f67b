//! Inclusive prefix sums

use num_traits::Num;

use crate::error::{Result, ScanError};

/// Returns a new vector where element `i` is `nums[0] + ... + nums[i]`
///
/// The input is left untouched.
///
/// # Errors
///
/// [`ScanError::EmptyInput`] for an empty slice.
///
/// # Examples
///
/// ```
/// use scanlab::running_sum;
///
/// assert_eq!(running_sum(&[1, 2, 3, 4]).unwrap(), vec![1, 3, 6, 10]);
/// ```
pub fn running_sum<T>(nums: &[T]) -> Result<Vec<T>>
where
    T: Copy + Num,
{
    let (&first, rest) = nums
        .split_first()
        .ok_or(ScanError::EmptyInput { routine: "running_sum" })?;

    let mut ans = Vec::with_capacity(nums.len());
    ans.push(first);

    let mut acc = first;
    for &x in rest {
        acc = acc + x;
        ans.push(acc);
    }

    Ok(ans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        assert_eq!(running_sum(&[1, 2, 3, 4]), Ok(vec![1, 3, 6, 10]));
    }

    #[test]
    fn test_ones_and_negatives() {
        assert_eq!(running_sum(&[1, 1, 1, 1, 1]), Ok(vec![1, 2, 3, 4, 5]));
        assert_eq!(running_sum(&[3i64, -1, -2, 10]), Ok(vec![3, 2, 0, 10]));
    }

    #[test]
    fn test_single_element_is_copy() {
        let nums = [42u64];
        assert_eq!(running_sum(&nums), Ok(vec![42]));
    }

    #[test]
    fn test_input_untouched() {
        let nums = vec![5, 6, 7];
        let _ = running_sum(&nums);
        assert_eq!(nums, vec![5, 6, 7]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            running_sum::<i32>(&[]),
            Err(ScanError::EmptyInput { routine: "running_sum" })
        );
    }
}
