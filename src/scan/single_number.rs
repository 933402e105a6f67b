//! The unpaired element of a sequence

use num_traits::PrimInt;

/// XOR of every element
///
/// When every value but one appears exactly twice, the pairs cancel and the
/// unpaired value remains. An empty slice yields zero.
///
/// # Examples
///
/// ```
/// use scanlab::single_number;
///
/// assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
/// ```
pub fn single_number<T: PrimInt>(nums: &[T]) -> T {
    nums.iter().fold(T::zero(), |acc, &x| acc ^ x)
}
