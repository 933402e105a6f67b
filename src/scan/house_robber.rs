//! Maximum sum of non-adjacent elements

use num_traits::Num;

/// Largest total obtainable from `nums` without taking two neighbours
///
/// Keeps the best totals ending one and two positions back; each step
/// either skips the current element or takes it on top of the older total.
/// Negative elements are never worth taking, so an empty or all-negative
/// input yields zero.
///
/// # Examples
///
/// ```
/// use scanlab::house_robber;
///
/// assert_eq!(house_robber(&[2, 7, 9, 3, 1]), 12);
/// ```
pub fn house_robber<T>(nums: &[T]) -> T
where
    T: Copy + Num + PartialOrd,
{
    let mut two_back = T::zero();
    let mut one_back = T::zero();

    for &x in nums {
        let take = two_back + x;
        let current = if take > one_back { take } else { one_back };
        two_back = one_back;
        one_back = current;
    }

    one_back
}
