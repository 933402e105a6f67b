//! Unique zero-sum triplets

use num_traits::Num;

/// All unique triplets `[a, b, c]` from `nums` with `a + b + c == 0`
///
/// Works on a sorted copy, so the caller's slice is not reordered. Each
/// triplet is ascending and the list is in lexicographic order.
///
/// # Examples
///
/// ```
/// use scanlab::three_sum;
///
/// assert_eq!(three_sum(&[-1, 0, 1, 2, -1, -4]), vec![[-1, -1, 2], [-1, 0, 1]]);
/// ```
pub fn three_sum<T>(nums: &[T]) -> Vec<[T; 3]>
where
    T: Copy + Num + Ord,
{
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut result = Vec::new();
    let n = sorted.len();
    if n < 3 {
        return result;
    }

    for i in 0..n - 2 {
        // Skip duplicate first values
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }

        let mut left = i + 1;
        let mut right = n - 1;

        while left < right {
            let total = sorted[i] + sorted[left] + sorted[right];

            if total == T::zero() {
                result.push([sorted[i], sorted[left], sorted[right]]);

                while left < right && sorted[left] == sorted[left + 1] {
                    left += 1;
                }
                while left < right && sorted[right] == sorted[right - 1] {
                    right -= 1;
                }
                left += 1;
                right -= 1;
            } else if total < T::zero() {
                left += 1;
            } else {
                right -= 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        let nums = [-1, 0, 1, 2, -1, -4];
        assert_eq!(three_sum(&nums), vec![[-1, -1, 2], [-1, 0, 1]]);
        // Input order preserved
        assert_eq!(nums, [-1, 0, 1, 2, -1, -4]);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(three_sum(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
    }

    #[test]
    fn test_no_triplets() {
        assert!(three_sum(&[0, 1, 1]).is_empty());
        assert!(three_sum(&[1, 2]).is_empty());
        assert!(three_sum::<i64>(&[]).is_empty());
    }

    #[test]
    fn test_many_duplicates() {
        let nums = [-2, 0, 0, 2, 2, -2, 1, -1, 1];
        assert_eq!(
            three_sum(&nums),
            vec![[-2, 0, 2], [-2, 1, 1], [-1, 0, 1]]
        );
    }
}
