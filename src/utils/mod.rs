//! Small helpers shared by the parallel scans

use num_traits::Num;

/// Computes an exclusive prefix sum (scan) of `input`
///
/// The result has `input.len() + 1` entries: it starts at zero and its last
/// entry is the total of the input.
pub fn exclusive_scan<T>(input: &[T]) -> Vec<T>
where
    T: Copy + Num,
{
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = T::zero();

    result.push(sum); // First element is always 0

    for &val in input {
        sum = sum + val;
        result.push(sum);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_scan() {
        let input = vec![1, 2, 3, 4];
        let expected = vec![0, 1, 3, 6, 10];
        assert_eq!(exclusive_scan(&input), expected);

        let input = vec![0, 0, 5, 0];
        let expected = vec![0, 0, 0, 5, 5];
        assert_eq!(exclusive_scan(&input), expected);
    }

    #[test]
    fn test_exclusive_scan_empty_and_negative() {
        assert_eq!(exclusive_scan::<i32>(&[]), vec![0]);
        assert_eq!(exclusive_scan(&[-2i64, 5, -1]), vec![0, -2, 3, 2]);
    }
}
