//! Best single buy/sell profit

use num_traits::Num;

/// Maximum profit from buying once and selling later
///
/// Tracks the cheapest price seen so far; returns zero when no profitable
/// trade exists or `prices` is empty.
///
/// # Examples
///
/// ```
/// use scanlab::max_profit;
///
/// assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
/// assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
/// ```
pub fn max_profit<T>(prices: &[T]) -> T
where
    T: Copy + Num + PartialOrd,
{
    let Some(&first) = prices.first() else {
        return T::zero();
    };

    let mut min_price = first;
    let mut best = T::zero();

    for &price in &prices[1..] {
        if price < min_price {
            min_price = price;
        } else if price - min_price > best {
            best = price - min_price;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
        assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
        assert_eq!(max_profit(&[2, 4, 1]), 2);
    }

    #[test]
    fn test_unsigned_prices() {
        // Subtraction only happens when price >= min_price
        assert_eq!(max_profit(&[9u32, 3, 8, 1, 2]), 5);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(max_profit::<i32>(&[]), 0);
        assert_eq!(max_profit(&[10]), 0);
    }
}
