//! # scanlab: array-scan algorithms
//!
//! Pure, single-pass routines over in-memory sequences, grouped by technique.
//!
//! ## Overview
//!
//! - **Sliding window**: [`max_average`], [`longest_ones`],
//!   [`longest_unique_substring`], [`min_window_substring`]
//! - **Prefix sums**: [`running_sum`], [`min_start_value`]
//! - **Two pointers**: [`max_profit`], [`three_sum`]
//! - **Binary search**: [`search_range`]
//! - **Running-state scans**: [`single_number`], [`house_robber`],
//!   [`merge_intervals`], [`top_k_frequent`]
//! - **Parallel**: [`running_sum_parallel`] and the `batch_*` helpers, tuned
//!   by [`ScanConfig`]
//!
//! Numeric routines are generic over primitive integer types through
//! `num_traits`. Inputs are borrowed and never modified; every result is
//! freshly allocated.
//!
//! ## Usage
//!
//! ```
//! use scanlab::{max_average, min_start_value, running_sum, ScanError};
//!
//! assert_eq!(max_average(&[1, 12, -5, -6, 50, 3], 4)?, 12.75);
//! assert_eq!(running_sum(&[1, 2, 3, 4])?, vec![1, 3, 6, 10]);
//! assert_eq!(min_start_value(&[-3, 2, -3, 4, 2])?, 5);
//! # Ok::<(), ScanError>(())
//! ```

pub mod config;
pub mod error;
pub mod parallel;
pub mod prefix;
pub mod scan;
pub mod search;
pub mod two_pointer;
pub mod utils;
pub mod window;

// Re-export primary components
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use parallel::{
    batch_longest_ones, batch_max_averages, batch_min_start_values, batch_running_sums,
    running_sum_parallel,
};
pub use prefix::{min_start_value, running_sum};
pub use scan::{house_robber, merge_intervals, single_number, top_k_frequent};
pub use search::search_range;
pub use two_pointer::{max_profit, three_sum};
pub use window::{longest_ones, longest_unique_substring, max_average, min_window_substring};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_routines_are_pure() {
        let nums = [-3, 2, -3, 4, 2];
        assert_eq!(running_sum(&nums), running_sum(&nums));
        assert_eq!(min_start_value(&nums), min_start_value(&nums));
        assert_eq!(max_average(&nums, 2), max_average(&nums, 2));
        assert_eq!(longest_ones(&nums, 1), longest_ones(&nums, 1));
    }
}
