//! Two-pointer scans over price series and sorted sequences

pub mod max_profit;
pub mod three_sum;

pub use max_profit::max_profit;
pub use three_sum::three_sum;
