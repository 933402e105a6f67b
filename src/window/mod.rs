//! Sliding-window scans
//!
//! Every routine here keeps a window `[left, right]` over the input and
//! moves both ends monotonically, so each element enters and leaves the
//! window at most once.

pub mod longest_ones;
pub mod longest_unique;
pub mod max_average;
pub mod min_window;

pub use longest_ones::longest_ones;
pub use longest_unique::longest_unique_substring;
pub use max_average::max_average;
pub use min_window::min_window_substring;
