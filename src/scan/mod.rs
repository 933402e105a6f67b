//! Single-pass scans that keep a small running state
//!
//! XOR folding, a two-value dynamic-programming sweep, a sorted interval
//! sweep and a frequency count with a bounded heap.

pub mod house_robber;
pub mod merge_intervals;
pub mod single_number;
pub mod top_k_frequent;

pub use house_robber::house_robber;
pub use merge_intervals::merge_intervals;
pub use single_number::single_number;
pub use top_k_frequent::top_k_frequent;
