// Prefix-sum routines

pub mod min_start_value;
pub mod running_sum;

pub use min_start_value::min_start_value;
pub use running_sum::running_sum;
