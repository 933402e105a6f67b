//! Error type shared by every scan routine

use thiserror::Error;

/// Invalid-argument conditions rejected by the scan routines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A routine that needs at least one element received an empty slice
    #[error("{routine}: input sequence must not be empty")]
    EmptyInput { routine: &'static str },

    /// Window size outside `1..=len`
    #[error("window size {k} is outside 1..={len}")]
    WindowOutOfRange { k: usize, len: usize },

    /// Negative flip budget
    #[error("flip budget must be non-negative, got {k}")]
    NegativeFlipBudget { k: i64 },

    /// The input admits an answer, but not one that fits in the element type
    #[error("{routine}: result does not fit in the element type")]
    Unrepresentable { routine: &'static str },
}

impl ScanError {
    /// True for every variant: all of them describe a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ScanError::EmptyInput { .. }
                | ScanError::WindowOutOfRange { .. }
                | ScanError::NegativeFlipBudget { .. }
                | ScanError::Unrepresentable { .. }
        )
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScanError>;
