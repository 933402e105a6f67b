//! Configuration for the parallel scan routines

/// Tuning knobs for [`running_sum_parallel`](crate::running_sum_parallel)
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Inputs shorter than this are scanned sequentially
    pub parallel_threshold: usize,

    /// Lower bound on the length of each parallel chunk
    pub min_chunk_len: usize,

    /// Target number of chunks (normally one per core)
    pub n_threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 32_768,
            min_chunk_len: 4_096,
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

impl ScanConfig {
    /// A config that never takes the parallel path
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Default thresholds with an explicit chunk count
    pub fn with_threads(n_threads: usize) -> Self {
        Self {
            n_threads: n_threads.max(1),
            ..Self::default()
        }
    }

    /// Whether an input of length `len` should be split across threads
    pub fn use_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold && self.n_threads > 1
    }

    /// Chunk length for an input of length `len`
    ///
    /// Never returns zero, so it is always safe to pass to `par_chunks`.
    pub fn chunk_len(&self, len: usize) -> usize {
        let per_thread = len.div_ceil(self.n_threads.max(1));
        per_thread.max(self.min_chunk_len).max(1)
    }
}
