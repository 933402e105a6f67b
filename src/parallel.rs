//! # Parallel scans
//!
//! This module provides data-parallel versions of the scan routines using
//! Rayon: a chunked prefix sum for one long input, and batch evaluation of
//! the sequential routines over many independent inputs.

use num_traits::{AsPrimitive, Num, PrimInt, Zero};
use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::prefix::{min_start_value, running_sum};
use crate::utils::exclusive_scan;
use crate::window::{longest_ones, max_average};

/// Inclusive prefix sums computed in parallel chunks
///
/// Produces exactly what [`running_sum`] produces. Short inputs (below
/// `config.parallel_threshold`) go straight to the sequential routine.
///
/// The long path runs in three phases:
/// 1. Each chunk is scanned locally in parallel.
/// 2. Chunk totals are exclusive-scanned to get one offset per chunk.
/// 3. Every chunk after the first adds its offset in parallel.
///
/// # Examples
///
/// ```
/// use scanlab::{running_sum_parallel, ScanConfig};
///
/// let config = ScanConfig { parallel_threshold: 0, min_chunk_len: 2, n_threads: 4 };
/// let sums = running_sum_parallel(&[1, 2, 3, 4, 5], &config).unwrap();
/// assert_eq!(sums, vec![1, 3, 6, 10, 15]);
/// ```
pub fn running_sum_parallel<T>(nums: &[T], config: &ScanConfig) -> Result<Vec<T>>
where
    T: Copy + Num + Send + Sync,
{
    if nums.is_empty() || !config.use_parallel(nums.len()) {
        return running_sum(nums);
    }

    let chunk_len = config.chunk_len(nums.len());
    let mut out = nums.to_vec();

    // 1. Local scans
    out.par_chunks_mut(chunk_len).for_each(|chunk| {
        let mut acc = T::zero();
        for x in chunk.iter_mut() {
            acc = acc + *x;
            *x = acc;
        }
    });

    // 2. Chunk offsets
    let totals: Vec<T> = out
        .chunks(chunk_len)
        .map(|chunk| chunk.last().copied().unwrap_or_else(T::zero))
        .collect();
    let offsets = exclusive_scan(&totals);

    // 3. Fix-up; the first chunk's offset is zero
    out.par_chunks_mut(chunk_len)
        .zip(offsets.par_iter())
        .skip(1)
        .for_each(|(chunk, &offset)| {
            for x in chunk.iter_mut() {
                *x = *x + offset;
            }
        });

    Ok(out)
}

// Rayon's `Result` collector may report any failing item; callers expect
// the first one in input order.
fn collect_in_order<R>(results: Vec<Result<R>>) -> Result<Vec<R>> {
    results.into_iter().collect()
}

/// [`running_sum`] over many inputs in parallel, preserving input order
pub fn batch_running_sums<T, S>(inputs: &[S]) -> Result<Vec<Vec<T>>>
where
    S: AsRef<[T]> + Sync,
    T: Copy + Num + Send + Sync,
{
    collect_in_order(
        inputs
            .par_iter()
            .map(|nums| running_sum(nums.as_ref()))
            .collect(),
    )
}

/// [`min_start_value`] over many inputs in parallel
pub fn batch_min_start_values<T, S>(inputs: &[S]) -> Result<Vec<T>>
where
    S: AsRef<[T]> + Sync,
    T: PrimInt + AsPrimitive<i128> + Send + Sync,
{
    collect_in_order(
        inputs
            .par_iter()
            .map(|nums| min_start_value(nums.as_ref()))
            .collect(),
    )
}

/// [`max_average`] with a shared window size over many inputs in parallel
pub fn batch_max_averages<T, S>(inputs: &[S], k: usize) -> Result<Vec<f64>>
where
    S: AsRef<[T]> + Sync,
    T: PrimInt + AsPrimitive<i128> + Send + Sync,
{
    collect_in_order(
        inputs
            .par_iter()
            .map(|nums| max_average(nums.as_ref(), k))
            .collect(),
    )
}

/// [`longest_ones`] with a shared flip budget over many inputs in parallel
pub fn batch_longest_ones<T, S>(inputs: &[S], k: i64) -> Result<Vec<usize>>
where
    S: AsRef<[T]> + Sync,
    T: Zero + Sync,
{
    collect_in_order(
        inputs
            .par_iter()
            .map(|nums| longest_ones(nums.as_ref(), k))
            .collect(),
    )
}
