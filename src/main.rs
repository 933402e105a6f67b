use scanlab::{
    house_robber, longest_ones, longest_unique_substring, max_average, max_profit,
    merge_intervals, min_start_value, min_window_substring, running_sum, running_sum_parallel,
    search_range, single_number, three_sum, top_k_frequent, ScanConfig, ScanError,
};

fn main() -> Result<(), ScanError> {
    println!("scanlab {}: array-scan routines", scanlab::VERSION);

    // Sliding window
    let nums = [1, 12, -5, -6, 50, 3];
    println!("\nSliding window:");
    println!("  max_average({:?}, 4) = {}", nums, max_average(&nums, 4)?);

    let bits = [1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0];
    println!("  longest_ones({:?}, 2) = {}", bits, longest_ones(&bits, 2)?);
    println!(
        "  longest_unique_substring(\"abcabcbb\") = {}",
        longest_unique_substring("abcabcbb")
    );
    println!(
        "  min_window_substring(\"ADOBECODEBANC\", \"ABC\") = {:?}",
        min_window_substring("ADOBECODEBANC", "ABC")
    );

    // Prefix sums
    let nums = [1, 2, 3, 4];
    println!("\nPrefix sums:");
    println!("  running_sum({:?}) = {:?}", nums, running_sum(&nums)?);
    let nums = [-3, 2, -3, 4, 2];
    println!("  min_start_value({:?}) = {}", nums, min_start_value(&nums)?);

    // Two pointers and search
    let prices = [7, 1, 5, 3, 6, 4];
    println!("\nTwo pointers:");
    println!("  max_profit({:?}) = {}", prices, max_profit(&prices));
    let nums = [-1, 0, 1, 2, -1, -4];
    println!("  three_sum({:?}) = {:?}", nums, three_sum(&nums));
    let sorted = [5, 7, 7, 8, 8, 10];
    println!("  search_range({:?}, 8) = {:?}", sorted, search_range(&sorted, &8));

    // Running-state scans
    println!("\nRunning-state scans:");
    println!("  single_number([4, 1, 2, 1, 2]) = {}", single_number(&[4, 1, 2, 1, 2]));
    println!("  house_robber([2, 7, 9, 3, 1]) = {}", house_robber(&[2, 7, 9, 3, 1]));
    let intervals = [(1, 3), (2, 6), (8, 10), (15, 18)];
    println!(
        "  merge_intervals({:?}) = {:?}",
        intervals,
        merge_intervals(&intervals)
    );
    println!(
        "  top_k_frequent([1, 1, 1, 2, 2, 3], 2) = {:?}",
        top_k_frequent(&[1, 1, 1, 2, 2, 3], 2)
    );

    // Parallel prefix sum on a larger input
    let config = ScanConfig::default();
    let big: Vec<i64> = (1..=1_000_000).collect();
    let sums = running_sum_parallel(&big, &config)?;
    println!("\nParallel running sum:");
    println!("  Threads: {}", config.n_threads);
    println!("  Chunk length: {}", config.chunk_len(big.len()));
    println!("  Total of 1..=1_000_000: {:?}", sums.last());

    Ok(())
}
