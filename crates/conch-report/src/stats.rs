//! Descriptive statistics over nanosecond duration samples.

/// Arithmetic mean, truncated to whole nanoseconds. Zero for an empty slice.
pub fn mean(samples: &[i64]) -> i64 {
    if samples.is_empty() {
        return 0;
    }
    let sum: i128 = samples.iter().map(|&s| s as i128).sum();
    (sum / samples.len() as i128) as i64
}

/// Sorted-middle median; the two middle samples are averaged for even
/// counts. Zero for an empty slice.
pub fn median(samples: &[i64]) -> i64 {
    if samples.is_empty() {
        return 0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        ((sorted[mid - 1] as i128 + sorted[mid] as i128) / 2) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_samples_yield_zero() {
        assert_eq!(mean(&[]), 0);
        assert_eq!(median(&[]), 0);
    }

    #[test]
    fn single_sample_is_its_own_mean_and_median() {
        assert_eq!(mean(&[42]), 42);
        assert_eq!(median(&[42]), 42);
    }

    #[test]
    fn mean_is_arithmetic_mean() {
        assert_eq!(mean(&[10, 20, 30]), 20);
        assert_eq!(mean(&[1, 2]), 1); // truncated
    }

    #[test]
    fn median_odd_is_middle_of_sorted() {
        assert_eq!(median(&[30, 10, 20]), 20);
    }

    #[test]
    fn median_even_averages_two_middles() {
        assert_eq!(median(&[40, 10, 20, 30]), 25);
    }

    #[test]
    fn mean_does_not_overflow_on_large_samples() {
        let hour_ns = 3_600_000_000_000_i64;
        let samples = vec![hour_ns * 2000; 1000];
        assert_eq!(mean(&samples), hour_ns * 2000);
    }
}
