use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the observed `[min, max]` range into equal-width
/// bins and counts the values falling into each bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive
    /// end). The last bin's end is nudged past the maximum so the maximum
    /// value itself is counted.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

/// Default bin count for a dataset of `len` values: `floor(sqrt(len))`,
/// at least 1.
///
/// # Examples
///
/// ```
/// # use bootsim_stats::histogram::sqrt_bin_count;
/// assert_eq!(sqrt_bin_count(100), 10);
/// assert_eq!(sqrt_bin_count(99), 9);
/// assert_eq!(sqrt_bin_count(0), 1);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn sqrt_bin_count(len: usize) -> usize {
    ((len as f64).sqrt().floor() as usize).max(1)
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins spanning the
    /// observed value range.
    ///
    /// When every value is identical (zero range) a single bin holding all
    /// values is produced. Empty input or `num_bins == 0` yields an empty
    /// histogram.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bootsim_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let histogram = Histogram::new(&values, 3);
    /// let counts: Vec<u64> = histogram.bins.iter().map(|b| b.count).collect();
    /// assert_eq!(counts, [2, 2, 2]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / num_bins as f64;

        if bin_width <= 0.0 || !bin_width.is_finite() {
            // All observations identical: one bin covering the single value.
            return Self {
                bins: vec![HistogramBin {
                    range: min..max.next_up(),
                    count: values.len() as u64,
                }],
            };
        }

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                let start = min + bin_idx as f64 * bin_width;
                // next_up() on the last bin end so values at max are counted
                let end = if bin_idx + 1 == num_bins {
                    max.next_up()
                } else {
                    min + (bin_idx + 1) as f64 * bin_width
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &value in values {
            let idx = (((value - min) / bin_width) as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::new(&[], 5);
        assert!(histogram.bins.is_empty());
    }

    #[test]
    fn test_zero_bins() {
        let histogram = Histogram::new(&[1.0, 2.0], 0);
        assert!(histogram.bins.is_empty());
    }

    #[test]
    fn test_counts_cover_all_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let histogram = Histogram::new(&values, 4);
        assert_eq!(histogram.bins.len(), 4);
        let total: u64 = histogram.bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len() as u64);
    }

    #[test]
    fn test_maximum_value_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0];
        let histogram = Histogram::new(&values, 4);
        let last = histogram.bins.last().unwrap();
        assert!(last.range.contains(&3.0));
        assert_eq!(last.count, 1);
    }

    #[test]
    fn test_all_identical_values_collapse_to_one_bin() {
        let histogram = Histogram::new(&[5.0; 8], 4);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].count, 8);
        assert!(histogram.bins[0].range.contains(&5.0));
    }

    #[test]
    fn test_bins_are_contiguous_and_ascending() {
        let values = [0.0, 2.5, 5.0, 7.5, 10.0];
        let histogram = Histogram::new(&values, 5);
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
    }

    #[test]
    fn test_sqrt_rule_minimum_is_one() {
        assert_eq!(sqrt_bin_count(1), 1);
        assert_eq!(sqrt_bin_count(3), 1);
        assert_eq!(sqrt_bin_count(4), 2);
    }
}
