use bootsim_stats::descriptive;

use crate::SampleSizeResult;

/// Summary of one sample size's replications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    /// The sample size the replications were drawn with.
    pub sample_size: usize,
    /// Mean of the replication means.
    pub avg_mean: f64,
    /// Mean of the replication standard deviations.
    pub avg_std_dev: f64,
}

/// Reduces each [`SampleSizeResult`] to one [`SummaryRow`], preserving the
/// input order.
///
/// A `NaN` standard deviation in any replication (a size-one sample)
/// propagates into that row's `avg_std_dev` rather than being excluded:
/// dropping degenerate replications would silently change the number of
/// values averaged. Empty input yields empty output.
///
/// # Examples
///
/// ```
/// use bootsim_engine::{Dataset, RunSeed, replicate_sets, summarize};
///
/// let dataset = Dataset::new(vec![1.0, 2.0, 3.0])?;
/// let results = replicate_sets(&dataset, &[2, 4], 10, RunSeed::from_bytes([5; 16]))?;
/// let summary = summarize(&results);
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary[0].sample_size, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn summarize(results: &[SampleSizeResult]) -> Vec<SummaryRow> {
    results
        .iter()
        .map(|result| {
            let avg_mean = descriptive::mean(result.replications.iter().map(|r| r.mean))
                .unwrap_or(f64::NAN);
            let avg_std_dev = descriptive::mean(result.replications.iter().map(|r| r.std_dev))
                .unwrap_or(f64::NAN);
            SummaryRow {
                sample_size: result.sample_size,
                avg_mean,
                avg_std_dev,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Replication;

    fn replication(mean: f64, std_dev: f64) -> Replication {
        Replication {
            values: vec![],
            mean,
            std_dev,
        }
    }

    fn result(sample_size: usize, stats: &[(f64, f64)]) -> SampleSizeResult {
        SampleSizeResult {
            sample_size,
            replications: stats
                .iter()
                .map(|&(mean, std_dev)| replication(mean, std_dev))
                .collect(),
        }
    }

    #[test]
    fn test_row_averages_the_replication_means() {
        let summary = summarize(&[result(
            10,
            &[(1.0, 0.5), (2.0, 1.5), (3.0, 2.5)],
        )]);
        assert_eq!(summary[0].avg_mean, 2.0);
        assert_eq!(summary[0].avg_std_dev, 1.5);
    }

    #[test]
    fn test_one_row_per_result_in_input_order() {
        let summary = summarize(&[
            result(50, &[(1.0, 1.0)]),
            result(5, &[(2.0, 2.0)]),
            result(20, &[(3.0, 3.0)]),
        ]);
        let sizes: Vec<usize> = summary.iter().map(|row| row.sample_size).collect();
        assert_eq!(sizes, [50, 5, 20]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(summarize(&[]), vec![]);
    }

    #[test]
    fn test_nan_std_dev_propagates_to_the_row() {
        let summary = summarize(&[result(1, &[(1.0, f64::NAN), (2.0, f64::NAN)])]);
        assert_eq!(summary[0].avg_mean, 1.5);
        assert!(summary[0].avg_std_dev.is_nan());
    }

    #[test]
    fn test_single_nan_among_finite_std_devs_still_propagates() {
        let summary = summarize(&[result(3, &[(1.0, 1.0), (2.0, f64::NAN)])]);
        assert!(summary[0].avg_std_dev.is_nan());
    }
}
