use std::thread;

use bootsim_stats::descriptive::SampleStats;

use crate::{Dataset, ReplicationError, RunSeed, SampleError, resample};

/// One bootstrap draw and its derived statistics.
///
/// `std_dev` is the unbiased sample standard deviation; for a sample of
/// size 1 it is `NaN` (see [`SampleStats`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Replication {
    /// The drawn values, in draw order.
    pub values: Vec<f64>,
    /// Arithmetic mean of the drawn values.
    pub mean: f64,
    /// Unbiased sample standard deviation of the drawn values.
    pub std_dev: f64,
}

/// All replications drawn for a single sample size.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSizeResult {
    /// The sample size every replication was drawn with.
    pub sample_size: usize,
    /// Exactly the configured number of replications, in replication order.
    pub replications: Vec<Replication>,
}

/// Draws `count` independent samples of `sample_size` values from the
/// dataset and computes each sample's mean and standard deviation.
///
/// Replications run in parallel across scoped worker threads. Each
/// replication derives its own RNG from `(seed, sample_size, index)`, so
/// the result depends only on the inputs, never on scheduling.
///
/// # Errors
///
/// * [`ReplicationError::InvalidReplicationCount`] when `count` is zero
/// * [`ReplicationError::Sample`] when `sample_size` is zero
///
/// Both are raised before any sample is drawn.
pub fn replicate(
    dataset: &Dataset,
    sample_size: usize,
    count: usize,
    seed: RunSeed,
) -> Result<SampleSizeResult, ReplicationError> {
    validate(&[sample_size], count)?;
    Ok(replicate_validated(dataset, sample_size, count, seed))
}

/// Runs [`replicate`] for every sample size in `sets`, in order.
///
/// All sample sizes and the replication count are validated up front, so an
/// invalid entry anywhere in `sets` fails the whole run before the first
/// draw rather than partway through.
pub fn replicate_sets(
    dataset: &Dataset,
    sets: &[usize],
    count: usize,
    seed: RunSeed,
) -> Result<Vec<SampleSizeResult>, ReplicationError> {
    validate(sets, count)?;
    Ok(sets
        .iter()
        .map(|&sample_size| replicate_validated(dataset, sample_size, count, seed))
        .collect())
}

fn validate(sets: &[usize], count: usize) -> Result<(), ReplicationError> {
    if count < 1 {
        return Err(ReplicationError::InvalidReplicationCount { count });
    }
    if let Some(&size) = sets.iter().find(|&&sample_size| sample_size < 1) {
        return Err(SampleError::InvalidSampleSize { size }.into());
    }
    Ok(())
}

fn replicate_validated(
    dataset: &Dataset,
    sample_size: usize,
    count: usize,
    seed: RunSeed,
) -> SampleSizeResult {
    let num_workers = thread::available_parallelism()
        .map_or(1, usize::from)
        .min(count);
    let per_worker = count.div_ceil(num_workers);

    let replications = thread::scope(|s| {
        let handles = (0..count)
            .step_by(per_worker)
            .map(|start| {
                let end = (start + per_worker).min(count);
                s.spawn(move || {
                    (start..end)
                        .map(|index| run_replication(dataset, sample_size, index, seed))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        // Joining in spawn order keeps replications in index order.
        let mut replications = Vec::with_capacity(count);
        for handle in handles {
            replications.extend(handle.join().expect("replication worker panicked"));
        }
        replications
    });

    SampleSizeResult {
        sample_size,
        replications,
    }
}

fn run_replication(
    dataset: &Dataset,
    sample_size: usize,
    index: usize,
    seed: RunSeed,
) -> Replication {
    let mut rng = seed.replication_rng(sample_size, index);
    let values = resample::draw(dataset.values(), sample_size, &mut rng)
        .expect("sample size and dataset are validated before any draw");
    let stats = SampleStats::new(&values).expect("a draw holds at least one value");
    Replication {
        values,
        mean: stats.mean,
        std_dev: stats.std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![10.0, 20.0, 30.0, 40.0, 50.0]).unwrap()
    }

    fn seed() -> RunSeed {
        RunSeed::from_bytes([42; 16])
    }

    #[test]
    fn test_result_holds_exactly_count_replications() {
        for count in [1, 2, 13, 64] {
            let result = replicate(&dataset(), 3, count, seed()).unwrap();
            assert_eq!(result.replications.len(), count);
        }
    }

    #[test]
    fn test_every_replication_holds_exactly_sample_size_values() {
        let result = replicate(&dataset(), 7, 20, seed()).unwrap();
        assert!(result.replications.iter().all(|r| r.values.len() == 7));
    }

    #[test]
    fn test_replication_stats_match_their_values() {
        let result = replicate(&dataset(), 4, 10, seed()).unwrap();
        for replication in &result.replications {
            let stats = SampleStats::new(&replication.values).unwrap();
            assert_eq!(replication.mean, stats.mean);
            assert_eq!(replication.std_dev, stats.std_dev);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_same_result() {
        let a = replicate(&dataset(), 2, 5, seed()).unwrap();
        let b = replicate(&dataset(), 2, 5, seed()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_produce_different_draws() {
        let a = replicate(&dataset(), 5, 5, RunSeed::from_bytes([1; 16])).unwrap();
        let b = replicate(&dataset(), 5, 5, RunSeed::from_bytes([2; 16])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_size_one_always_yields_nan_std_dev() {
        let result = replicate(&dataset(), 1, 50, seed()).unwrap();
        assert!(result.replications.iter().all(|r| r.std_dev.is_nan()));
    }

    #[test]
    fn test_zero_replication_count_is_rejected() {
        assert_eq!(
            replicate(&dataset(), 3, 0, seed()),
            Err(ReplicationError::InvalidReplicationCount { count: 0 })
        );
    }

    #[test]
    fn test_zero_sample_size_is_rejected() {
        assert_eq!(
            replicate(&dataset(), 0, 3, seed()),
            Err(ReplicationError::Sample(SampleError::InvalidSampleSize {
                size: 0
            }))
        );
    }

    #[test]
    fn test_replicate_sets_preserves_configuration_order() {
        let results = replicate_sets(&dataset(), &[30, 5, 12], 4, seed()).unwrap();
        let sizes: Vec<usize> = results.iter().map(|r| r.sample_size).collect();
        assert_eq!(sizes, [30, 5, 12]);
    }

    #[test]
    fn test_replicate_sets_rejects_any_invalid_sample_size_up_front() {
        assert_eq!(
            replicate_sets(&dataset(), &[5, 0, 12], 4, seed()),
            Err(ReplicationError::Sample(SampleError::InvalidSampleSize {
                size: 0
            }))
        );
    }

    #[test]
    fn test_replicate_and_replicate_sets_agree() {
        let alone = replicate(&dataset(), 6, 8, seed()).unwrap();
        let in_sets = replicate_sets(&dataset(), &[3, 6], 8, seed()).unwrap();
        assert_eq!(in_sets[1], alone);
    }
}
