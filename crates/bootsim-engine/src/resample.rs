use rand::Rng;

use crate::SampleError;

/// Draws `sample_size` values from `values`, independently and uniformly at
/// random, with replacement.
///
/// Each position of the result is chosen without regard to the others, so
/// the same observation may appear multiple times and `sample_size` may
/// exceed `values.len()`. The result is in draw order. The only state
/// touched is the caller's RNG; the input is never mutated.
///
/// # Errors
///
/// * [`SampleError::InvalidSampleSize`] when `sample_size` is zero
/// * [`SampleError::EmptyDataset`] when `values` is empty
///
/// # Examples
///
/// ```
/// use bootsim_engine::{RunSeed, resample};
///
/// let seed = RunSeed::from_bytes([3; 16]);
/// let mut rng = seed.replication_rng(4, 0);
/// let sample = resample::draw(&[1.0, 2.0, 3.0], 4, &mut rng)?;
/// assert_eq!(sample.len(), 4);
/// assert!(sample.iter().all(|v| [1.0, 2.0, 3.0].contains(v)));
/// # Ok::<(), bootsim_engine::SampleError>(())
/// ```
pub fn draw<R>(values: &[f64], sample_size: usize, rng: &mut R) -> Result<Vec<f64>, SampleError>
where
    R: Rng + ?Sized,
{
    if sample_size < 1 {
        return Err(SampleError::InvalidSampleSize { size: sample_size });
    }
    if values.is_empty() {
        return Err(SampleError::EmptyDataset);
    }
    Ok((0..sample_size)
        .map(|_| values[rng.random_range(0..values.len())])
        .collect())
}
