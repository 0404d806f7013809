//! Monte Carlo bootstrap resampling engine.
//!
//! This crate estimates the sampling distribution of a statistic by drawing
//! many independent samples, with replacement, from a fixed in-memory
//! dataset:
//!
//! 1. Load observations into a [`Dataset`] (non-empty by construction)
//! 2. For each configured sample size, [`replicate`] draws the configured
//!    number of samples and computes each sample's mean and unbiased
//!    standard deviation
//! 3. [`summarize`] reduces the per-replication statistics into one
//!    [`SummaryRow`] per sample size
//!
//! Randomness is injected: every `(sample size, replication)` task derives
//! its own [`rand_pcg::Pcg32`] stream from a [`RunSeed`], so a run is
//! reproducible from its seed alone and independent of thread scheduling.
//!
//! # Example
//!
//! ```
//! use bootsim_engine::{Dataset, RunSeed, replicate, summarize};
//!
//! let dataset = Dataset::new(vec![10.0, 20.0, 30.0, 40.0, 50.0])?;
//! let seed = RunSeed::from_bytes([7; 16]);
//!
//! let result = replicate(&dataset, 2, 5, seed)?;
//! assert_eq!(result.replications.len(), 5);
//!
//! let summary = summarize(std::slice::from_ref(&result));
//! assert_eq!(summary[0].sample_size, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{aggregate::*, dataset::*, replicate::*, resample::*, seed::*};

pub mod aggregate;
pub mod dataset;
pub mod replicate;
pub mod resample;
pub mod seed;

/// Errors from drawing a single bootstrap sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SampleError {
    /// The dataset holds no observations, so sampling is undefined.
    #[display("dataset contains no observations")]
    EmptyDataset,
    /// The requested sample size is zero.
    #[display("sample size must be at least 1, got {size}")]
    InvalidSampleSize { size: usize },
}

/// Errors from running a batch of replications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplicationError {
    /// The requested replication count is zero.
    #[display("replication count must be at least 1, got {count}")]
    InvalidReplicationCount { count: usize },
    /// A sample could not be drawn.
    #[display("{_0}")]
    Sample(SampleError),
}

impl From<SampleError> for ReplicationError {
    fn from(err: SampleError) -> Self {
        Self::Sample(err)
    }
}
