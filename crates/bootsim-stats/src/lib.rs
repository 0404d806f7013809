//! Statistical primitives for the bootsim workspace.
//!
//! This crate provides the numeric building blocks used by the resampling
//! engine and the report/plot layers:
//!
//! - **Descriptive statistics**: sample mean and the unbiased
//!   (Bessel-corrected) sample standard deviation
//! - **Histogram generation**: equal-width frequency bins with the
//!   square-root bin-count rule
//!
//! # Modules
//!
//! - [`descriptive`]: per-sample mean and standard deviation
//! - [`histogram`]: frequency distributions for visualizing data
//!
//! # Examples
//!
//! ## Computing sample statistics
//!
//! ```
//! use bootsim_stats::descriptive::SampleStats;
//!
//! let values = [2.0, 4.0, 6.0];
//! let stats = SampleStats::new(&values).unwrap();
//! assert_eq!(stats.mean, 4.0);
//! assert_eq!(stats.std_dev, 2.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use bootsim_stats::histogram::{Histogram, sqrt_bin_count};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let histogram = Histogram::new(&values, sqrt_bin_count(values.len()));
//! assert_eq!(histogram.bins.len(), 3);
//! ```

pub mod descriptive;
pub mod histogram;
