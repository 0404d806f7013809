use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a whole resampling run.
///
/// This is a 128-bit (16-byte) seed from which every `(sample size,
/// replication)` task derives its own random number generator. Using the
/// same seed reproduces the same draws, enabling:
///
/// - Reproducible runs for debugging and auditing
/// - Deterministic testing
/// - Parallel replication without shared RNG state
///
/// The seed is serialized as a 32-character hex string, and the same format
/// is accepted on the command line via [`FromStr`].
///
/// # Example
///
/// ```
/// use bootsim_engine::RunSeed;
/// use rand::Rng as _;
///
/// // Generate a random seed
/// let seed: RunSeed = rand::rng().random();
///
/// // The same task always sees the same stream
/// let mut a = seed.replication_rng(10, 3);
/// let mut b = seed.replication_rng(10, 3);
/// assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSeed([u8; 16]);

impl RunSeed {
    /// Builds a seed from raw bytes. Mainly useful for tests and fixtures;
    /// runs normally draw a seed with `rng.random()` or parse one from hex.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Derives the RNG for one `(sample_size, replication)` task.
    ///
    /// State and stream are mixed through SplitMix64 so that nearby task
    /// indices do not produce correlated generators. Distinct tasks get
    /// statistically independent streams; the same task always gets the
    /// same stream, which keeps runs reproducible regardless of how tasks
    /// are scheduled across threads.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn replication_rng(&self, sample_size: usize, replication: usize) -> Pcg32 {
        let base = u128::from_be_bytes(self.0);
        let lo = base as u64;
        let hi = (base >> 64) as u64;
        let state = split_mix64(lo ^ split_mix64(sample_size as u64));
        let stream = split_mix64(hi ^ replication as u64);
        Pcg32::new(state, stream)
    }
}

/// SplitMix64 mixing step; see <https://xoshiro.di.unimi.it/splitmix64.c>.
fn split_mix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl fmt::Display for RunSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseRunSeedError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    Length { len: usize },
    #[display("invalid seed: not a hex number")]
    Digit,
}

impl FromStr for RunSeed {
    type Err = ParseRunSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseRunSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseRunSeedError::Digit)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for RunSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RunSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `RunSeed` values with `rng.random()`.
impl Distribution<RunSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RunSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RunSeed(seed)
    }
}
