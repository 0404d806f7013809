use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::util;

/// A full run configuration, loaded from a JSON file.
///
/// Field names mirror the config file keys: `sample_size` is the number of
/// replications drawn per entry of `sets`, and each entry of `sets` is one
/// sample size to evaluate.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tabular text file holding the observations.
    pub data_path: PathBuf,
    /// Name of the column to read observations from.
    pub data_column: String,
    /// Number of replications to draw per sample size.
    pub sample_size: usize,
    /// The sample sizes to evaluate, in evaluation order.
    pub sets: Vec<usize>,
    /// Labeling templates for rendered charts.
    pub templates: Templates,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Templates {
    /// Labels for the replication-mean histograms.
    pub means: PlotTemplate,
}

/// Title and axis labels for one chart kind.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotTemplate {
    pub title: String,
    pub x: String,
    pub y: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("'sets' must name at least one sample size")]
    NoSampleSizes,
    #[display("'sets' entries must be at least 1, got {size}")]
    InvalidSampleSize { size: usize },
    #[display("'sample_size' must be at least 1, got {count}")]
    InvalidReplicationCount { count: usize },
}

impl Config {
    /// Checks the invariants the engine relies on. Run once at load so a
    /// bad configuration is reported before any computation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sets.is_empty() {
            return Err(ConfigError::NoSampleSizes);
        }
        if let Some(&size) = self.sets.iter().find(|&&sample_size| sample_size < 1) {
            return Err(ConfigError::InvalidSampleSize { size });
        }
        if self.sample_size < 1 {
            return Err(ConfigError::InvalidReplicationCount {
                count: self.sample_size,
            });
        }
        Ok(())
    }
}

pub fn load<P>(path: P) -> anyhow::Result<Config>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let config: Config = util::read_json_file("config", path)?;
    config
        .validate()
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_json(sample_size: usize, sets: &str) -> String {
        format!(
            r#"{{
                "data_path": "stats.csv",
                "data_column": "gameswon",
                "sample_size": {sample_size},
                "sets": {sets},
                "templates": {{
                    "means": {{
                        "title": "Distribution of Sample Means",
                        "x": "Sample Mean",
                        "y": "Frequency"
                    }}
                }}
            }}"#
        )
    }

    fn parse(sample_size: usize, sets: &str) -> Config {
        serde_json::from_str(&config_json(sample_size, sets)).unwrap()
    }

    #[test]
    fn test_parses_all_fields() {
        let config = parse(1000, "[5, 20, 80]");
        assert_eq!(config.data_path, PathBuf::from("stats.csv"));
        assert_eq!(config.data_column, "gameswon");
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.sets, [5, 20, 80]);
        assert_eq!(config.templates.means.title, "Distribution of Sample Means");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_sets() {
        let config = parse(1000, "[]");
        assert_eq!(config.validate(), Err(ConfigError::NoSampleSizes));
    }

    #[test]
    fn test_rejects_zero_sample_size_entry() {
        let config = parse(1000, "[5, 0, 80]");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSampleSize { size: 0 })
        );
    }

    #[test]
    fn test_rejects_zero_replication_count() {
        let config = parse(0, "[5]");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidReplicationCount { count: 0 })
        );
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let result = serde_json::from_str::<Config>(r#"{"sample_size": 10}"#);
        assert!(result.is_err());
    }
}
