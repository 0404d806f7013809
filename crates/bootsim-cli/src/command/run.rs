use std::{fs, path::PathBuf};

use anyhow::Context as _;
use bootsim_engine::{Dataset, RunSeed, replicate_sets, summarize};
use chrono::{DateTime, Utc};
use rand::Rng as _;
use serde::Serialize;

use crate::{config, data, plot, report, util};

const DEFAULT_CONFIG_PATH: &str = "config.json";
const DEFAULT_OUTPUT_ROOT: &str = "bin";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    /// Run configuration file path
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Directory under which the timestamped run directory is created
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,
    /// 32-character hex seed; omit for a random, recorded seed
    #[arg(long)]
    seed: Option<RunSeed>,
}

impl Default for RunArg {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            seed: None,
        }
    }
}

/// Everything needed to reproduce a run, recorded next to its artifacts.
#[derive(Debug, Clone, Serialize)]
struct RunManifest {
    created_at: DateTime<Utc>,
    seed: RunSeed,
    sample_size: usize,
    sets: Vec<usize>,
    data_path: PathBuf,
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let RunArg {
        config,
        output_root,
        seed,
    } = arg;

    let config = config::load(config)?;
    let observations = data::load_dataset(&config.data_path, &config.data_column)?;
    eprintln!(
        "Loaded {} observations from {}",
        observations.len(),
        config.data_path.display()
    );
    let dataset = Dataset::new(observations)
        .with_context(|| format!("no usable observations in {}", config.data_path.display()))?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Seed: {seed}");

    let results = replicate_sets(&dataset, &config.sets, config.sample_size, seed)
        .context("invalid run configuration")?;
    let summary = summarize(&results);

    eprintln!("Summary:");
    for row in &summary {
        eprintln!(
            "  k = {:>6}: avg mean = {:.6}, avg std dev = {:.6}",
            row.sample_size, row.avg_mean, row.avg_std_dev
        );
    }

    // Render the whole report before touching the filesystem so a failed
    // write cannot leave a partial report behind.
    let report_text = report::render_report(&summary, &results);

    let run_dir = util::create_run_dir(output_root)?;
    let report_path = run_dir.path.join("data.csv");
    fs::write(&report_path, report_text)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;

    let manifest = RunManifest {
        created_at: run_dir.created_at,
        seed,
        sample_size: config.sample_size,
        sets: config.sets.clone(),
        data_path: config.data_path.clone(),
    };
    util::save_json(&manifest, &run_dir.path.join("run.json"))?;

    // Charts are best-effort: a failed chart must not invalidate the
    // already-written statistical output.
    for result in &results {
        let means: Vec<f64> = result.replications.iter().map(|r| r.mean).collect();
        let chart = plot::render_histogram(&means, result.sample_size, &config.templates.means);
        let chart_path = run_dir.path.join(format!("hist_k{}.txt", result.sample_size));
        if let Err(err) = fs::write(&chart_path, chart) {
            eprintln!("Warning: failed to write {}: {err}", chart_path.display());
        }
    }

    eprintln!("Report written to {}", report_path.display());
    Ok(())
}
