use std::{
    fs::{self, File},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};

/// A timestamp-named directory holding one run's artifacts.
#[derive(Debug, Clone)]
pub struct RunDir {
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
}

/// Creates `<root>/<UTC timestamp>/` for the current run.
pub fn create_run_dir(root: &Path) -> anyhow::Result<RunDir> {
    let created_at = Utc::now();
    let path = root.join(created_at.format("%Y%m%dT%H%M%S%.3fZ").to_string());
    fs::create_dir_all(&path)
        .with_context(|| format!("failed to create run directory {}", path.display()))?;
    Ok(RunDir { path, created_at })
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

pub fn save_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to write JSON to {}", path.display()))?;
    writeln!(writer).with_context(|| format!("failed to write newline to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
