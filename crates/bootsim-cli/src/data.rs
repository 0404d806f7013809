use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::Context as _;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DataError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("data file has no header row")]
    MissingHeader,
    #[display("column '{column}' not found in header: {header}")]
    MissingColumn { column: String, header: String },
}

impl From<io::Error> for DataError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Loads the observations of one named column from a comma-separated file.
///
/// Rows whose field is missing or not a number are skipped, not fatal; the
/// skip count is reported on stderr. A missing file or column is fatal.
pub fn load_dataset(path: &Path, column: &str) -> anyhow::Result<Vec<f64>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let (values, skipped) = parse_rows(BufReader::new(file), column)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if skipped > 0 {
        eprintln!("Skipped {skipped} rows without a numeric '{column}' value");
    }
    Ok(values)
}

fn parse_rows<R>(reader: R, column: &str) -> Result<(Vec<f64>, usize), DataError>
where
    R: BufRead,
{
    let mut lines = reader.lines();
    let header = loop {
        let Some(line) = lines.next() else {
            return Err(DataError::MissingHeader);
        };
        let line = line?;
        if !line.trim().is_empty() {
            break line;
        }
    };

    let column_index = header
        .split(',')
        .map(str::trim)
        .position(|name| name == column)
        .ok_or_else(|| DataError::MissingColumn {
            column: column.to_owned(),
            header: header.clone(),
        })?;

    let mut values = vec![];
    let mut skipped = 0;
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line
            .split(',')
            .nth(column_index)
            .and_then(|field| field.trim().parse::<f64>().ok())
        {
            Some(value) => values.push(value),
            None => skipped += 1,
        }
    }

    Ok((values, skipped))
}
