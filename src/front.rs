use std::fs;
use std::path::Path;

use crate::error::{ExperimentError, Result};

/// Reads a whitespace/TSV-separated file of numeric vectors, one vector per
/// row. Used for run fronts (FUN/VAR files), reference fronts and indicator
/// value files. Blank lines are skipped.
pub fn read_vector_file(path: &Path) -> Result<Vec<Vec<f64>>>
{
    let content = fs::read_to_string(path)
        .map_err(|source| ExperimentError::io(path, source))?;

    let mut rows = Vec::new();

    for (index, line) in content.lines().enumerate()
    {
        let line = line.trim();
        if line.is_empty()
        {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace()
        {
            let value: f64 = token.parse().map_err(|_| ExperimentError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                reason: format!("'{}' is not a number", token),
            })?;

            row.push(value);
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Writes numeric vectors as tab-separated rows, overwriting any previous
/// content. One run owns its file exclusively, so no append mode exists.
pub fn write_vector_file(path: &Path, rows: &[Vec<f64>]) -> Result<()>
{
    let mut content = String::new();

    for row in rows
    {
        let line = row.iter().map(|value| value.to_string()).collect::<Vec<_>>().join("\t");

        content.push_str(&line);
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| ExperimentError::io(path, source))
}

/// Writes one floating point value per line, run index ascending. NaN values
/// are written literally so downstream statistics can treat them as missing.
pub fn write_value_file(path: &Path, values: &[f64]) -> Result<()>
{
    let mut content = String::new();

    for value in values
    {
        content.push_str(&value.to_string());
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| ExperimentError::io(path, source))
}

/// Reads a one-value-per-line indicator file.
pub fn read_value_file(path: &Path) -> Result<Vec<f64>>
{
    Ok(read_vector_file(path)?.into_iter().flatten().collect())
}
