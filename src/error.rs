use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for experiment pipeline operations
pub type Result<T> = std::result::Result<T, ExperimentError>;

/// Error taxonomy of the experiment pipeline.
///
/// `Configuration` and `DirectoryCreation` are fatal and raised before any
/// run is submitted. `Run` and `IndicatorComputation` are isolated: they are
/// recorded against a single run or file and never stop sibling work.
/// `ReportGeneration` is fatal for the report being written only.
#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error("invalid experiment configuration: {0}")]
    Configuration(String),

    #[error("cannot create directory '{path}': {source}")]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("algorithm run failed: {0}")]
    Run(String),

    #[error("indicator computation failed: {0}")]
    IndicatorComputation(String),

    #[error("cannot write report '{path}': {source}")]
    ReportGeneration { path: PathBuf, source: io::Error },

    #[error("i/o error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed numeric data in '{path}' at line {line}: {reason}")]
    Parse { path: PathBuf, line: usize, reason: String },
}

impl ExperimentError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        ExperimentError::Configuration(msg.into())
    }

    /// Create an isolated per-run error
    pub fn run(msg: impl Into<String>) -> Self {
        ExperimentError::Run(msg.into())
    }

    /// Create an isolated per-file indicator error
    pub fn indicator(msg: impl Into<String>) -> Self {
        ExperimentError::IndicatorComputation(msg.into())
    }

    pub fn directory_creation(path: impl AsRef<Path>, source: io::Error) -> Self {
        ExperimentError::DirectoryCreation { path: path.as_ref().to_path_buf(), source }
    }

    pub fn report_generation(path: impl AsRef<Path>, source: io::Error) -> Self {
        ExperimentError::ReportGeneration { path: path.as_ref().to_path_buf(), source }
    }

    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ExperimentError::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Fatal errors abort the remaining pipeline stages; isolated ones are
    /// collected and surfaced in a final summary.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExperimentError::Configuration(_)
                | ExperimentError::DirectoryCreation { .. }
                | ExperimentError::ReportGeneration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification()
    {
        assert!(ExperimentError::configuration("no algorithms").is_fatal());
        assert!(!ExperimentError::run("boom").is_fatal());
        assert!(!ExperimentError::indicator("missing reference front").is_fatal());
    }
}
