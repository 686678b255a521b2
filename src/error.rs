//! Error types for trace analysis
//!
//! Malformed trace lines are not errors: the parser drops them. Everything
//! here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading traces, label sets or writing reports
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read trace {path}: {source}")]
    ReadTrace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read label set {path}: {source}")]
    ReadLabels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid label set {path}: {source}")]
    ParseLabels {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write CSV {path}: {source}")]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Specify either scale or target, not both")]
    ConflictingBodyScenarios,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
