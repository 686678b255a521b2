//! isrtrace - timing analysis for ISR simulation execution traces
//!
//! This library parses `start,duration,label` execution traces, splits time
//! into CPU burst, kernel overhead and ISR body, and recomputes those totals
//! under what-if duration substitutions.

pub mod cli;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod labels;
pub mod report;
pub mod rescale;
pub mod scenario;
pub mod summary;
pub mod trace;

pub use error::{AnalysisError, Result};
