//! Execution trace parsing
//!
//! One record per non-blank line: `<start>,<duration>,<text>`. Only the first
//! two commas separate fields, so the text may contain commas. Lines that do
//! not fit this shape are dropped.

use crate::error::{AnalysisError, Result};
use crate::labels::{LabelSet, LineKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single classified trace record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLine {
    /// Start offset (ms)
    pub start: i64,
    /// Duration (ms)
    pub dur: i64,
    /// Event label
    pub text: String,
    /// Class derived from `text`
    pub kind: LineKind,
}

impl TraceLine {
    pub fn new(start: i64, dur: i64, text: &str, labels: &LabelSet) -> Self {
        Self {
            start,
            dur,
            text: text.to_string(),
            kind: labels.classify(text),
        }
    }
}

/// Parse one raw line, returning `None` for blank or malformed input
pub fn parse_line(raw: &str, labels: &LabelSet) -> Option<TraceLine> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut fields = raw.splitn(3, ',');
    let start = fields.next()?.trim().parse::<i64>().ok()?;
    let dur = fields.next()?.trim().parse::<i64>().ok()?;
    let text = fields.next()?.trim();

    Some(TraceLine::new(start, dur, text, labels))
}

/// Parse a whole trace held in memory
pub fn parse_trace(contents: &str, labels: &LabelSet) -> Vec<TraceLine> {
    let mut lines = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        match parse_line(raw, labels) {
            Some(line) => lines.push(line),
            None if raw.trim().is_empty() => {}
            None => tracing::debug!("skipping malformed trace line {}: {:?}", idx + 1, raw),
        }
    }

    lines
}

/// Read and parse a trace file
pub fn read_trace(path: &Path, labels: &LabelSet) -> Result<Vec<TraceLine>> {
    let contents = std::fs::read_to_string(path).map_err(|source| AnalysisError::ReadTrace {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = parse_trace(&contents, labels);
    tracing::info!("parsed {} trace lines from {}", lines.len(), path.display());
    Ok(lines)
}
