//! CSV output for the combined scenario table
//!
//! Columns: file, scenario, total, cpu, overhead, body

use crate::error::{AnalysisError, Result};
use crate::report::ScenarioRow;
use std::path::Path;

const HEADER: &str = "file,scenario,total,cpu,overhead,body";

/// CSV formatter for scenario rows
#[derive(Debug, Default)]
pub struct CsvScenarioOutput {
    rows: Vec<ScenarioRow>,
}

impl CsvScenarioOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: ScenarioRow) {
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &ScenarioRow) -> String {
        [
            Self::escape_field(&row.file),
            Self::escape_field(&row.scenario),
            row.total.to_string(),
            row.cpu.to_string(),
            row.overhead.to_string(),
            row.body.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }

    /// Write the CSV to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv()).map_err(|source| AnalysisError::WriteCsv {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<ScenarioRow> for CsvScenarioOutput {
    fn from_iter<I: IntoIterator<Item = ScenarioRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
