//! JSON output format
//!
//! `--format json` replaces the text tables with one document holding the
//! per-file baselines and the combined scenario rows.

use crate::report::ScenarioRow;
use crate::summary::{OverheadComponent, ScenarioTotals, TraceSummary};
use serde::{Deserialize, Serialize};

/// Baseline view of one trace file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFileSummary {
    pub file: String,
    pub summary: ScenarioTotals,
    pub overhead_breakdown: Vec<OverheadComponent>,
}

/// Complete JSON report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonReport {
    pub files: Vec<JsonFileSummary>,
    pub scenarios: Vec<ScenarioRow>,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: &str, summary: &TraceSummary) {
        self.files.push(JsonFileSummary {
            file: file.to_string(),
            summary: summary.totals,
            overhead_breakdown: summary.overhead_breakdown.clone(),
        });
    }

    pub fn add_scenario(&mut self, row: ScenarioRow) {
        self.scenarios.push(row);
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    #[test]
    fn test_json_report_shape() {
        let totals = ScenarioTotals {
            total: 15,
            cpu: 5,
            overhead: 6,
            body: 4,
        };
        let summary = TraceSummary {
            totals,
            overhead_breakdown: vec![OverheadComponent {
                overhead_component: "iret".to_string(),
                ms: 1,
            }],
        };

        let mut report = JsonReport::new();
        report.add_file("execution.txt", &summary);
        report.add_scenario(ScenarioRow::new("execution.txt", &Scenario::Baseline, &totals));

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["files"][0]["file"], "execution.txt");
        assert_eq!(value["files"][0]["summary"]["overhead"], 6);
        assert_eq!(
            value["files"][0]["overhead_breakdown"][0]["overhead_component"],
            "iret"
        );
        assert_eq!(value["scenarios"][0]["scenario"], "baseline");
        assert_eq!(value["scenarios"][0]["total"], 15);
    }

    #[test]
    fn test_json_empty_report() {
        let json = JsonReport::new().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["files"].as_array().unwrap().is_empty());
        assert!(value["scenarios"].as_array().unwrap().is_empty());
    }
}
