//! Text report formatting
//!
//! Per-file baseline tables and the combined scenario table. Functions
//! return strings so the binary decides where they go.

use crate::scenario::Scenario;
use crate::summary::{OverheadComponent, ScenarioTotals, TraceSummary};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One (file, scenario) row of the combined table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub file: String,
    pub scenario: String,
    pub total: i64,
    pub cpu: i64,
    pub overhead: i64,
    pub body: i64,
}

impl ScenarioRow {
    pub fn new(file: &str, scenario: &Scenario, totals: &ScenarioTotals) -> Self {
        Self {
            file: file.to_string(),
            scenario: scenario.to_string(),
            total: totals.total,
            cpu: totals.cpu,
            overhead: totals.overhead,
            body: totals.body,
        }
    }
}

/// Four-row metric table with each metric's share of the total
pub fn format_summary(totals: &ScenarioTotals) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<13} {:>10} {:>8}", "metric", "ms", "% total");
    let _ = writeln!(out, "{} {} {}", "-".repeat(13), "-".repeat(10), "-".repeat(8));
    for (name, ms) in totals.metrics() {
        let _ = writeln!(out, "{:<13} {:>10} {:>8.2}", name, ms, totals.share(ms));
    }
    out
}

/// Overhead component table
pub fn format_breakdown(breakdown: &[OverheadComponent]) -> String {
    if breakdown.is_empty() {
        return "No overhead lines.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:>10}", "overhead_component", "ms");
    let _ = writeln!(out, "{} {}", "-".repeat(18), "-".repeat(10));
    for component in breakdown {
        let _ = writeln!(
            out,
            "{:<18} {:>10}",
            component.overhead_component, component.ms
        );
    }
    out
}

/// Full per-file section: header, summary and overhead breakdown
pub fn format_file_report(path: &str, summary: &TraceSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", path);
    out.push_str(&format_summary(&summary.totals));
    out.push_str("\nOverhead breakdown:\n");
    out.push_str(&format_breakdown(&summary.overhead_breakdown));
    out
}

/// Combined scenario table, column widths fitted to the content
pub fn format_scenario_table(rows: &[ScenarioRow]) -> String {
    let file_w = rows.iter().map(|r| r.file.len()).max().unwrap_or(0).max(4);
    let scen_w = rows.iter().map(|r| r.scenario.len()).max().unwrap_or(0).max(8);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<file_w$} {:<scen_w$} {:>10} {:>10} {:>10} {:>10}",
        "file", "scenario", "total", "cpu", "overhead", "body"
    );
    let _ = writeln!(
        out,
        "{} {} {} {} {} {}",
        "-".repeat(file_w),
        "-".repeat(scen_w),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(10),
        "-".repeat(10)
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<file_w$} {:<scen_w$} {:>10} {:>10} {:>10} {:>10}",
            row.file, row.scenario, row.total, row.cpu, row.overhead, row.body
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> ScenarioTotals {
        ScenarioTotals {
            total: 15,
            cpu: 5,
            overhead: 6,
            body: 4,
        }
    }

    #[test]
    fn test_summary_lists_all_metrics() {
        let text = format_summary(&totals());
        assert!(text.starts_with("metric"));
        for metric in ["total_time", "cpu_time", "overhead_time", "body_time"] {
            assert!(text.contains(metric), "missing {}", metric);
        }
        assert!(text.contains("100.00"));
        assert!(text.contains("40.00"));
    }

    #[test]
    fn test_breakdown_rows() {
        let breakdown = vec![
            OverheadComponent {
                overhead_component: "context_saved".to_string(),
                ms: 3,
            },
            OverheadComponent {
                overhead_component: "iret".to_string(),
                ms: 1,
            },
        ];
        let text = format_breakdown(&breakdown);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("context_saved"));
        assert!(lines[2].trim_end().ends_with('3'));
    }

    #[test]
    fn test_breakdown_empty() {
        assert_eq!(format_breakdown(&[]), "No overhead lines.\n");
    }

    #[test]
    fn test_file_report_sections() {
        let summary = TraceSummary {
            totals: totals(),
            overhead_breakdown: vec![],
        };
        let text = format_file_report("run/execution.txt", &summary);
        assert!(text.starts_with("=== run/execution.txt ===\n"));
        assert!(text.contains("\nOverhead breakdown:\n"));
    }

    #[test]
    fn test_scenario_table_aligns_columns() {
        let rows = vec![
            ScenarioRow::new("a.txt", &Scenario::FixedSave(10), &totals()),
            ScenarioRow::new("longer/name.txt", &Scenario::Baseline, &totals()),
        ];
        let text = format_scenario_table(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("file "));
        // every row has the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[2].contains("SAVE=10"));
        assert!(lines[3].contains("baseline"));
    }
}
