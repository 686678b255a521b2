//! Timing aggregation over a classified trace
//!
//! Durations are summed per line kind (cpu / overhead / body) and, for
//! overhead lines, per canonical component.

use crate::labels::{LabelSet, LineKind};
use crate::trace::TraceLine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate durations for one trace (or one what-if variant of it)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTotals {
    pub total: i64,
    pub cpu: i64,
    pub overhead: i64,
    pub body: i64,
}

impl ScenarioTotals {
    /// Sum durations by kind, saturating at the `i64` bounds
    pub fn from_lines(lines: &[TraceLine]) -> Self {
        let mut totals = Self::default();
        for line in lines {
            totals.total = totals.total.saturating_add(line.dur);
            let part = match line.kind {
                LineKind::Cpu => &mut totals.cpu,
                LineKind::Overhead => &mut totals.overhead,
                LineKind::Body => &mut totals.body,
            };
            *part = part.saturating_add(line.dur);
        }
        totals
    }

    /// Percentage of `total` taken by `part` (0 for an empty trace)
    pub fn share(&self, part: i64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (part as f64 / self.total as f64) * 100.0
        }
    }

    /// Metric rows in report order
    pub fn metrics(&self) -> [(&'static str, i64); 4] {
        [
            ("total_time", self.total),
            ("cpu_time", self.cpu),
            ("overhead_time", self.overhead),
            ("body_time", self.body),
        ]
    }
}

/// Total time spent in one overhead component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadComponent {
    pub overhead_component: String,
    pub ms: i64,
}

/// Sum overhead durations per component, ordered by component name
pub fn overhead_breakdown(lines: &[TraceLine], labels: &LabelSet) -> Vec<OverheadComponent> {
    let mut by_component: BTreeMap<&str, i64> = BTreeMap::new();

    for line in lines.iter().filter(|l| l.kind == LineKind::Overhead) {
        let component = labels.overhead_component(&line.text).unwrap_or("overhead");
        let ms = by_component.entry(component).or_default();
        *ms = ms.saturating_add(line.dur);
    }

    by_component
        .into_iter()
        .map(|(component, ms)| OverheadComponent {
            overhead_component: component.to_string(),
            ms,
        })
        .collect()
}

/// Baseline summary of one trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub totals: ScenarioTotals,
    pub overhead_breakdown: Vec<OverheadComponent>,
}

pub fn summarize(lines: &[TraceLine], labels: &LabelSet) -> TraceSummary {
    TraceSummary {
        totals: ScenarioTotals::from_lines(lines),
        overhead_breakdown: overhead_breakdown(lines, labels),
    }
}
