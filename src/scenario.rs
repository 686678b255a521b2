//! What-if scenarios over a parsed trace
//!
//! Every scenario works on a copy of the trace and reports the same four
//! aggregates as the baseline:
//! - `SAVE=<n>`: every context-save line takes duration `n`
//! - `scale_body=<f>`: every body line is multiplied by `f`
//! - `target_body=<n>`: the body lines of each interrupt episode are
//!   rescaled to sum to `n`

use crate::error::{AnalysisError, Result};
use crate::labels::{LabelSet, LineKind};
use crate::rescale::rescale_to_target;
use crate::summary::ScenarioTotals;
use crate::trace::TraceLine;
use std::fmt;
use std::ops::RangeInclusive;

/// A duration substitution applied to a trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    /// The trace as recorded
    Baseline,
    /// Fixed context-save duration
    FixedSave(i64),
    /// Uniform body scale factor
    ScaleBody(f64),
    /// Per-episode body target sum
    TargetBody(i64),
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Baseline => write!(f, "baseline"),
            Scenario::FixedSave(value) => write!(f, "SAVE={}", value),
            // Debug keeps the decimal point on whole factors (2.0, not 2)
            Scenario::ScaleBody(factor) => write!(f, "scale_body={:?}", factor),
            Scenario::TargetBody(target) => write!(f, "target_body={}", target),
        }
    }
}

impl Scenario {
    /// Return a transformed copy of `lines`
    pub fn apply(&self, lines: &[TraceLine], labels: &LabelSet) -> Vec<TraceLine> {
        let mut out = lines.to_vec();
        match *self {
            Scenario::Baseline => {}
            Scenario::FixedSave(value) => {
                for line in out.iter_mut().filter(|l| labels.is_context_save(&l.text)) {
                    line.dur = value;
                }
            }
            Scenario::ScaleBody(factor) => {
                for line in out.iter_mut().filter(|l| l.kind == LineKind::Body) {
                    line.dur = scale_duration(line.dur, factor);
                }
            }
            Scenario::TargetBody(target) => {
                for episode in episodes(&out, labels) {
                    let original: Vec<i64> =
                        episode.body_lines.iter().map(|&i| out[i].dur).collect();
                    let rescaled = rescale_to_target(&original, target);
                    tracing::debug!(
                        "episode {:?}: body {:?} -> {:?}",
                        episode.span,
                        original,
                        rescaled
                    );
                    for (&i, dur) in episode.body_lines.iter().zip(rescaled) {
                        out[i].dur = dur;
                    }
                }
            }
        }
        out
    }

    /// Aggregate totals of the transformed trace
    pub fn evaluate(&self, lines: &[TraceLine], labels: &LabelSet) -> ScenarioTotals {
        ScenarioTotals::from_lines(&self.apply(lines, labels))
    }
}

/// `max(1, round(dur * factor))`, rounding half to even
pub fn scale_duration(dur: i64, factor: f64) -> i64 {
    ((dur as f64 * factor).round_ties_even() as i64).max(1)
}

/// One interrupt episode: opener through the closing `IRET`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Indices of the opening and closing lines
    pub span: RangeInclusive<usize>,
    /// Indices of the body lines inside the episode, in trace order
    pub body_lines: Vec<usize>,
}

/// Segment a trace into closed interrupt episodes
///
/// A new opener while an episode is already open restarts it. An episode
/// still open at the end of the trace is not reported.
pub fn episodes(lines: &[TraceLine], labels: &LabelSet) -> Vec<Episode> {
    let mut found = Vec::new();
    let mut open: Option<(usize, Vec<usize>)> = None;

    for (idx, line) in lines.iter().enumerate() {
        if labels.opens_episode(&line.text) {
            open = Some((idx, Vec::new()));
        }

        if let Some((_, body)) = open.as_mut() {
            if line.kind == LineKind::Body {
                body.push(idx);
            }
        }

        if labels.closes_episode(&line.text) {
            if let Some((start, body_lines)) = open.take() {
                found.push(Episode {
                    span: start..=idx,
                    body_lines,
                });
            }
        }
    }

    found
}

/// Ordered list of scenarios to evaluate for every file
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioPlan {
    scenarios: Vec<Scenario>,
}

impl ScenarioPlan {
    /// Build the plan: save values in order, then scale, then target,
    /// then the baseline
    pub fn from_options(save: &[i64], scale: Option<f64>, target: Option<i64>) -> Result<Self> {
        if scale.is_some() && target.is_some() {
            return Err(AnalysisError::ConflictingBodyScenarios);
        }

        let mut scenarios: Vec<Scenario> = save.iter().map(|&v| Scenario::FixedSave(v)).collect();
        scenarios.extend(scale.map(Scenario::ScaleBody));
        scenarios.extend(target.map(Scenario::TargetBody));
        scenarios.push(Scenario::Baseline);

        Ok(Self { scenarios })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Evaluate every scenario against one trace
    pub fn evaluate(&self, lines: &[TraceLine], labels: &LabelSet) -> Vec<(Scenario, ScenarioTotals)> {
        self.scenarios
            .iter()
            .map(|s| (*s, s.evaluate(lines, labels)))
            .collect()
    }
}
