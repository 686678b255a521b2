//! Label vocabulary for ISR execution traces
//!
//! A trace line is classified purely by its text:
//! - exact match on the CPU label -> `cpu`
//! - prefix match on any overhead prefix -> `overhead`
//! - anything else -> `body`
//!
//! The defaults match the simulator's log output. A TOML file can override
//! any subset of them (see [`LabelSet::from_file`]).

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Class of a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// User-mode execution
    Cpu,
    /// Kernel bookkeeping around an interrupt
    Overhead,
    /// The ISR's own work
    Body,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineKind::Cpu => "cpu",
            LineKind::Overhead => "overhead",
            LineKind::Body => "body",
        };
        f.write_str(s)
    }
}

/// Maps an overhead label prefix to its canonical component name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadLabel {
    pub prefix: String,
    pub component: String,
}

impl OverheadLabel {
    fn new(prefix: &str, component: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            component: component.to_string(),
        }
    }
}

/// Labels used for classification and episode detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    /// Exact text of a CPU burst line
    pub cpu_label: String,

    /// Overhead prefixes, checked in order (first match wins)
    pub overhead: Vec<OverheadLabel>,

    /// Prefix of the line that opens an interrupt episode
    pub episode_start: String,

    /// Exact text of the line that closes an interrupt episode
    pub episode_end: String,

    /// Prefix of the lines replaced by the fixed-substitution scenario
    pub save_prefix: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            cpu_label: "CPU burst".to_string(),
            overhead: vec![
                OverheadLabel::new("switch to kernel mode", "mode_switch"),
                OverheadLabel::new("context saved", "context_saved"),
                OverheadLabel::new("find vector", "find_vector"),
                OverheadLabel::new("load address", "load_pc"),
                OverheadLabel::new("IRET", "iret"),
                OverheadLabel::new("context restored", "context_restored"),
            ],
            episode_start: "switch to kernel mode".to_string(),
            episode_end: "IRET".to_string(),
            save_prefix: "context saved".to_string(),
        }
    }
}

impl LabelSet {
    /// Parse a label set from TOML; missing keys keep their defaults
    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load a label set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| AnalysisError::ReadLabels {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml(&contents).map_err(|source| AnalysisError::ParseLabels {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Classify a line by its text
    pub fn classify(&self, text: &str) -> LineKind {
        if text == self.cpu_label {
            LineKind::Cpu
        } else if self.overhead_component(text).is_some() {
            LineKind::Overhead
        } else {
            LineKind::Body
        }
    }

    /// Canonical overhead component for a line, if any prefix matches
    pub fn overhead_component(&self, text: &str) -> Option<&str> {
        self.overhead
            .iter()
            .find(|label| text.starts_with(label.prefix.as_str()))
            .map(|label| label.component.as_str())
    }

    pub fn opens_episode(&self, text: &str) -> bool {
        text.starts_with(self.episode_start.as_str())
    }

    pub fn closes_episode(&self, text: &str) -> bool {
        text == self.episode_end
    }

    pub fn is_context_save(&self, text: &str) -> bool {
        text.starts_with(self.save_prefix.as_str())
    }
}
