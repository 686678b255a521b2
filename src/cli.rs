//! CLI argument parsing for isrtrace

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reports on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// Single JSON document for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "isrtrace")]
#[command(version)]
#[command(
    about = "Analyze ISR simulation execution traces and run what-if scenarios",
    long_about = None
)]
pub struct Cli {
    /// Execution trace file(s) to analyze
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Try these context-save durations and report totals
    #[arg(long = "save", value_name = "MS", num_args = 0..)]
    pub save: Vec<i64>,

    /// Multiply every ISR body line duration by this factor
    #[arg(long = "scale-body", value_name = "FACTOR", conflicts_with = "target_body")]
    pub scale_body: Option<f64>,

    /// Rescale each interrupt's body lines to sum to this many ms
    #[arg(long = "target-body", value_name = "MS")]
    pub target_body: Option<i64>,

    /// Write the scenario summary as CSV to this path
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding the trace label vocabulary
    #[arg(long = "labels", value_name = "PATH")]
    pub labels: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Scenario, ScenarioPlan};

    #[test]
    fn test_cli_parses_files() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "b.txt"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(cli.save.is_empty());
        assert!(cli.scale_body.is_none());
        assert!(cli.target_body.is_none());
        assert!(cli.csv.is_none());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["isrtrace"]).is_err());
    }

    #[test]
    fn test_cli_save_values() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--save", "5", "10", "20"]);
        assert_eq!(cli.save, vec![5, 10, 20]);
    }

    #[test]
    fn test_cli_scale_body() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--scale-body", "1.5"]);
        assert_eq!(cli.scale_body, Some(1.5));
    }

    #[test]
    fn test_cli_target_body() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--target-body", "40"]);
        assert_eq!(cli.target_body, Some(40));
    }

    #[test]
    fn test_cli_target_body_zero_accepted() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--target-body", "0"]);
        assert_eq!(cli.target_body, Some(0));
    }

    #[test]
    fn test_cli_bare_save_adds_no_scenarios() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--save"]);
        assert!(cli.save.is_empty());

        let plan = ScenarioPlan::from_options(&cli.save, cli.scale_body, cli.target_body).unwrap();
        assert_eq!(plan.scenarios(), &[Scenario::Baseline]);
    }

    #[test]
    fn test_cli_scale_and_target_conflict() {
        let result = Cli::try_parse_from([
            "isrtrace",
            "a.txt",
            "--scale-body",
            "2",
            "--target-body",
            "40",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_format_default_text() {
        let cli = Cli::parse_from(["isrtrace", "a.txt"]);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["isrtrace", "a.txt", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_csv_and_labels_paths() {
        let cli = Cli::parse_from([
            "isrtrace",
            "a.txt",
            "--csv",
            "out.csv",
            "--labels",
            "labels.toml",
            "--debug",
        ]);
        assert_eq!(cli.csv, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.labels, Some(PathBuf::from("labels.toml")));
        assert!(cli.debug);
    }
}
