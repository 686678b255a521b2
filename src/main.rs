use anyhow::{Context, Result};
use clap::Parser;
use isrtrace::cli::{Cli, OutputFormat};
use isrtrace::csv_output::CsvScenarioOutput;
use isrtrace::json_output::JsonReport;
use isrtrace::labels::LabelSet;
use isrtrace::report::{self, ScenarioRow};
use isrtrace::scenario::ScenarioPlan;
use isrtrace::{summary, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_labels(args: &Cli) -> Result<LabelSet> {
    match &args.labels {
        Some(path) => Ok(LabelSet::from_file(path)?),
        None => Ok(LabelSet::default()),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Validated before any file is read
    let plan = ScenarioPlan::from_options(&args.save, args.scale_body, args.target_body)?;
    let labels = load_labels(&args)?;

    let mut rows: Vec<ScenarioRow> = Vec::new();
    let mut json = JsonReport::new();

    for path in &args.files {
        let lines = trace::read_trace(path, &labels)?;
        let baseline = summary::summarize(&lines, &labels);
        let name = path.display().to_string();

        match args.format {
            OutputFormat::Text => {
                print!("{}", report::format_file_report(&name, &baseline));
                println!();
            }
            OutputFormat::Json => json.add_file(&name, &baseline),
        }

        for (scenario, totals) in plan.evaluate(&lines, &labels) {
            rows.push(ScenarioRow::new(&name, &scenario, &totals));
        }
    }

    match args.format {
        OutputFormat::Text => {
            println!("=== Scenario summary ===");
            print!("{}", report::format_scenario_table(&rows));
        }
        OutputFormat::Json => {
            for row in &rows {
                json.add_scenario(row.clone());
            }
            println!("{}", json.to_json().context("Failed to serialize report")?);
        }
    }

    if let Some(csv_path) = &args.csv {
        let csv: CsvScenarioOutput = rows.into_iter().collect();
        csv.write_to(csv_path)?;
        match args.format {
            OutputFormat::Text => println!("\nWrote CSV to {}", csv_path.display()),
            // keep stdout a single JSON document
            OutputFormat::Json => eprintln!("Wrote CSV to {}", csv_path.display()),
        }
    }

    Ok(())
}
