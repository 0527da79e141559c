//! `cohort` — build a student/attribute bipartite graph from a survey CSV,
//! print a summary, and export an SVG of the two partitions.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cohort_analysis::bipartite::build;
use cohort_analysis::catalog::default_catalog;
use cohort_analysis::report::{GraphSummary, SvgExporter};
use cohort_analysis::table::{load_csv, sample};
use cohort_core::config::{CliOverrides, CohortConfig};
use cohort_core::errors::PipelineError;

#[derive(Parser, Debug)]
#[command(name = "cohort", version, about = "Student/attribute bipartite graph builder")]
struct Cli {
    /// Path to the survey CSV file.
    csv_path: PathBuf,

    /// Percentage of records to keep, 0-100.
    #[arg(long, env = "COHORT_SAMPLE_PERCENTAGE")]
    sample: Option<f64>,

    /// Seed for the deterministic sampler.
    #[arg(long, env = "COHORT_SAMPLE_SEED")]
    seed: Option<u64>,

    /// Path for the SVG export.
    #[arg(long, env = "COHORT_SVG_PATH")]
    output: Option<PathBuf>,

    /// Skip the SVG export.
    #[arg(long)]
    no_svg: bool,

    /// Print the summary as JSON instead of the console report.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COHORT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let overrides = CliOverrides {
        sample_percentage: cli.sample,
        sample_seed: cli.seed,
        svg_path: cli
            .output
            .as_ref()
            .map(|p| p.display().to_string()),
        svg: cli.no_svg.then_some(false),
    };
    let config = CohortConfig::load(Path::new("."), Some(&overrides))?;

    let table = load_csv(&cli.csv_path)?;

    let percentage = config.sample.effective_percentage();
    let table = if percentage < 100.0 {
        sample(&table, percentage, config.sample.effective_seed())
    } else {
        table
    };

    let catalog = default_catalog()?;
    let graph = build(&table, &catalog);

    let summary = GraphSummary::from_graph(&graph);
    if cli.json {
        match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                // Serialization of plain counts cannot realistically fail;
                // fall back to the console form rather than aborting.
                tracing::warn!(error = %e, "JSON summary failed");
                println!("{}", summary.render_console());
            }
        }
    } else {
        println!("{}", summary.render_console());
    }

    if config.output.effective_svg() {
        let svg_path = PathBuf::from(config.output.effective_svg_path());
        SvgExporter::default().write(&graph, &svg_path)?;
        println!("Graph saved to '{}'", svg_path.display());
    }

    Ok(())
}
