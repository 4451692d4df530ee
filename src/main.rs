//! SLOPE-FOS - Slope stability FOS estimator
//!
//! Command-line front end for the Mount St. Helens slope stability surrogate
//! model. All estimation logic lives in the library; this binary only parses
//! arguments, moves text in and out of files, and renders results.
//!
//! # Usage
//!
//! ```bash
//! # Single estimation: cohesion, friction angle, unit weight, seismic coefficient
//! slope-fos estimate 1000 40 24 0.10
//!
//! # Batch estimation from a file, report to stdout or --output
//! slope-fos batch slopes.txt --output report.txt
//!
//! # Show the valid input and output ranges
//! slope-fos ranges
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: info)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use slope_fos::surrogate::weights::{FOS_RANGE, INPUT_RANGES};
use slope_fos::{estimate_batch, estimate_single, BatchLayout, EstimationResult};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "slope-fos")]
#[command(about = "Slope stability FOS estimation (Mount St. Helens surrogate model)")]
#[command(version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate FOS for one parameter set
    Estimate {
        /// Cohesion c (kN/m²)
        cohesion: String,
        /// Angle of internal friction Ø (°)
        friction_angle: String,
        /// Unit weight γ (kN/m³)
        unit_weight: String,
        /// Seismic coefficient ke (-)
        seismic_coefficient: String,
    },

    /// Estimate FOS for every record in a batch file
    Batch {
        /// Input file: one record per line, four fields per record
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Legacy layout: each record spans four consecutive lines of one
        /// value each
        #[arg(long)]
        four_lines: bool,

        /// Emit the results as JSON instead of a plain-text report
        #[arg(long)]
        json: bool,
    },

    /// Print the valid input and output ranges
    Ranges,
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Estimate {
            cohesion,
            friction_angle,
            unit_weight,
            seismic_coefficient,
        } => run_single(&cohesion, &friction_angle, &unit_weight, &seismic_coefficient),
        Command::Batch {
            input,
            output,
            four_lines,
            json,
        } => {
            let layout = if four_lines {
                BatchLayout::FourLines
            } else {
                BatchLayout::OnePerLine
            };
            run_batch(&input, output.as_deref(), layout, json)
        }
        Command::Ranges => {
            print_ranges();
            Ok(())
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Single estimation. Record-scoped rejections are results, not process
/// failures: the diagnostic is printed and the exit code stays zero.
fn run_single(
    cohesion: &str,
    friction_angle: &str,
    unit_weight: &str,
    seismic_coefficient: &str,
) -> Result<()> {
    let result = estimate_single([cohesion, friction_angle, unit_weight, seismic_coefficient]);
    println!("{result}");
    if result.is_success() {
        info!("Mount St. Helens FOS estimation completed");
    }
    Ok(())
}

fn run_batch(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    layout: BatchLayout,
    json: bool,
) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading batch input {}", input.display()))?;

    let results: Vec<EstimationResult> = estimate_batch(&text, layout).collect();
    let failed = results.iter().filter(|r| !r.is_success()).count();

    let report = if json {
        let mut body = serde_json::to_string_pretty(&results).context("serializing results")?;
        body.push('\n');
        body
    } else {
        render_report(&results)
    };

    match output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => print!("{report}"),
    }

    info!(
        records = results.len(),
        failed, "batch estimation completed"
    );
    Ok(())
}

/// Plain-text batch report: one line per record, in input order.
fn render_report(results: &[EstimationResult]) -> String {
    let mut report = String::new();
    for result in results {
        match result.fos() {
            Some(fos) => report.push_str(&format!("Estimated FOS: {fos:.3}\n")),
            None => report.push_str(&format!("{result}\n")),
        }
    }
    report
}

/// Ranges come straight from the model constants so this display can never
/// drift from what the pipeline enforces.
fn print_ranges() {
    println!("Valid input ranges:");
    for range in &INPUT_RANGES {
        println!("  {range}");
    }
    println!("Output range:");
    println!("  {FOS_RANGE}");
}
