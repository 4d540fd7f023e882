/// CLI argument definitions for the `bs` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use blockscore::metrics::{Category, RawMetrics};
use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "bs", version, about = "Neighborhood condition score")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Per-category counts given on the command line. Each flag overrides the
/// matching value from the metrics file.
#[derive(Args)]
pub struct MetricArgs {
    /// Criminal incidents
    #[arg(long, allow_negative_numbers = true)]
    pub crime: Option<f64>,

    /// Traffic crashes
    #[arg(long, allow_negative_numbers = true)]
    pub crashes: Option<f64>,

    /// Building and code violations
    #[arg(long, allow_negative_numbers = true)]
    pub violations: Option<f64>,

    /// 311 service requests
    #[arg(long, allow_negative_numbers = true)]
    pub service_requests: Option<f64>,

    /// Automated ticket-camera citations
    #[arg(long, allow_negative_numbers = true)]
    pub cameras: Option<f64>,

    /// Completed pothole repairs (positive signal)
    #[arg(long, allow_negative_numbers = true)]
    pub potholes: Option<f64>,

    /// Issued building permits (positive signal)
    #[arg(long, allow_negative_numbers = true)]
    pub permits: Option<f64>,

    /// Active business licenses (positive signal)
    #[arg(long, allow_negative_numbers = true)]
    pub licenses: Option<f64>,
}

impl MetricArgs {
    /// Overwrite the fields of `metrics` that were given as flags.
    pub fn apply(&self, metrics: &mut RawMetrics) {
        let flags = [
            (Category::Crime, self.crime),
            (Category::Crashes, self.crashes),
            (Category::Violations, self.violations),
            (Category::ServiceRequests, self.service_requests),
            (Category::Cameras, self.cameras),
            (Category::Potholes, self.potholes),
            (Category::Permits, self.permits),
            (Category::Licenses, self.licenses),
        ];
        for (category, value) in flags {
            if let Some(v) = value {
                metrics.set(category, v);
            }
        }
    }
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score a block from a metrics file and/or per-category flags
    #[command(long_about = "\
Score a block from raw incident counts (12-month window, ~500 ft radius).

Each negative-signal count becomes a severity with a saturating curve:
  severity = 1 - exp(-count / scale)
  category score = round(100 * (1 - severity))

The base score is the weighted sum of category scores. Pothole repairs,
permits and licenses add a capped civic bonus:
  bonus   = min(cap, sum(1 - exp(-count / scale)) * bonus_scale)
  overall = clamp(round(base + bonus), 0, 100)

Grades: A >= 90, B >= 80, C >= 70, D >= 60, F below 60.

Input files are JSON (or TOML with a .toml extension); `-` reads JSON from
stdin. Missing keys count as 0. Invalid values (negative, non-finite,
non-numeric) are treated as 0 unless --strict is given.

Examples:
  bs score block.json
  bs score --crime 50 --crashes 20 --violations 10
  bs score block.json --permits 20 --json
  bs score block.toml --strict --config weights.toml")]
    Score {
        /// Metrics file (JSON, or TOML by extension; `-` for stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        metrics: MetricArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Reject invalid counts instead of treating them as 0
        #[arg(long)]
        strict: bool,

        /// TOML file overriding weights, scales and the bonus cap
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of top issues to list (default: 3)
        #[arg(long, default_value = "3")]
        top: usize,
    },

    /// Compare two metrics files (e.g. the same block a year apart)
    Compare {
        /// Earlier metrics file
        before: PathBuf,

        /// Later metrics file
        after: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Reject invalid counts instead of treating them as 0
        #[arg(long)]
        strict: bool,

        /// TOML file overriding weights, scales and the bonus cap
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the grade, color and description for a score
    Grade {
        /// Score between 0 and 100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active weight table
    Weights {
        /// TOML file overriding weights, scales and the bonus cap
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
