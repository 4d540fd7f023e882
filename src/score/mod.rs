//! Neighborhood condition score.
//!
//! Raw counts flow one way: normalized severities (`normalize`), category
//! scores (`scoring`), then the weighted composite, bonus, clamp and grade
//! (`analyzer`). Everything here is pure; the `run_*` entry points below are
//! the only functions that print.

pub mod analyzer;
pub mod diff;
mod diff_report;
pub mod normalize;
pub mod presentation;
mod report;
pub mod scoring;

use std::path::Path;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::metrics::{RawMetrics, read_metrics};

use analyzer::{ScoreResult, calculate_overall_score, calculate_overall_score_strict};

/// Output options shared by the printing entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
    pub strict: bool,
    /// Number of top issues to list.
    pub top: usize,
}

/// Score in lenient or strict mode.
pub fn evaluate(metrics: &RawMetrics, config: &ScoringConfig, strict: bool) -> Result<ScoreResult> {
    if strict {
        Ok(calculate_overall_score_strict(metrics, config)?)
    } else {
        Ok(calculate_overall_score(metrics, config))
    }
}

pub fn run(
    metrics: &RawMetrics,
    config: &ScoringConfig,
    opts: OutputOptions,
    target: Option<&str>,
) -> Result<()> {
    let result = evaluate(metrics, config, opts.strict)?;

    if opts.json {
        report::print_json(&result, opts.top, target)?;
    } else {
        report::print_report(&result, opts.top, target);
    }
    Ok(())
}

/// Score two metric files and print how the block changed.
pub fn run_compare(
    before: &Path,
    after: &Path,
    config: &ScoringConfig,
    opts: OutputOptions,
) -> Result<()> {
    let before_result = evaluate(&read_metrics(before)?, config, opts.strict)?;
    let after_result = evaluate(&read_metrics(after)?, config, opts.strict)?;
    let diff = diff::compute_diff(&before_result, &after_result);

    if opts.json {
        diff_report::print_json(&diff)
    } else {
        diff_report::print_report(
            &diff,
            &before.display().to_string(),
            &after.display().to_string(),
        );
        Ok(())
    }
}

pub fn run_grade(score: u8, json: bool) -> Result<()> {
    report::print_grade(score, json)
}

pub fn run_weights(config: &ScoringConfig, json: bool) -> Result<()> {
    if json {
        report::print_weights_json(config)
    } else {
        report::print_weights(config);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
