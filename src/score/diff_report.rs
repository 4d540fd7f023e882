//! Report formatters for the score comparison output.
//!
//! Provides table (ANSI-colored) and JSON output modes for `ScoreDiff`.
//! Green for improvements (+), red for regressions (-), yellow for no change.

use super::diff::ScoreDiff;
use crate::error::Result;
use crate::report_helpers::{self, format_count};

// ANSI color codes.
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format a signed score delta with color and sign prefix.
fn colored_delta(delta: i16) -> String {
    if delta > 0 {
        format!("{GREEN}+{delta}{RESET}")
    } else if delta < 0 {
        format!("{RED}{delta}{RESET}")
    } else {
        format!("{YELLOW} 0{RESET}")
    }
}

/// Print the comparison as a formatted table with ANSI colors.
pub fn print_report(diff: &ScoreDiff, before_name: &str, after_name: &str) {
    let separator = report_helpers::separator(72);

    println!("Score Comparison: {BOLD}{before_name}{RESET} → {BOLD}{after_name}{RESET}");
    println!("{separator}");

    let grade_change = if diff.before_grade == diff.after_grade {
        diff.after_grade.to_string()
    } else {
        format!("{} → {}", diff.before_grade, diff.after_grade)
    };

    println!(
        " Overall Score: {} → {}  ({})  Grade: {grade_change}",
        diff.overall.before,
        diff.overall.after,
        colored_delta(diff.overall.delta),
    );

    println!("{separator}");
    println!(
        " {:<22} {:>15}   {:>7}   {:>7}   {:>7}",
        "Category", "Count", "Before", "After", "Delta"
    );
    println!("{separator}");

    for c in &diff.categories {
        let counts = format!(
            "{} → {}",
            format_count(c.before_count),
            format_count(c.after_count)
        );
        println!(
            " {:<22} {:>15}   {:>7}   {:>7}   {}",
            c.label,
            counts,
            c.before_score,
            c.after_score,
            colored_delta(c.score_delta),
        );
    }

    println!("{separator}");
}

/// Serialize the comparison as pretty-printed JSON to stdout.
pub fn print_json(diff: &ScoreDiff) -> Result<()> {
    report_helpers::print_json_stdout(diff)
}
