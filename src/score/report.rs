use serde::Serialize;

use super::analyzer::{Grade, ScoreResult, score_to_grade, top_issues};
use super::presentation::{grade_color, score_description};
use crate::config::{CategoryConfig, Direction, ScoringConfig};
use crate::error::Result;
use crate::metrics::Category;
use crate::report_helpers::{self, format_count};

/// Print the neighborhood score as a formatted table: overall grade, the
/// per-category breakdown, and the categories costing the most points.
pub fn print_report(result: &ScoreResult, top: usize, target: Option<&str>) {
    let separator = report_helpers::separator(70);

    let header = match target {
        Some(t) => format!("Neighborhood Score: {t}"),
        None => "Neighborhood Score".to_string(),
    };
    println!("{header}");
    println!("{separator}");
    println!(
        " Overall:  {} ({})  {}",
        result.overall_grade,
        result.overall_score,
        grade_color(result.overall_grade)
    );
    println!(" Summary:  {}", score_description(result.overall_score));
    println!(
        " Base:     {:.1}   Civic bonus: +{:.1}",
        result.base_score, result.bonus
    );
    println!("{separator}");
    println!(
        " {:<22} {:>8}   {:>6}   {:>5}   {:>12}",
        "Category", "Count", "Weight", "Score", "Contribution"
    );
    println!("{separator}");

    for c in &result.categories {
        let weight = match c.direction {
            Direction::Negative => format!("{:.0}%", c.weight * 100.0),
            Direction::Positive => "bonus".to_string(),
        };
        println!(
            " {:<22} {:>8}   {:>6}   {:>5}   {:>12.1}",
            c.label,
            format_count(c.raw_count),
            weight,
            c.score,
            c.contribution,
        );
    }

    println!("{separator}");

    let issues = top_issues(result, top);
    if issues.is_empty() {
        return;
    }

    println!();
    println!(" Top Issues (points lost from the base score)");
    println!("{separator}");
    for c in issues {
        println!(
            " {:<22} {:>8}   -{:.1}",
            c.label,
            format_count(c.raw_count),
            c.points_lost()
        );
    }
    println!("{separator}");
}

/// JSON-serializable score output with presentation extras.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonScoreReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(flatten)]
    result: &'a ScoreResult,
    color: &'static str,
    description: &'static str,
    top_issues: Vec<Category>,
}

/// Serialize the score result to pretty-printed JSON and print to stdout.
pub fn print_json(result: &ScoreResult, top: usize, target: Option<&str>) -> Result<()> {
    let json = JsonScoreReport {
        target: target.map(String::from),
        result,
        color: grade_color(result.overall_grade),
        description: score_description(result.overall_score),
        top_issues: top_issues(result, top).iter().map(|c| c.key).collect(),
    };
    report_helpers::print_json_stdout(&json)
}

/// Print the active weight table.
pub fn print_weights(config: &ScoringConfig) {
    let separator = report_helpers::separator(56);

    println!("Scoring Weights");
    println!("{separator}");
    println!(
        " {:<22} {:<9} {:>7}   {:>8}",
        "Category", "Direction", "Weight", "Scale"
    );
    println!("{separator}");
    for c in &config.categories {
        let direction = match c.direction {
            Direction::Negative => "negative",
            Direction::Positive => "positive",
        };
        println!(
            " {:<22} {:<9} {:>6.0}%   {:>8}",
            c.category.label(),
            direction,
            c.weight * 100.0,
            format_count(c.scale),
        );
    }
    println!("{separator}");
    println!(
        " Bonus scale: {}   Bonus cap: {}",
        format_count(config.bonus_scale),
        format_count(config.bonus_cap)
    );
    println!("{separator}");
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonWeights<'a> {
    categories: &'a [CategoryConfig],
    bonus_scale: f64,
    bonus_cap: f64,
}

pub fn print_weights_json(config: &ScoringConfig) -> Result<()> {
    report_helpers::print_json_stdout(&JsonWeights {
        categories: &config.categories,
        bonus_scale: config.bonus_scale,
        bonus_cap: config.bonus_cap,
    })
}

#[derive(Serialize)]
struct JsonGrade {
    score: u8,
    grade: Grade,
    color: &'static str,
    description: &'static str,
}

/// Print the grade lookup for a single score.
pub fn print_grade(score: u8, json: bool) -> Result<()> {
    let grade = score_to_grade(score);
    if json {
        return report_helpers::print_json_stdout(&JsonGrade {
            score,
            grade,
            color: grade_color(grade),
            description: score_description(score),
        });
    }
    println!(
        "{score} → {grade}  {}  {}",
        grade_color(grade),
        score_description(score)
    );
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
