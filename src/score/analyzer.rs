use std::fmt;

use serde::Serialize;

use super::scoring::{CategoryScore, apply_bonus_cap, base_score, civic_bonus, score_all};
use crate::config::{Direction, ScoringConfig};
use crate::error::ValidationError;
use crate::metrics::{Category, RawMetrics};

/// Letter grade from A (90-100) to F (0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundaries belong to the better grade: 90 is an A, 89 a B.
pub fn score_to_grade(score: u8) -> Grade {
    if score >= 90 {
        Grade::A
    } else if score >= 80 {
        Grade::B
    } else if score >= 70 {
        Grade::C
    } else if score >= 60 {
        Grade::D
    } else {
        Grade::F
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: u8,
    pub overall_grade: Grade,
    /// Weighted negative-signal score before the bonus.
    pub base_score: f64,
    /// Capped positive-signal points that were added.
    pub bonus: f64,
    /// Every category, highest raw count first.
    pub categories: Vec<CategoryScore>,
}

impl ScoreResult {
    pub fn category(&self, key: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Score a block. Invalid counts are coerced to 0, so this always succeeds.
pub fn calculate_overall_score(metrics: &RawMetrics, config: &ScoringConfig) -> ScoreResult {
    let metrics = metrics.sanitized();
    let mut scores = score_all(&metrics, config);

    let base = base_score(&scores);
    let bonus = civic_bonus(&scores, config);
    apply_bonus_cap(&mut scores, bonus);
    let overall_score = (base + bonus).round().clamp(0.0, 100.0) as u8;

    log::debug!("base={base:.2} bonus={bonus:.2} overall={overall_score}");

    ScoreResult {
        overall_score,
        overall_grade: score_to_grade(overall_score),
        base_score: base,
        bonus,
        categories: rank_by_raw_count(scores),
    }
}

/// Like [`calculate_overall_score`], but rejects invalid input instead of
/// coercing it.
pub fn calculate_overall_score_strict(
    metrics: &RawMetrics,
    config: &ScoringConfig,
) -> Result<ScoreResult, ValidationError> {
    metrics.validate()?;
    Ok(calculate_overall_score(metrics, config))
}

/// Presentation order. The sort is stable, so ties keep canonical order.
fn rank_by_raw_count(mut scores: Vec<CategoryScore>) -> Vec<CategoryScore> {
    scores.sort_by(|a, b| b.raw_count.total_cmp(&a.raw_count));
    scores
}

/// Negative-signal categories that cost the most points, worst first.
/// Categories that cost nothing are left out.
pub fn top_issues(result: &ScoreResult, n: usize) -> Vec<&CategoryScore> {
    let mut issues: Vec<&CategoryScore> = result
        .categories
        .iter()
        .filter(|c| c.direction == Direction::Negative && c.points_lost() > 0.0)
        .collect();
    issues.sort_by(|a, b| {
        b.points_lost()
            .total_cmp(&a.points_lost())
            .then(a.key.cmp(&b.key))
    });
    issues.truncate(n);
    issues
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
