//! Per-category scoring.
//!
//! Negative-signal categories turn their severity into a 0–100 score
//! (100 = nothing reported) weighted into the base score. Positive-signal
//! categories (pothole repairs, permits, licenses) score the other way round
//! and only offer bonus points, which the aggregator caps.

use serde::Serialize;

use super::normalize::{bonus_fraction, severity};
use crate::config::{Direction, ScoringConfig};
use crate::metrics::{Category, RawMetrics, sanitize_count};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub key: Category,
    pub label: &'static str,
    pub direction: Direction,
    pub raw_count: f64,
    /// Harm in [0, 1]; always 0 for positive signals.
    pub severity: f64,
    pub score: u8,
    pub weight: f64,
    /// Points toward the composite: `weight × score` for negative signals,
    /// bonus points for positive ones. Positive contributions are uncapped
    /// from [`score_category`] and scaled to the cap by [`apply_bonus_cap`].
    pub contribution: f64,
}

impl CategoryScore {
    /// Points this category costs the base score (0 for positive signals).
    pub fn points_lost(&self) -> f64 {
        match self.direction {
            Direction::Negative => self.weight * (100.0 - f64::from(self.score)),
            Direction::Positive => 0.0,
        }
    }
}

fn to_score(fraction: f64) -> u8 {
    (100.0 * fraction).round().clamp(0.0, 100.0) as u8
}

/// Score one category of `metrics` with the table in `config`.
pub fn score_category(
    metrics: &RawMetrics,
    category: Category,
    config: &ScoringConfig,
) -> CategoryScore {
    let entry = config.get(category);
    let raw_count = sanitize_count(metrics.get(category));

    let (severity, score, contribution) = match entry.direction {
        Direction::Negative => {
            let sev = severity(raw_count, entry.scale);
            let score = to_score(1.0 - sev);
            (sev, score, entry.weight * f64::from(score))
        }
        Direction::Positive => {
            let frac = bonus_fraction(raw_count, entry.scale);
            (0.0, to_score(frac), frac * config.bonus_scale)
        }
    };

    log::trace!("{category}: count={raw_count} severity={severity:.4} score={score}");

    CategoryScore {
        key: category,
        label: category.label(),
        direction: entry.direction,
        raw_count,
        severity,
        score,
        weight: entry.weight,
        contribution,
    }
}

/// Score every category in canonical order.
pub fn score_all(metrics: &RawMetrics, config: &ScoringConfig) -> Vec<CategoryScore> {
    Category::ALL
        .iter()
        .map(|&c| score_category(metrics, c, config))
        .collect()
}

/// Weighted sum of negative-signal scores, in [0, 100].
pub fn base_score(scores: &[CategoryScore]) -> f64 {
    scores
        .iter()
        .filter(|c| c.direction == Direction::Negative)
        .map(|c| c.contribution)
        .sum()
}

/// Positive-signal points, capped at `config.bonus_cap`.
pub fn civic_bonus(scores: &[CategoryScore], config: &ScoringConfig) -> f64 {
    let offered: f64 = scores
        .iter()
        .filter(|c| c.direction == Direction::Positive)
        .map(|c| c.contribution)
        .sum();
    offered.min(config.bonus_cap)
}

/// Scale positive-signal contributions down so they add up to `bonus`.
/// No-op when the offered points are already within it.
pub fn apply_bonus_cap(scores: &mut [CategoryScore], bonus: f64) {
    let offered: f64 = scores
        .iter()
        .filter(|c| c.direction == Direction::Positive)
        .map(|c| c.contribution)
        .sum();
    if offered <= bonus {
        return;
    }
    let factor = bonus / offered;
    for c in scores
        .iter_mut()
        .filter(|c| c.direction == Direction::Positive)
    {
        c.contribution *= factor;
    }
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
