//! Diff data types and computation for comparing two `ScoreResult`s,
//! e.g. the same block over two observation windows.

use serde::Serialize;

use super::analyzer::{Grade, ScoreResult};
use crate::metrics::Category;

/// Overall score before, after, and signed difference.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreDelta {
    pub before: u8,
    pub after: u8,
    pub delta: i16,
}

/// Per-category change in raw count and category score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDelta {
    pub key: Category,
    pub label: &'static str,
    pub before_count: f64,
    pub after_count: f64,
    pub before_score: u8,
    pub after_score: u8,
    pub score_delta: i16,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDiff {
    pub overall: ScoreDelta,
    pub before_grade: Grade,
    pub after_grade: Grade,
    /// Canonical category order.
    pub categories: Vec<CategoryDelta>,
}

fn signed_delta(before: u8, after: u8) -> i16 {
    i16::from(after) - i16::from(before)
}

/// Compare two results category by category.
pub fn compute_diff(before: &ScoreResult, after: &ScoreResult) -> ScoreDiff {
    let categories = Category::ALL
        .iter()
        .filter_map(|&key| {
            let b = before.category(key)?;
            let a = after.category(key)?;
            Some(CategoryDelta {
                key,
                label: key.label(),
                before_count: b.raw_count,
                after_count: a.raw_count,
                before_score: b.score,
                after_score: a.score,
                score_delta: signed_delta(b.score, a.score),
            })
        })
        .collect();

    ScoreDiff {
        overall: ScoreDelta {
            before: before.overall_score,
            after: after.overall_score,
            delta: signed_delta(before.overall_score, after.overall_score),
        },
        before_grade: before.overall_grade,
        after_grade: after.overall_grade,
        categories,
    }
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;
