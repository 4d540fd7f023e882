//! Color tokens and one-line descriptions for grades and scores.
//!
//! Description bands are the grade bands, so a score's description always
//! agrees with its grade.

use super::analyzer::{Grade, score_to_grade};

/// Hex color token for a grade, green (A) through red (F).
pub fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "#22c55e",
        Grade::B => "#84cc16",
        Grade::C => "#eab308",
        Grade::D => "#f97316",
        Grade::F => "#ef4444",
    }
}

pub fn grade_description(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "Quiet, well-kept block with very little reported trouble",
        Grade::B => "Generally calm block with occasional issues",
        Grade::C => "Mixed block with a noticeable amount of activity",
        Grade::D => "Busy block with frequent incidents and complaints",
        Grade::F => "Chaotic block with heavy incident activity",
    }
}

/// One-line description of a 0–100 score. Scores above 100 read as 100.
pub fn score_description(score: u8) -> &'static str {
    grade_description(score_to_grade(score.min(100)))
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod tests;
