//! Neighborhood condition scoring.
//!
//! Turns municipal incident counts for a small radius around an address into
//! a 0–100 score, an A–F grade and a per-category breakdown:
//!
//! ```
//! use blockscore::config::ScoringConfig;
//! use blockscore::metrics::RawMetrics;
//! use blockscore::score::analyzer::{Grade, calculate_overall_score};
//!
//! let result = calculate_overall_score(&RawMetrics::default(), &ScoringConfig::default());
//! assert_eq!(result.overall_score, 100);
//! assert_eq!(result.overall_grade, Grade::A);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
mod report_helpers;
pub mod score;
