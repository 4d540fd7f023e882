use super::*;
use crate::config::ScoringConfig;
use crate::metrics::RawMetrics;
use crate::score::analyzer::calculate_overall_score;

fn score(m: RawMetrics) -> ScoreResult {
    calculate_overall_score(&m, &ScoringConfig::default())
}

#[test]
fn compute_diff_improvement() {
    let before = score(RawMetrics {
        crime: 50.0,
        crashes: 20.0,
        ..RawMetrics::default()
    });
    let after = score(RawMetrics {
        crime: 10.0,
        crashes: 20.0,
        ..RawMetrics::default()
    });
    let diff = compute_diff(&before, &after);

    assert!(diff.overall.delta > 0);
    assert_eq!(
        diff.overall.delta,
        i16::from(after.overall_score) - i16::from(before.overall_score)
    );
    assert_eq!(diff.categories.len(), 8);
    assert_eq!(diff.categories[0].key, Category::Crime);
    assert_eq!(diff.categories[0].before_count, 50.0);
    assert_eq!(diff.categories[0].after_count, 10.0);
    assert!(diff.categories[0].score_delta > 0);
    assert_eq!(diff.categories[1].score_delta, 0);
}

#[test]
fn compute_diff_regression() {
    let before = score(RawMetrics::default());
    let after = score(RawMetrics {
        violations: 30.0,
        ..RawMetrics::default()
    });
    let diff = compute_diff(&before, &after);

    assert!(diff.overall.delta < 0);
    assert_eq!(diff.before_grade, Grade::A);
    let violations = diff
        .categories
        .iter()
        .find(|c| c.key == Category::Violations)
        .unwrap();
    assert!(violations.score_delta < 0);
}

#[test]
fn compute_diff_no_change() {
    let r = score(RawMetrics {
        cameras: 120.0,
        ..RawMetrics::default()
    });
    let diff = compute_diff(&r, &r);

    assert_eq!(diff.overall.delta, 0);
    assert_eq!(diff.before_grade, diff.after_grade);
    assert!(diff.categories.iter().all(|c| c.score_delta == 0));
}
