use blockscore::config::{Direction, ScoringConfig};
use blockscore::metrics::{Category, RawMetrics};
use blockscore::score::analyzer::{Grade, calculate_overall_score, score_to_grade};
use blockscore::score::presentation::{grade_description, score_description};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_metrics()(
        crime in 0.0..500.0f64,
        crashes in 0.0..300.0f64,
        violations in 0.0..200.0f64,
        service_requests in 0.0..1000.0f64,
        cameras in 0.0..20000.0f64,
        potholes in 0.0..300.0f64,
        permits in 0.0..300.0f64,
        licenses in 0.0..300.0f64
    ) -> RawMetrics {
        RawMetrics {
            crime,
            crashes,
            violations,
            service_requests,
            cameras,
            potholes,
            permits,
            licenses,
        }
    }
}

// Any f64, including negatives, infinities and NaN.
fn arb_dirty_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0..1000.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        any::<f64>(),
    ]
}

prop_compose! {
    fn arb_dirty_metrics()(
        values in proptest::array::uniform8(arb_dirty_value())
    ) -> RawMetrics {
        let mut m = RawMetrics::default();
        for (c, v) in Category::ALL.into_iter().zip(values) {
            m.set(c, v);
        }
        m
    }
}

fn arb_category() -> impl Strategy<Value = Category> {
    (0usize..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

fn without_civic(m: RawMetrics) -> RawMetrics {
    RawMetrics {
        potholes: 0.0,
        permits: 0.0,
        licenses: 0.0,
        ..m
    }
}

proptest! {
    #[test]
    fn score_and_grade_are_bounded(m in arb_dirty_metrics()) {
        let r = calculate_overall_score(&m, &ScoringConfig::default());
        prop_assert!(r.overall_score <= 100);
        prop_assert!(Grade::ALL.contains(&r.overall_grade));
        prop_assert!(r.base_score.is_finite());
        prop_assert!(r.bonus.is_finite());
        for c in &r.categories {
            prop_assert!(c.score <= 100);
            prop_assert!((0.0..=1.0).contains(&c.severity));
            prop_assert!(c.raw_count.is_finite() && c.raw_count >= 0.0);
        }
    }

    #[test]
    fn grade_matches_threshold_table(m in arb_metrics()) {
        let r = calculate_overall_score(&m, &ScoringConfig::default());
        prop_assert_eq!(r.overall_grade, score_to_grade(r.overall_score));
        prop_assert_eq!(
            score_description(r.overall_score),
            grade_description(r.overall_grade)
        );
    }

    #[test]
    fn monotonic_in_each_category(
        m in arb_metrics(),
        category in arb_category(),
        extra in 0.0..200.0f64
    ) {
        let config = ScoringConfig::default();
        let before = calculate_overall_score(&m, &config);
        let bumped = m.with(category, m.get(category) + extra);
        let after = calculate_overall_score(&bumped, &config);

        match config.get(category).direction {
            Direction::Negative => prop_assert!(after.overall_score <= before.overall_score),
            Direction::Positive => prop_assert!(after.overall_score >= before.overall_score),
        }
    }

    #[test]
    fn civic_bonus_never_exceeds_cap(m in arb_metrics()) {
        let config = ScoringConfig::default();
        let with = calculate_overall_score(&m, &config);
        let without = calculate_overall_score(&without_civic(m), &config);
        prop_assert!(with.overall_score >= without.overall_score);
        prop_assert!(
            f64::from(with.overall_score - without.overall_score) <= config.bonus_cap
        );
    }

    #[test]
    fn deterministic(m in arb_dirty_metrics()) {
        let config = ScoringConfig::default();
        let a = serde_json::to_string(&calculate_overall_score(&m, &config)).unwrap();
        let b = serde_json::to_string(&calculate_overall_score(&m, &config)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn categories_sorted_by_raw_count(m in arb_metrics()) {
        let r = calculate_overall_score(&m, &ScoringConfig::default());
        prop_assert_eq!(r.categories.len(), Category::ALL.len());
        for w in r.categories.windows(2) {
            prop_assert!(w[0].raw_count >= w[1].raw_count);
        }
    }
}
