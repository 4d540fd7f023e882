use super::*;

#[test]
fn severity_zero_count_is_exactly_zero() {
    assert_eq!(severity(0.0, 25.0), 0.0);
}

#[test]
fn severity_at_scale_is_about_63_percent() {
    let s = severity(25.0, 25.0);
    let expected = 1.0 - (-1.0f64).exp();
    assert!((s - expected).abs() < 1e-12, "got {s}");
    assert!((s - 0.632).abs() < 0.001, "got {s}");
}

#[test]
fn severity_diminishing_returns() {
    let twenty = severity(20.0, 25.0);
    let forty = severity(40.0, 25.0);
    assert!(forty > twenty);
    assert!(forty < 2.0 * twenty, "40 should be less than twice as bad as 20");
}

#[test]
fn severity_monotonic() {
    let counts = [0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 200.0];
    for w in counts.windows(2) {
        let lo = severity(w[0], 25.0);
        let hi = severity(w[1], 25.0);
        assert!(
            hi > lo,
            "severity should be strictly increasing: {} -> {lo}, {} -> {hi}",
            w[0],
            w[1]
        );
    }
}

#[test]
fn severity_bounded_below_one() {
    for count in [1.0, 100.0, 500.0] {
        let s = severity(count, 25.0);
        assert!((0.0..1.0).contains(&s), "count {count} -> {s}");
    }
}

#[test]
fn severity_huge_count_never_exceeds_one() {
    let s = severity(1e12, 10.0);
    assert!(s <= 1.0, "got {s}");
}

#[test]
fn severity_invalid_counts_are_zero() {
    assert_eq!(severity(-3.0, 10.0), 0.0);
    assert_eq!(severity(f64::NAN, 10.0), 0.0);
    assert_eq!(severity(f64::NEG_INFINITY, 10.0), 0.0);
}

#[test]
fn smaller_scale_saturates_faster() {
    assert!(severity(10.0, 10.0) > severity(10.0, 40.0));
}

#[test]
fn bonus_fraction_matches_curve() {
    assert_eq!(bonus_fraction(0.0, 10.0), 0.0);
    assert!((bonus_fraction(10.0, 10.0) - severity(10.0, 10.0)).abs() < 1e-15);
    assert!(bonus_fraction(20.0, 10.0) > bonus_fraction(15.0, 10.0));
}
