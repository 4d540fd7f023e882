//! Saturating normalization curves for the neighborhood score.
//!
//! Raw counts map to [0, 1] through `1 - exp(-count / scale)`. The curve is 0
//! at count 0, strictly increasing, and approaches 1 asymptotically, so each
//! additional incident matters less than the one before it: 40 crimes is not
//! twice as bad as 20. `scale` is the count at which the curve reaches
//! `1 - 1/e` (~63%).

/// Shared curve. Non-positive and NaN counts map to exactly 0.
fn saturate(count: f64, scale: f64) -> f64 {
    debug_assert!(scale > 0.0, "scale must be positive");
    if count.is_nan() || count <= 0.0 {
        return 0.0;
    }
    // 1 - e^(-x) computed as -expm1(-x) to keep precision for small counts.
    -(-count / scale).exp_m1()
}

/// Harm in [0, 1] for a negative-signal count (crime, crashes, ...).
pub fn severity(count: f64, scale: f64) -> f64 {
    saturate(count, scale)
}

/// Reward fraction in [0, 1] for a positive-signal count (permits, licenses,
/// pothole repairs).
pub fn bonus_fraction(count: f64, scale: f64) -> f64 {
    saturate(count, scale)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
