//! Aquaculture performance formulas.
//!
//! Every function is total: a zero denominator yields `0.0` instead of an
//! error or a non-finite value. The one exception is the logarithm in
//! [`specific_growth_rate`], which is only guarded against a zero initial
//! weight; a zero or negative final weight produces a non-finite result that
//! is passed on to the caller untouched.

/// Survival rate in percent: `(Nt / N0) × 100`.
pub fn survival_rate(n0: f64, nt: f64) -> f64 {
    if n0 == 0.0 {
        return 0.0;
    }
    (nt / n0) * 100.0
}

/// Feed conversion ratio: `F / ((Wt + D) - W0)` on total biomass.
pub fn feed_conversion_ratio(feed: f64, w0: f64, wt: f64, dead_weight: f64) -> f64 {
    let gain = (wt + dead_weight) - w0;
    if gain == 0.0 {
        return 0.0;
    }
    feed / gain
}

/// Specific growth rate in %/day: `((ln Wt - ln W0) / t) × 100` on individual weight.
pub fn specific_growth_rate(w0: f64, wt: f64, days: f64) -> f64 {
    if w0 == 0.0 || days == 0.0 {
        return 0.0;
    }
    ((wt.ln() - w0.ln()) / days) * 100.0
}

/// Relative growth rate in %/day: `((Wt - W0) / (W0 × t)) × 100` on individual weight.
pub fn relative_growth_rate(w0: f64, wt: f64, days: f64) -> f64 {
    if w0 == 0.0 || days == 0.0 {
        return 0.0;
    }
    ((wt - w0) / (w0 * days)) * 100.0
}

/// Feed efficiency in percent: `(((Wt + D) - W0) / F) × 100` on total biomass.
pub fn feed_efficiency(w0: f64, wt: f64, dead_weight: f64, feed: f64) -> f64 {
    if feed == 0.0 {
        return 0.0;
    }
    (((wt + dead_weight) - w0) / feed) * 100.0
}

/// Total feed consumption (TKP) in grams.
pub fn total_feed(amounts: &[f64]) -> f64 {
    amounts.iter().sum()
}

/// Absolute individual weight gain in grams.
pub fn absolute_weight_gain(w0: f64, wt: f64) -> f64 {
    wt - w0
}

/// Absolute length gain in cm.
pub fn absolute_length_gain(l0: f64, lt: f64) -> f64 {
    lt - l0
}

// Reproductive and physiological indices.

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    (part / whole) * 100.0
}

/// Fecundity estimated from a gonad subsample: `(Bg / Bs) × Fs` eggs.
pub fn fecundity(gonad_weight: f64, subsample_weight: f64, subsample_eggs: f64) -> f64 {
    if subsample_weight == 0.0 {
        return 0.0;
    }
    (gonad_weight / subsample_weight) * subsample_eggs
}

/// Gonadosomatic index in percent: `(Bg / Bt) × 100`.
pub fn gonadosomatic_index(gonad_weight: f64, body_weight: f64) -> f64 {
    percent_of(gonad_weight, body_weight)
}

/// Fertilization rate in percent.
pub fn fertilization_rate(fertilized: f64, total_eggs: f64) -> f64 {
    percent_of(fertilized, total_eggs)
}

/// Hatching rate in percent.
pub fn hatching_rate(hatched: f64, fertilized: f64) -> f64 {
    percent_of(hatched, fertilized)
}

/// Hepatosomatic index in percent: `(liver / body) × 100`.
pub fn hepatosomatic_index(liver_weight: f64, body_weight: f64) -> f64 {
    percent_of(liver_weight, body_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn survival_rate_is_a_percentage_of_initial_stock() {
        assert_relative_eq!(survival_rate(1000.0, 950.0), 95.0);
        assert_eq!(survival_rate(1000.0, 0.0), 0.0);
        assert_eq!(survival_rate(0.0, 25.0), 0.0);
        // Over-counted mortality is surfaced, not clamped.
        assert_relative_eq!(survival_rate(100.0, -20.0), -20.0);
    }

    #[test]
    fn fcr_returns_zero_without_biomass_gain() {
        assert_eq!(feed_conversion_ratio(5000.0, 30_000.0, 29_000.0, 1000.0), 0.0);
        assert_eq!(feed_conversion_ratio(0.0, 10.0, 10.0, 0.0), 0.0);
        assert_relative_eq!(
            feed_conversion_ratio(80_000.0, 30_000.0, 42_750.0, 2000.0),
            80_000.0 / 14_750.0
        );
    }

    #[test]
    fn sgr_guards_and_flat_growth() {
        assert_eq!(specific_growth_rate(0.0, 20.0, 10.0), 0.0);
        assert_eq!(specific_growth_rate(10.0, 20.0, 0.0), 0.0);
        assert_eq!(specific_growth_rate(12.5, 12.5, 30.0), 0.0);
        assert_relative_eq!(
            specific_growth_rate(10.0, 20.0, 10.0),
            std::f64::consts::LN_2 * 10.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn sgr_of_zero_final_weight_is_not_finite() {
        assert!(!specific_growth_rate(10.0, 0.0, 5.0).is_finite());
        assert!(specific_growth_rate(10.0, -1.0, 5.0).is_nan());
    }

    #[test]
    fn rgr_doubling_in_one_day_is_one_hundred_percent() {
        assert_relative_eq!(relative_growth_rate(10.0, 20.0, 1.0), 100.0);
        assert_eq!(relative_growth_rate(0.0, 20.0, 1.0), 0.0);
        assert_eq!(relative_growth_rate(10.0, 20.0, 0.0), 0.0);
    }

    #[test]
    fn feed_efficiency_is_zero_without_feed() {
        assert_eq!(feed_efficiency(100.0, 300.0, 10.0, 0.0), 0.0);
        assert_relative_eq!(feed_efficiency(100.0, 300.0, 0.0, 400.0), 50.0);
    }

    #[test]
    fn total_feed_is_a_plain_sum() {
        assert_eq!(total_feed(&[]), 0.0);
        assert_eq!(total_feed(&[100.0, 150.0, 250.0]), 500.0);
    }

    #[test]
    fn absolute_gains() {
        assert_eq!(absolute_weight_gain(10.0, 25.0), 15.0);
        assert_eq!(absolute_length_gain(5.0, 8.0), 3.0);
    }

    #[test]
    fn reproductive_indices() {
        assert_relative_eq!(fecundity(50.0, 1.0, 400.0), 20_000.0);
        assert_eq!(fecundity(50.0, 0.0, 400.0), 0.0);
        assert_relative_eq!(gonadosomatic_index(12.0, 240.0), 5.0);
        assert_relative_eq!(fertilization_rate(850.0, 1000.0), 85.0);
        assert_relative_eq!(hatching_rate(680.0, 850.0), 80.0);
        assert_relative_eq!(hepatosomatic_index(3.0, 200.0), 1.5);
        assert_eq!(hatching_rate(10.0, 0.0), 0.0);
    }
}
