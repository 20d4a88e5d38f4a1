use bazaar_core::config::TrendingConfig;
use bazaar_trending::formula;
use proptest::prelude::*;

proptest! {
    // ── Strictly decreasing in age for fixed usage ───────────────────────

    #[test]
    fn strictly_decreasing_in_age(
        recent_uses in 3u64..10_000,
        age in 0.0f64..10_000.0,
        delta in 0.1f64..1_000.0,
    ) {
        let config = TrendingConfig::default();
        let young = formula::compute(recent_uses, age, &config);
        let old = formula::compute(recent_uses, age + delta, &config);
        prop_assert!(old < young, "age {} -> {}, scores {} -> {}", age, age + delta, young, old);
    }

    // ── Strictly increasing in usage for fixed age ───────────────────────

    #[test]
    fn strictly_increasing_in_recent_uses(
        recent_uses in 3u64..10_000,
        extra in 1u64..1_000,
        age in 0.0f64..10_000.0,
    ) {
        let config = TrendingConfig::default();
        let cool = formula::compute(recent_uses, age, &config);
        let hot = formula::compute(recent_uses + extra, age, &config);
        prop_assert!(hot > cool);
    }

    // ── Always finite and non-negative ───────────────────────────────────

    #[test]
    fn score_is_finite_and_non_negative(
        recent_uses in 0u64..u64::MAX / 2,
        age in -100.0f64..1_000_000.0,
    ) {
        let config = TrendingConfig::default();
        let score = formula::compute(recent_uses, age, &config);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    // ── Gate is exact ────────────────────────────────────────────────────

    #[test]
    fn eligibility_gate_is_exact(recent_uses in 0u64..100) {
        let config = TrendingConfig::default();
        prop_assert_eq!(formula::is_eligible(recent_uses, &config), recent_uses >= 3);
    }
}
