use bazaar_core::models::{QualityTier, Skill, SkillStats};
use bazaar_quality::QualityEngine;
use chrono::Utc;
use proptest::prelude::*;

fn make_skill(
    total_uses: u64,
    average_rating: Option<u32>,
    rating_count: u64,
    with_metadata: bool,
) -> Skill {
    let now = Utc::now();
    let (description, category) = if with_metadata {
        ("desc".to_string(), "cat".to_string())
    } else {
        (String::new(), String::new())
    };
    Skill {
        id: uuid::Uuid::new_v4().to_string(),
        slug: "s".to_string(),
        name: "S".to_string(),
        category,
        tags: vec![],
        description,
        stats: SkillStats {
            total_uses,
            average_rating,
            rating_count,
            hours_saved: 0.0,
            published_at: now,
            first_used_at: None,
        },
    }
}

proptest! {
    // ── Score is bounded: [0, 100] or exactly the sentinel ───────────────

    #[test]
    fn score_bounded_or_sentinel(
        total_uses in 0u64..1_000_000,
        rating in proptest::option::of(0u32..=500),
        rating_count in 0u64..1_000,
        with_metadata in any::<bool>(),
    ) {
        let engine = QualityEngine::new();
        let skill = make_skill(total_uses, rating, rating_count, with_metadata);
        let score = engine.score(&skill);

        if rating_count < 3 {
            prop_assert_eq!(score, -1.0);
        } else {
            prop_assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }
    }

    // ── Monotone in usage ────────────────────────────────────────────────

    #[test]
    fn score_monotone_in_usage(
        base_uses in 0u64..500,
        extra in 1u64..500,
        rating in proptest::option::of(0u32..=500),
    ) {
        let engine = QualityEngine::new();
        let low = engine.score(&make_skill(base_uses, rating, 3, true));
        let high = engine.score(&make_skill(base_uses + extra, rating, 3, true));
        prop_assert!(high >= low);
    }

    // ── Monotone in rating ───────────────────────────────────────────────

    #[test]
    fn score_monotone_in_rating(
        uses in 0u64..500,
        low_rating in 0u32..=499,
        bump in 1u32..=500,
    ) {
        let engine = QualityEngine::new();
        let high_rating = (low_rating + bump).min(500);
        let low = engine.score(&make_skill(uses, Some(low_rating), 3, true));
        let high = engine.score(&make_skill(uses, Some(high_rating), 3, true));
        prop_assert!(high >= low);
    }

    // ── Tier agrees with thresholds ──────────────────────────────────────

    #[test]
    fn tier_matches_score_thresholds(
        total_uses in 0u64..1_000,
        rating in proptest::option::of(0u32..=500),
        rating_count in 3u64..100,
        with_metadata in any::<bool>(),
    ) {
        let engine = QualityEngine::new();
        let (score, tier) = engine.evaluate(&make_skill(total_uses, rating, rating_count, with_metadata));
        let expected = if score >= 75.0 {
            QualityTier::Gold
        } else if score >= 50.0 {
            QualityTier::Silver
        } else if score >= 25.0 {
            QualityTier::Bronze
        } else {
            QualityTier::None
        };
        prop_assert_eq!(tier, expected);
    }
}
