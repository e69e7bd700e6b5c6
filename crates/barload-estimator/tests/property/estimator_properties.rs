use barload_core::{AthleteEntry, EstimatorConfig, LiftType};
use barload_estimator::{estimate, EstimationContext};
use chrono::NaiveDate;
use proptest::prelude::*;
use test_fixtures::history_row;

fn ctx() -> EstimationContext {
    EstimationContext::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

fn arb_attempts() -> impl Strategy<Value = [i32; 3]> {
    (-150i32..200, -150i32..200, -150i32..200).prop_map(|(a, b, c)| [a, b, c])
}

// ── Shape ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn projections_are_empty_or_non_decreasing_triples(
        total in 0u32..500,
        rows in prop::collection::vec((arb_attempts(), arb_attempts(), 2020i32..2027), 0..8),
    ) {
        let history: Vec<_> = rows
            .iter()
            .map(|(snatch, cj, year)| history_row("P", &format!("{year}-03-01"), *snatch, *cj))
            .collect();
        let result = estimate(&[AthleteEntry::new("P", total)], &history, &ctx(), &EstimatorConfig::default());
        let p = &result[0];

        prop_assert!(p.check_invariants().is_ok());
        for lift in LiftType::ALL {
            let attempts = p.estimates(lift);
            prop_assert!(attempts.is_empty() || attempts.len() == 3);
            prop_assert!(attempts.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!((0.0..=1.0).contains(&p.make_rate(lift)));
            prop_assert_eq!(p.attempts_out(lift), 0);
        }
    }
}

// ── No basis ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn no_history_and_no_total_means_no_projection(
        others in prop::collection::vec(0u32..400, 0..6),
    ) {
        let mut roster = vec![AthleteEntry::new("Empty", 0)];
        roster.extend(
            others
                .iter()
                .enumerate()
                .map(|(i, &t)| AthleteEntry::new(format!("other-{i}"), t)),
        );
        let result = estimate(&roster, &[], &ctx(), &EstimatorConfig::default());
        prop_assert!(result[0].snatch_estimates.is_empty());
        prop_assert!(result[0].cj_estimates.is_empty());
        prop_assert_eq!(result[0].snatch_make_rate, 0.0);
        prop_assert_eq!(result[0].best_snatch, None);
    }
}

// ── Rows outside the window never matter ─────────────────────────────────

proptest! {
    #[test]
    fn stale_rows_do_not_change_the_result(
        total in 0u32..500,
        recent in prop::collection::vec((arb_attempts(), arb_attempts()), 0..4),
        stale in prop::collection::vec((arb_attempts(), arb_attempts()), 1..4),
    ) {
        let recent_rows: Vec<_> = recent
            .iter()
            .map(|(s, c)| history_row("P", "2026-01-15", *s, *c))
            .collect();
        let mut with_stale = recent_rows.clone();
        with_stale.extend(stale.iter().map(|(s, c)| history_row("P", "2021-01-15", *s, *c)));

        let roster = [AthleteEntry::new("P", total)];
        let config = EstimatorConfig::default();
        prop_assert_eq!(
            estimate(&roster, &recent_rows, &ctx(), &config),
            estimate(&roster, &with_stale, &ctx(), &config)
        );
    }
}
