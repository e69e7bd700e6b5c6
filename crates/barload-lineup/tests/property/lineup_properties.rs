use barload_core::{AthleteAttemptEstimate, AthleteEntry, EstimatorConfig, IncreasePair, LiftType};
use barload_estimator::EstimationContext;
use barload_lineup::{run_session, sequence, LineupSequencer};
use chrono::NaiveDate;
use proptest::prelude::*;
use test_fixtures::history_row;

fn arb_triple() -> impl Strategy<Value = Vec<u32>> {
    prop_oneof![
        1 => Just(Vec::new()),
        4 => (20u32..200, 0u32..10, 0u32..10)
            .prop_map(|(opener, j1, j2)| IncreasePair::new(j1, j2).progression(opener).to_vec()),
    ]
}

fn arb_estimates() -> impl Strategy<Value = Vec<AthleteAttemptEstimate>> {
    prop::collection::vec((arb_triple(), arb_triple()), 0..16).prop_map(|lifts| {
        lifts
            .into_iter()
            .enumerate()
            .map(|(i, (snatch, cj))| AthleteAttemptEstimate {
                athlete_name: format!("athlete-{i}"),
                snatch_estimates: snatch,
                cj_estimates: cj,
                average_snatch_increase: IncreasePair::uniform(3),
                average_cj_increase: IncreasePair::uniform(3),
                best_snatch: None,
                best_cj: None,
                snatch_make_rate: 0.0,
                cj_make_rate: 0.0,
                snatch_attempts_out: 0,
                cj_attempts_out: 0,
            })
            .collect()
    })
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

// ── Monotonic in opener weight ───────────────────────────────────────────

proptest! {
    #[test]
    fn heavier_openers_are_never_earlier(estimates in arb_estimates()) {
        let result = sequence(&estimates);
        for lift in LiftType::ALL {
            for a in &result {
                for b in &result {
                    if let (Some(oa), Some(ob)) = (a.opener(lift), b.opener(lift)) {
                        if oa > ob {
                            prop_assert!(
                                a.attempts_out(lift) >= b.attempts_out(lift),
                                "{} opens at {} with {} out, {} opens at {} with {} out",
                                a.athlete_name, oa, a.attempts_out(lift),
                                b.athlete_name, ob, b.attempts_out(lift)
                            );
                        }
                    }
                }
            }
        }
    }
}

// ── Bounded by the lineup ────────────────────────────────────────────────

proptest! {
    #[test]
    fn counts_are_bounded_by_twice_the_lineup(estimates in arb_estimates()) {
        let result = sequence(&estimates);
        for lift in LiftType::ALL {
            let slots = LineupSequencer::lineup(&estimates, lift).len() as u32;
            for estimate in &result {
                prop_assert!(estimate.attempts_out(lift) <= 2 * slots);
                if estimate.estimates(lift).is_empty() {
                    prop_assert_eq!(estimate.attempts_out(lift), 0);
                }
            }
        }
    }
}

// ── Pure function ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sequencing_is_pure(estimates in arb_estimates()) {
        let once = sequence(&estimates);
        prop_assert_eq!(once.len(), estimates.len());
        prop_assert_eq!(sequence(&estimates), once.clone());
        prop_assert_eq!(sequence(&once), once);
    }
}

// ── End to end shape ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn full_session_output_is_well_formed(
        totals in prop::collection::vec(0u32..400, 0..10),
        rows in prop::collection::vec(
            (0usize..10, 60i32..140, -5i32..10, -5i32..10, 2023i32..2027),
            0..30,
        ),
    ) {
        let roster: Vec<AthleteEntry> = totals
            .iter()
            .enumerate()
            .map(|(i, &total)| AthleteEntry::new(format!("athlete-{i}"), total))
            .collect();
        let history: Vec<_> = rows
            .iter()
            .map(|&(who, opener, j1, j2, year)| {
                let snatch = [opener, opener + j1, opener + j1 + j2];
                let cj = [opener + 20, opener + 20 + j1, opener + 20 + j1 + j2];
                history_row(&format!("athlete-{who}"), &format!("{year}-06-15"), snatch, cj)
            })
            .collect();
        let ctx = EstimationContext::new(as_of());
        let config = EstimatorConfig::default();

        let result = run_session(&roster, &history, &ctx, &config);
        prop_assert_eq!(result.len(), roster.len());
        for estimate in &result {
            prop_assert!(estimate.check_invariants().is_ok());
            for lift in LiftType::ALL {
                let attempts = estimate.estimates(lift);
                prop_assert!(attempts.windows(2).all(|w| w[0] <= w[1]));
            }
        }
        prop_assert_eq!(run_session(&roster, &history, &ctx, &config), result);
    }
}
