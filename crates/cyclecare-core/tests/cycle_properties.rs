//! Property tests for the cycle engine.

use chrono::{Days, NaiveDate};
use cyclecare_core::{classify, next_occurrence, CyclePhase, CycleProfile};
use proptest::prelude::*;

/// Days from 1900-01-01 to roughly 2100-01-01.
const DATE_SPAN: u64 = 73_000;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0..DATE_SPAN).prop_map(|offset| base() + Days::new(offset))
}

fn arb_profile() -> impl Strategy<Value = CycleProfile> {
    (arb_date(), 1i64..=60)
        .prop_flat_map(|(start, length)| (Just(start), Just(length), 0..=length))
        .prop_map(|(start, length, period)| CycleProfile::new(start, length, period).unwrap())
}

proptest! {
    #[test]
    fn classification_is_periodic(profile in arb_profile(), date in arb_date(), k in -20i64..=20) {
        let shift = k * i64::from(profile.cycle_length_days());
        let shifted = date + chrono::Duration::days(shift);
        prop_assert_eq!(classify(date, &profile), classify(shifted, &profile));
    }

    #[test]
    fn day_of_cycle_in_range(profile in arb_profile(), date in arb_date()) {
        let day = classify(date, &profile).day_of_cycle;
        prop_assert!(day >= 1 && day <= profile.cycle_length_days());
    }

    #[test]
    fn menstrual_iff_within_period(profile in arb_profile(), date in arb_date()) {
        let info = classify(date, &profile);
        prop_assert_eq!(
            info.day_of_cycle <= profile.period_duration_days(),
            info.phase == CyclePhase::Menstrual
        );
    }

    #[test]
    fn fertile_iff_ovulation(profile in arb_profile(), date in arb_date()) {
        let info = classify(date, &profile);
        prop_assert_eq!(info.is_fertile, info.phase == CyclePhase::Ovulation);
    }

    #[test]
    fn continuous_across_start(profile in arb_profile()) {
        let start = profile.cycle_start_date();
        let day_before = start.pred_opt().unwrap();
        prop_assert_eq!(classify(start, &profile).day_of_cycle, 1);
        prop_assert_eq!(
            classify(day_before, &profile).day_of_cycle,
            profile.cycle_length_days()
        );
    }

    #[test]
    fn next_occurrence_is_tight(profile in arb_profile(), after in arb_date()) {
        let next = next_occurrence(&profile, after).unwrap();
        let length = Days::new(u64::from(profile.cycle_length_days()));
        prop_assert!(next > after);
        prop_assert!(next - length <= after);
        prop_assert_eq!(classify(next, &profile).day_of_cycle, 1);
    }
}
