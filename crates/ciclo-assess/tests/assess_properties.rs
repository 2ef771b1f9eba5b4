use ciclo_assess::levels::{effective_levels, raw_level};
use ciclo_assess::{assess_days, current_assessment};
use ciclo_core::models::{ClosureDetail, FertileWindow};
use ciclo_core::{Level, NormalizedDay};
use proptest::prelude::*;

fn day_strategy() -> impl Strategy<Value = NormalizedDay> {
    (0u8..=3, any::<bool>(), prop::bool::weighted(0.05)).prop_map(
        |(level, recorded, peak)| NormalizedDay {
            sensation: Level::new(level),
            is_peak_marked: peak && recorded,
            has_record: recorded || peak,
            ..Default::default()
        },
    )
}

fn full_window(len: usize) -> FertileWindow {
    FertileWindow {
        start_index: 0,
        end_index: len.saturating_sub(1),
        mucus_infertile_start_index: None,
        temperature_infertile_start_index: None,
        closure_detail: ClosureDetail::default(),
    }
}

proptest! {
    #[test]
    fn inherited_levels_never_exceed_the_source(
        days in prop::collection::vec(day_strategy(), 1..40)
    ) {
        let effective = effective_levels(&days);
        prop_assert_eq!(effective.len(), days.len());

        let mut last_recorded = Level::new(0);
        for (day, eff) in days.iter().zip(&effective) {
            if day.has_record {
                last_recorded = raw_level(day);
                prop_assert!(!eff.inherited);
                prop_assert_eq!(eff.level, last_recorded);
            } else {
                prop_assert!(eff.inherited);
                prop_assert!(eff.level <= last_recorded);
            }
        }
    }

    #[test]
    fn assessments_cover_every_day_exactly_once(
        days in prop::collection::vec(day_strategy(), 1..40)
    ) {
        let window = full_window(days.len());
        let assessments = assess_days(&days, Some(&window));
        prop_assert_eq!(assessments.len(), days.len());
        for (i, a) in assessments.iter().enumerate() {
            prop_assert_eq!(a.index, i);
            // An open window assesses every day it spans.
            prop_assert!(a.state.is_some());
            prop_assert!(a.is_fertile);
        }
    }

    #[test]
    fn current_assessment_never_looks_ahead(
        days in prop::collection::vec(day_strategy(), 1..40),
        today in 0usize..40
    ) {
        let window = full_window(days.len());
        let assessments = assess_days(&days, Some(&window));
        if let Some(current) = current_assessment(&assessments, today) {
            prop_assert!(current.index <= today.min(days.len() - 1));
        }
    }
}
