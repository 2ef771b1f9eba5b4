//! Integration tests running the calculators over realistic cycle data,
//! with the production thermal detector behind the T-8 seam.

use ciclo_core::{CandidateSource, CycleDayInput, CycleSummary};
use ciclo_history::{compute_cpm, compute_t8};
use ciclo_thermal::ThermalShiftDetector;
use chrono::{Duration, NaiveDate};

/// A cycle whose temperatures rise on `rise_day` (1-based) and stay high.
fn thermal_cycle(start: NaiveDate, length: i64, rise_day: u32) -> CycleSummary {
    let data: Vec<CycleDayInput> = (0..length)
        .map(|i| {
            let low_band = [36.10, 36.05, 36.15, 36.00, 36.20, 36.10];
            let temp = if (i as u32) + 1 < rise_day {
                low_band[i as usize % low_band.len()]
            } else {
                36.55
            };
            CycleDayInput {
                index: i as usize,
                iso_date: (start + Duration::days(i)).to_string(),
                display_temperature: Some(temp),
                ..Default::default()
            }
        })
        .collect();

    CycleSummary {
        start_date: start.to_string(),
        end_date: Some((start + Duration::days(length - 1)).to_string()),
        data,
        ignored_for_auto_calculations: false,
    }
}

fn history(specs: &[(i64, u32)]) -> Vec<CycleSummary> {
    let mut start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    specs
        .iter()
        .map(|&(length, rise_day)| {
            let cycle = thermal_cycle(start, length, rise_day);
            start += Duration::days(length);
            cycle
        })
        .collect()
}

#[test]
fn both_calculators_agree_on_the_same_history() {
    let cycles = history(&[
        (28, 15),
        (30, 16),
        (27, 14),
        (29, 15),
        (31, 17),
        (26, 14),
    ]);

    let cpm = compute_cpm(&cycles).expect("six qualifying cycles");
    assert_eq!(cpm.source, CandidateSource::Cpm);
    assert_eq!(cpm.day, 5); // 26 - 21

    let detector = ThermalShiftDetector::new();
    let t8 = compute_t8(&cycles, &detector).expect("six confirmed rises");
    assert_eq!(t8.source, CandidateSource::T8);
    assert_eq!(t8.day, 6); // earliest rise 14 - 8
}

#[test]
fn t8_requires_confirmed_rises_even_when_cpm_passes() {
    // Same durations, but two cycles never rise: CPM holds, T-8 does not.
    let mut cycles = history(&[
        (28, 15),
        (30, 16),
        (27, 14),
        (29, 15),
        (31, 17),
        (26, 14),
    ]);
    for cycle in cycles.iter_mut().take(2) {
        for day in &mut cycle.data {
            day.display_temperature = Some(36.10);
        }
    }

    assert!(compute_cpm(&cycles).is_some());
    assert!(compute_t8(&cycles, &ThermalShiftDetector::new()).is_none());
}

#[test]
fn only_the_twelve_most_recent_cycles_count() {
    // Thirteen cycles; the oldest is extremely short but must be ignored.
    let mut specs = vec![(15i64, 10u32)];
    specs.extend(std::iter::repeat((28, 15)).take(12));
    let cycles = history(&specs);

    let cpm = compute_cpm(&cycles).expect("twelve qualifying cycles");
    assert_eq!(cpm.day, 8); // 28 - 20, the 15-day cycle fell off the window
}

#[test]
fn open_ended_current_cycle_is_discarded_by_cpm() {
    let mut cycles = history(&[
        (28, 15),
        (30, 16),
        (27, 14),
        (29, 15),
        (31, 17),
        (26, 14),
    ]);
    let mut open = thermal_cycle(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(), 10, 99);
    open.end_date = None;
    cycles.push(open);

    let cpm = compute_cpm(&cycles).expect("open cycle discarded, six remain");
    assert_eq!(cpm.day, 5);
}
