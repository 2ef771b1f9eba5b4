//! T-8 — thermal-rise-minus-eight estimator.

use tracing::debug;

use ciclo_core::constants::{CALCULATOR_MAX_CYCLES, CALCULATOR_MIN_CYCLES, T8_OFFSET_DAYS};
use ciclo_core::{Candidate, CandidateKind, CandidateSource, CycleSummary, OvulationDetector};

/// Compute the T-8 candidate from past cycles (chronological order,
/// oldest first).
///
/// The most recent [`CALCULATOR_MAX_CYCLES`] non-ignored cycles are run
/// through the ovulation detector; a cycle qualifies only when the thermal
/// shift is confirmed. Fewer than [`CALCULATOR_MIN_CYCLES`] qualifying →
/// `None`. The candidate day is the smallest `rise_day - 8` (earliest,
/// most conservative).
pub fn compute_t8(
    cycles: &[CycleSummary],
    detector: &dyn OvulationDetector,
) -> Option<Candidate> {
    let mut considered = 0usize;
    let mut t8_days: Vec<u32> = Vec::new();
    let mut earliest_rise: Option<u32> = None;

    for cycle in cycles.iter().rev() {
        if considered >= CALCULATOR_MAX_CYCLES {
            break;
        }
        if cycle.ignored_for_auto_calculations {
            continue;
        }
        considered += 1;

        match detector.confirm(&cycle.data) {
            Some(confirmation) => {
                let t8 = (confirmation.rise_day as i64 - T8_OFFSET_DAYS).max(1) as u32;
                if earliest_rise.map_or(true, |r| confirmation.rise_day < r) {
                    earliest_rise = Some(confirmation.rise_day);
                }
                t8_days.push(t8);
            }
            None => {
                debug!(start = %cycle.start_date, "T-8: cycle discarded, no confirmed rise");
            }
        }
    }

    if t8_days.len() < CALCULATOR_MIN_CYCLES {
        return None;
    }

    let day = *t8_days.iter().min()?;
    let rise = earliest_rise?;

    Some(Candidate {
        source: CandidateSource::T8,
        day,
        reason: format!("subida térmica más temprana en día {rise} - {T8_OFFSET_DAYS}"),
        kind: CandidateKind::Calculator,
    })
}
