//! CPM — shortest-cycle-minus-deduction estimator.

use tracing::debug;

use ciclo_core::constants::{
    CALCULATOR_MAX_CYCLES, CALCULATOR_MIN_CYCLES, CPM_DEDUCTION_FEW, CPM_DEDUCTION_MANY,
};
use ciclo_core::{Candidate, CandidateKind, CandidateSource, CycleSummary};

/// Compute the CPM candidate from past cycles (chronological order,
/// oldest first).
///
/// A cycle qualifies when both dates parse and it is not flagged
/// `ignored_for_auto_calculations`; only the most recent
/// [`CALCULATOR_MAX_CYCLES`] qualifying cycles are considered. Fewer than
/// [`CALCULATOR_MIN_CYCLES`] → `None`.
pub fn compute_cpm(cycles: &[CycleSummary]) -> Option<Candidate> {
    let mut durations: Vec<i64> = Vec::new();

    for cycle in cycles.iter().rev() {
        if durations.len() >= CALCULATOR_MAX_CYCLES {
            break;
        }
        if cycle.ignored_for_auto_calculations {
            continue;
        }
        match cycle.duration_days() {
            Some(days) => durations.push(days),
            None => {
                debug!(start = %cycle.start_date, "CPM: cycle discarded, dates unusable");
            }
        }
    }

    if durations.len() < CALCULATOR_MIN_CYCLES {
        return None;
    }

    let shortest = *durations.iter().min()?;
    let deduction = if durations.len() < CALCULATOR_MAX_CYCLES {
        CPM_DEDUCTION_FEW
    } else {
        CPM_DEDUCTION_MANY
    };
    let day = (shortest - deduction).max(1) as u32;

    Some(Candidate {
        source: CandidateSource::Cpm,
        day,
        reason: format!("ciclo más corto de {shortest} días - {deduction}"),
        kind: CandidateKind::Calculator,
    })
}
