//! Candidate aggregation and window assembly.

use tracing::debug;

use ciclo_core::models::{AggregateStatus, CandidateAggregate, FertileWindow};
use ciclo_core::{Candidate, CycleDayInput, EngineConfig, NormalizedDay};

use crate::candidates::{filter_calculators, internal_candidate};
use crate::closure::{closure_detail, effective_peak_index, mucus_closure_index};

/// Everything the window builder resolves for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOutcome {
    pub candidates: Vec<Candidate>,
    pub aggregate: CandidateAggregate,
    pub fertile_window: Option<FertileWindow>,
}

/// Merge the profile candidate with the calculator candidates and build
/// the fertile window.
///
/// Aggregation is earliest-day-wins across every available candidate — a
/// conservative rule preserved exactly: the window opens as soon as any
/// signal suggests it. `temperature_infertile_start_index` is the T+3
/// confirmation from the thermal layer, when available.
pub fn build_candidates(
    days: &[CycleDayInput],
    normalized: &[NormalizedDay],
    calculator_candidates: Vec<Candidate>,
    temperature_infertile_start_index: Option<usize>,
    config: &EngineConfig,
) -> WindowOutcome {
    let mut candidates = Vec::new();
    if let Some(profile) = internal_candidate(normalized) {
        candidates.push(profile);
    }
    candidates.extend(filter_calculators(calculator_candidates, config));

    let selected_day = candidates.iter().map(|c| c.day.max(1)).min();

    let aggregate = match selected_day {
        Some(day) => CandidateAggregate {
            selected_day: Some(day),
            status: AggregateStatus::Determinado,
        },
        None => CandidateAggregate::indeterminate(),
    };

    let fertile_window = selected_day.and_then(|day| {
        build_window(days, normalized, day, temperature_infertile_start_index, config)
    });

    if fertile_window.is_none() {
        debug!(?aggregate, "no fertile window resolved");
    }

    WindowOutcome {
        candidates,
        aggregate,
        fertile_window,
    }
}

fn build_window(
    days: &[CycleDayInput],
    normalized: &[NormalizedDay],
    selected_day: u32,
    temperature_infertile_start_index: Option<usize>,
    config: &EngineConfig,
) -> Option<FertileWindow> {
    if days.is_empty() {
        return None;
    }
    let last_day_index = days.len() - 1;
    let start_index = selected_day as usize - 1;
    if start_index > last_day_index {
        // The predicted opening lies beyond the recorded days.
        return None;
    }

    let mucus_index = effective_peak_index(normalized)
        .and_then(|peak| mucus_closure_index(days, peak, config.postpartum));

    let detail = closure_detail(mucus_index, temperature_infertile_start_index);

    let first_estimate = match (mucus_index, temperature_infertile_start_index) {
        (Some(m), Some(t)) => Some(m.min(t)),
        (Some(m), None) => Some(m),
        (None, Some(t)) => Some(t),
        (None, None) => None,
    };

    let end_index = match first_estimate {
        Some(estimate) => last_day_index.min(estimate.saturating_sub(1)),
        None => last_day_index,
    };

    if start_index > end_index {
        return None;
    }

    Some(FertileWindow {
        start_index,
        end_index,
        mucus_infertile_start_index: mucus_index,
        temperature_infertile_start_index,
        closure_detail: detail,
    })
}
