//! The day-by-day assessment walk.

use ciclo_core::constants::ESCALATION_WINDOW_DAYS;
use ciclo_core::models::FertileWindow;
use ciclo_core::{AssessmentState, CyclePhase, DailyAssessment, Level, NormalizedDay};

use crate::levels::{effective_levels, EffectiveLevel};
use crate::texts;

/// Assess every day of the cycle against the fertile window.
///
/// Days strictly before the window start carry no state ("not yet
/// computed"). In-window days classify by effective level with monotonic
/// peak-proximity escalation. Past the closure indices, days are
/// `waiting` until both criteria resolve, then `infertil`.
pub fn assess_days(
    normalized: &[NormalizedDay],
    window: Option<&FertileWindow>,
) -> Vec<DailyAssessment> {
    let effective = effective_levels(normalized);
    let peak_index = normalized.iter().rposition(|d| d.is_peak_marked);

    let mut last_strong_index: Option<usize> = None;

    normalized
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let eff = effective[i];
            if eff.level >= Level::new(2) && !region_closed(window, i) {
                // Strong days feed the proximity escalation even when the
                // classification below skips them.
                track_strong(&mut last_strong_index, i);
            }

            let (state, inherited) = classify(i, day, eff, window, peak_index, last_strong_index);
            build_assessment(i, day, state, inherited)
        })
        .collect()
}

/// Day-of-interest summary: the nearest fertile day at or before
/// `today_index`, else the nearest assessed day.
pub fn current_assessment(
    assessments: &[DailyAssessment],
    today_index: usize,
) -> Option<DailyAssessment> {
    let today = today_index.min(assessments.len().checked_sub(1)?);

    assessments[..=today]
        .iter()
        .rev()
        .find(|a| a.is_fertile)
        .or_else(|| assessments[..=today].iter().rev().find(|a| a.state.is_some()))
        .cloned()
}

fn track_strong(last_strong: &mut Option<usize>, index: usize) {
    *last_strong = Some(index);
}

fn region_closed(window: Option<&FertileWindow>, index: usize) -> bool {
    window
        .and_then(|w| w.first_closure_index())
        .is_some_and(|c| index >= c)
}

/// State for one day, `None` when the day is not yet assessable.
fn classify(
    index: usize,
    _day: &NormalizedDay,
    effective: EffectiveLevel,
    window: Option<&FertileWindow>,
    peak_index: Option<usize>,
    last_strong_index: Option<usize>,
) -> (Option<AssessmentState>, bool) {
    let Some(window) = window else {
        return (None, false);
    };

    // Closure region first: waiting until both criteria resolve.
    let mucus = window.mucus_infertile_start_index;
    let temperature = window.temperature_infertile_start_index;
    match (mucus, temperature) {
        (Some(m), Some(t)) => {
            let absolute = m.max(t);
            let first = m.min(t);
            if index >= absolute {
                return (Some(AssessmentState::Infertil), false);
            }
            if index >= first {
                return (Some(AssessmentState::Waiting), false);
            }
        }
        (Some(c), None) | (None, Some(c)) => {
            if index >= c {
                return (Some(AssessmentState::Waiting), false);
            }
        }
        (None, None) => {}
    }

    if index < window.start_index || index > window.end_index {
        return (None, false);
    }

    let mut state = AssessmentState::from_level(effective.level.value());

    // Peak-proximity escalation: raise-only, relative to the explicit peak.
    if let Some(peak) = peak_index {
        if index >= peak && index <= peak + 2 {
            state = state.max(AssessmentState::MuyAlta);
        } else if index == peak + 3 {
            state = state.max(AssessmentState::Alta);
        }
    }
    if let Some(strong) = last_strong_index {
        if index > strong && index - strong <= ESCALATION_WINDOW_DAYS {
            state = state.max(AssessmentState::Aumento);
        }
    }

    (Some(state), effective.inherited)
}

fn build_assessment(
    index: usize,
    day: &NormalizedDay,
    state: Option<AssessmentState>,
    inherited: bool,
) -> DailyAssessment {
    let (title, body, is_fertile, phase) = match state {
        Some(s) => (
            texts::title(s).to_string(),
            texts::body(s, inherited),
            s.is_fertile(),
            if s == AssessmentState::Infertil {
                CyclePhase::Postovulatoria
            } else {
                CyclePhase::Fertil
            },
        ),
        None => (String::new(), String::new(), false, CyclePhase::Preovulatoria),
    };

    DailyAssessment {
        index,
        state,
        title,
        body,
        reasons_list: day.reasons.clone(),
        has_record: day.has_record,
        inherited,
        is_fertile,
        phase,
    }
}
