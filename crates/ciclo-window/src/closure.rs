//! Window closure: the symptothermal double-criterion rule.

use chrono::Duration;

use ciclo_core::constants::{PEAK_CLOSURE_DAYS, PEAK_CLOSURE_DAYS_POSTPARTUM};
use ciclo_core::models::{ClosureDetail, ClosureStatus};
use ciclo_core::{CycleDayInput, NormalizedDay};

/// 0-based index of the last explicit peak marker, if any.
pub fn effective_peak_index(normalized: &[NormalizedDay]) -> Option<usize> {
    normalized.iter().rposition(|d| d.is_peak_marked)
}

/// Resolve P+3 (P+4 postpartum) as a day index.
///
/// Resolution is by real calendar-date difference so gaps in the recorded
/// days don't shorten the count; when dates are unusable it degrades to a
/// raw array offset.
pub fn mucus_closure_index(
    days: &[CycleDayInput],
    peak_index: usize,
    postpartum: bool,
) -> Option<usize> {
    let offset = if postpartum {
        PEAK_CLOSURE_DAYS_POSTPARTUM
    } else {
        PEAK_CLOSURE_DAYS
    };

    let fallback = peak_index + offset as usize;

    let Some(peak_date) = days.get(peak_index).and_then(|d| d.date()) else {
        return Some(fallback);
    };
    let target = peak_date + Duration::days(offset);

    for (i, day) in days.iter().enumerate().skip(peak_index + 1) {
        if let Some(date) = day.date() {
            if date >= target {
                return Some(i);
            }
        }
    }

    // The cycle hasn't reached P+3 yet (or later dates are unusable).
    Some(fallback)
}

/// Combine the two closure criteria into the reported detail.
///
/// Absolute infertility begins only at `max(mucus, temperature)` when both
/// are known; a single resolved criterion is provisional and reported
/// under its own status.
pub fn closure_detail(
    mucus_index: Option<usize>,
    temperature_index: Option<usize>,
) -> ClosureDetail {
    match (mucus_index, temperature_index) {
        (Some(m), Some(t)) => ClosureDetail {
            status: ClosureStatus::Absolute,
            absolute_start_index: Some(m.max(t)),
        },
        (Some(_), None) => ClosureDetail {
            status: ClosureStatus::Mucus,
            absolute_start_index: None,
        },
        (None, Some(_)) => ClosureDetail {
            status: ClosureStatus::Temperature,
            absolute_start_index: None,
        },
        (None, None) => ClosureDetail::default(),
    }
}
