//! Coverline detection: the "6 lows" rule.

use ciclo_core::constants::BASELINE_LOW_DAYS;
use ciclo_core::models::BaselineResult;
use ciclo_core::CycleDayInput;

/// One point of a temperature series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TempPoint {
    pub temp: Option<f64>,
    pub ignored: bool,
}

impl TempPoint {
    fn valid(&self) -> Option<f64> {
        if self.ignored {
            return None;
        }
        self.temp
    }
}

impl From<&CycleDayInput> for TempPoint {
    fn from(day: &CycleDayInput) -> Self {
        Self {
            temp: day.display_temperature,
            ignored: day.ignored,
        }
    }
}

/// Find the coverline.
///
/// Scans left to right; the first valid day whose 6 preceding valid
/// temperatures are all strictly lower confirms the baseline. The
/// coverline is the maximum of those 6 lows and `baseline_start_index` is
/// the index of the day holding that maximum (the latest one when tied).
/// No qualifying day → both outputs `None`.
pub fn detect_baseline(series: &[TempPoint]) -> BaselineResult {
    // (index, temp) of every valid day, chronological.
    let valid: Vec<(usize, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.valid().map(|t| (i, t)))
        .collect();

    for pos in BASELINE_LOW_DAYS..valid.len() {
        let (_, candidate_temp) = valid[pos];
        let lows = &valid[pos - BASELINE_LOW_DAYS..pos];

        if !lows.iter().all(|&(_, t)| t < candidate_temp) {
            continue;
        }

        let mut max_index = lows[0].0;
        let mut max_temp = lows[0].1;
        for &(i, t) in &lows[1..] {
            if t >= max_temp {
                max_temp = t;
                max_index = i;
            }
        }

        return BaselineResult {
            baseline_temp: Some(max_temp),
            baseline_start_index: Some(max_index),
        };
    }

    BaselineResult::default()
}
