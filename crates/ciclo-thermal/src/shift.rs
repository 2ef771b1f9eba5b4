//! Thermal-shift ovulation confirmation (T+3).

use ciclo_core::constants::SUSTAINED_HIGH_DAYS;
use ciclo_core::{CycleDayInput, OvulationConfirmation, OvulationDetector};

use crate::baseline::{detect_baseline, TempPoint};

/// Confirms ovulation from sustained post-ovulatory temperatures.
///
/// Requires a coverline (see [`detect_baseline`]) plus 3 consecutive valid
/// days strictly above it. The rise day is the first high day; the
/// confirmation index is the third (T+3), where temperature-based
/// infertility begins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThermalShiftDetector;

impl ThermalShiftDetector {
    pub fn new() -> Self {
        Self
    }

    /// Confirm over a raw temperature series.
    pub fn confirm_series(&self, series: &[TempPoint]) -> Option<OvulationConfirmation> {
        let baseline = detect_baseline(series);
        let coverline = baseline.baseline_temp?;
        let baseline_index = baseline.baseline_start_index?;

        let mut highs = 0usize;
        let mut rise_index: Option<usize> = None;

        for (i, point) in series.iter().enumerate().skip(baseline_index + 1) {
            let temp = match (point.ignored, point.temp) {
                (false, Some(t)) => t,
                _ => continue,
            };

            if temp > coverline {
                if highs == 0 {
                    rise_index = Some(i);
                }
                highs += 1;
                if highs == SUSTAINED_HIGH_DAYS {
                    return Some(OvulationConfirmation {
                        rise_day: rise_index? as u32 + 1,
                        confirmation_index: i,
                    });
                }
            } else {
                // A valid day at or below the coverline breaks the run.
                highs = 0;
                rise_index = None;
            }
        }

        None
    }
}

impl OvulationDetector for ThermalShiftDetector {
    fn confirm(&self, days: &[CycleDayInput]) -> Option<OvulationConfirmation> {
        let series: Vec<TempPoint> = days.iter().map(TempPoint::from).collect();
        self.confirm_series(&series)
    }
}
