//! Seams between the engine crates.

use crate::models::day::CycleDayInput;

/// A confirmed post-ovulatory thermal shift within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvulationConfirmation {
    /// 1-based cycle day of the first day of the sustained rise.
    pub rise_day: u32,
    /// 0-based index of the third sustained high day (T+3).
    pub confirmation_index: usize,
}

/// Confirms ovulation from a cycle's daily records.
///
/// The T-8 calculator and the fertile-window temperature closure both
/// consume this seam; `ciclo-thermal` provides the production
/// implementation.
pub trait OvulationDetector {
    fn confirm(&self, days: &[CycleDayInput]) -> Option<OvulationConfirmation>;
}
