use serde::{Deserialize, Serialize};

/// Which closure criteria have resolved at the end of the fertile window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureStatus {
    /// Neither criterion has resolved; the window runs to the last day.
    #[default]
    Open,
    /// Provisional: only the mucus criterion (P+3/P+4) has resolved.
    Mucus,
    /// Provisional: only the temperature criterion (T+3) has resolved.
    Temperature,
    /// Both criteria resolved — the symptothermal double check holds.
    Absolute,
}

/// How the fertile window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureDetail {
    pub status: ClosureStatus,
    /// First day of absolute infertility: `max(mucus, temperature)` closure
    /// indices, defined only when both are known.
    pub absolute_start_index: Option<usize>,
}

/// The resolved fertile window, all indices 0-based into the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertileWindow {
    pub start_index: usize,
    pub end_index: usize,
    /// P+3 (P+4 postpartum) after the last explicit peak, by calendar days.
    pub mucus_infertile_start_index: Option<usize>,
    /// T+3: third day of sustained temperature above the coverline.
    pub temperature_infertile_start_index: Option<usize>,
    pub closure_detail: ClosureDetail,
}

impl FertileWindow {
    /// Whether `index` falls inside the window (inclusive bounds).
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    /// Earliest defined closure index, if any.
    pub fn first_closure_index(&self) -> Option<usize> {
        match (
            self.mucus_infertile_start_index,
            self.temperature_infertile_start_index,
        ) {
            (Some(m), Some(t)) => Some(m.min(t)),
            (Some(m), None) => Some(m),
            (None, Some(t)) => Some(t),
            (None, None) => None,
        }
    }
}
