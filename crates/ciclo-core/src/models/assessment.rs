use serde::{Deserialize, Serialize};

/// Per-day fertility classification.
///
/// Serialized values are fixed external strings: `waiting`, `inicio`,
/// `aumento`, `alta`, `muyAlta`, `infertil`. An unassessed day carries no
/// state (`null`).
///
/// The derived ordering (`inicio < aumento < alta < muyAlta`) drives the
/// monotonic peak-proximity escalation: escalation only raises a state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentState {
    Inicio,
    Aumento,
    Alta,
    MuyAlta,
    Waiting,
    Infertil,
}

impl AssessmentState {
    /// Fertility is held open in every state but `infertil`.
    pub fn is_fertile(self) -> bool {
        !matches!(self, AssessmentState::Infertil)
    }

    /// States produced from sign levels, in escalation order.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => AssessmentState::Inicio,
            1 => AssessmentState::Aumento,
            2 => AssessmentState::Alta,
            _ => AssessmentState::MuyAlta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Preovulatoria,
    Fertil,
    Postovulatoria,
}

/// The engine's output for one cycle day. Recomputed fresh on every
/// invocation from the full day array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAssessment {
    pub index: usize,
    /// `None` = not yet computed (before the window opens).
    pub state: Option<AssessmentState>,
    pub title: String,
    pub body: String,
    pub reasons_list: Vec<String>,
    pub has_record: bool,
    /// True when the level was inherited from an earlier recorded day.
    pub inherited: bool,
    pub is_fertile: bool,
    pub phase: CyclePhase,
}
