use serde::{Deserialize, Serialize};

use crate::models::assessment::DailyAssessment;
use crate::models::candidate::{Candidate, CandidateAggregate};
use crate::models::window::FertileWindow;

/// Output of the thermal baseline (coverline) detector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineResult {
    pub baseline_temp: Option<f64>,
    pub baseline_start_index: Option<usize>,
}

/// Notes emitted while silently degrading malformed domain data.
/// Diagnostic only — never part of the algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub notes: Vec<String>,
}

impl DebugInfo {
    pub fn note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }
}

/// Everything the engine produces for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleEvaluation {
    pub daily_assessments: Vec<DailyAssessment>,
    /// Day-of-interest summary resolved from `today_index`.
    pub current: Option<DailyAssessment>,
    pub fertile_window: Option<FertileWindow>,
    pub candidates: Vec<Candidate>,
    pub aggregate: CandidateAggregate,
    pub baseline: BaselineResult,
    pub cpm_candidate: Option<Candidate>,
    pub t8_candidate: Option<Candidate>,
    pub debug: DebugInfo,
}
