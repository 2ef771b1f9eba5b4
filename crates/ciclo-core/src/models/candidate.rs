use serde::{Deserialize, Serialize};

/// Where a fertile-window-start candidate came from.
///
/// Serialized values are fixed external strings: `Interno`, `CPM`, `T8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    #[serde(rename = "Interno")]
    Interno,
    #[serde(rename = "CPM")]
    Cpm,
    #[serde(rename = "T8")]
    T8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Derived from the current cycle's own signs.
    Profile,
    /// Derived from past-cycle statistics.
    Calculator,
}

/// A proposed first day of the fertile window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub source: CandidateSource,
    /// 1-based cycle day, always >= 1.
    pub day: u32,
    pub reason: String,
    pub kind: CandidateKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateStatus {
    Determinado,
    Indeterminado,
}

/// Result of merging all candidates: earliest day wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAggregate {
    /// 1-based cycle day the fertile window opens on, when determined.
    pub selected_day: Option<u32>,
    pub status: AggregateStatus,
}

impl CandidateAggregate {
    pub fn indeterminate() -> Self {
        Self {
            selected_day: None,
            status: AggregateStatus::Indeterminado,
        }
    }
}
