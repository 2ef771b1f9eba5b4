use serde::{Deserialize, Serialize};

/// Per-calculator enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorsConfig {
    pub cpm: bool,
    pub t8: bool,
}

impl Default for CalculatorsConfig {
    fn default() -> Self {
        Self { cpm: true, t8: true }
    }
}

/// Engine configuration, supplied by the caller per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Postpartum mode: calculators are suppressed and mucus closure
    /// extends to P+4.
    pub postpartum: bool,
    pub calculators: CalculatorsConfig,
}
