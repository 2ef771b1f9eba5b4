use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::models::symbol::DetectedSymbol;

/// Normalized view of one cycle day. Derived, recomputed on every engine
/// call — carries no mutable identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDay {
    /// Sensation level (S axis).
    pub sensation: Level,
    /// Appearance level (M axis).
    pub appearance: Level,
    pub detected_symbol: DetectedSymbol,
    pub is_peak_marked: bool,
    /// `max(score(S), score(M))`.
    pub score_core: f64,
    /// `score_core` raised by the detected symbol's floor, clamped to [0,1].
    pub score_fertil: f64,
    /// Signs changed meaningfully against the early-cycle BIP baseline.
    pub has_change_bip: bool,
    /// Human-readable descriptors of the matched signs, e.g. `"S2 (mojada)"`.
    pub reasons: Vec<String>,
    /// The user recorded something this day.
    pub has_record: bool,
}

impl NormalizedDay {
    /// Highest of the two ordinal levels.
    pub fn max_level(&self) -> Level {
        self.sensation.max(self.appearance)
    }
}
