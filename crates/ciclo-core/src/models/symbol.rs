use serde::{Deserialize, Serialize};

use crate::constants::LEVEL_SCORES;
use crate::level::Level;

/// Raw symbol as recorded by the user (calendar dot colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawSymbol {
    #[default]
    None,
    Red,
    White,
    Green,
    Yellow,
    Spot,
}

impl RawSymbol {
    /// Menstrual-flow days are excluded from the BIP baseline window.
    pub fn is_menstrual(self) -> bool {
        matches!(self, RawSymbol::Red)
    }
}

/// Fertility symbol detected from text and explicit markers.
///
/// Serialized values are part of the external interface and must not be
/// renamed: `none`, `white`, `M`, `M+`, `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetectedSymbol {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "M+")]
    MPlus,
    #[serde(rename = "F")]
    F,
}

impl DetectedSymbol {
    /// Minimum fertility score this symbol imposes on `score_fertil`.
    pub fn score_floor(self) -> f64 {
        match self {
            DetectedSymbol::None => 0.0,
            DetectedSymbol::White => LEVEL_SCORES[1],
            DetectedSymbol::M => LEVEL_SCORES[2],
            DetectedSymbol::MPlus | DetectedSymbol::F => LEVEL_SCORES[3],
        }
    }

    /// Minimum ordinal level this symbol imposes on both S and M.
    pub fn level_floor(self) -> Level {
        match self {
            DetectedSymbol::None => Level::new(0),
            DetectedSymbol::White => Level::new(1),
            DetectedSymbol::M => Level::new(2),
            DetectedSymbol::MPlus | DetectedSymbol::F => Level::new(3),
        }
    }

    /// Peak-type symbols open the fertile window on their own.
    pub fn is_peak_type(self) -> bool {
        matches!(self, DetectedSymbol::MPlus | DetectedSymbol::F)
    }
}
