use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::LEVEL_SCORES;

/// Ordinal fertility-sign level clamped to 0..=3.
///
/// Both the sensation (S) and appearance (M) axes use this scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(3);

    /// Create a new Level, clamping to 0..=3.
    pub fn new(value: u8) -> Self {
        Self(value.min(3))
    }

    /// Get the raw ordinal value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Score of this level per the fixed map {0→0.0, 1→0.4, 2→0.8, 3→1.0}.
    pub fn score(self) -> f64 {
        LEVEL_SCORES[self.0 as usize]
    }

    /// One level up, capped at 3.
    pub fn raised(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One level down, floored at 0.
    pub fn lowered(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// This level lowered by `steps`, floored at 0.
    pub fn lowered_by(self, steps: u8) -> Self {
        Self(self.0.saturating_sub(steps))
    }

    /// The greater of this level and `floor`.
    pub fn at_least(self, floor: Level) -> Self {
        self.max(floor)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_above_three() {
        assert_eq!(Level::new(7), Level::new(3));
    }

    #[test]
    fn score_map() {
        assert_eq!(Level::new(0).score(), 0.0);
        assert_eq!(Level::new(1).score(), 0.4);
        assert_eq!(Level::new(2).score(), 0.8);
        assert_eq!(Level::new(3).score(), 1.0);
    }

    #[test]
    fn raise_and_lower_saturate() {
        assert_eq!(Level::new(3).raised(), Level::new(3));
        assert_eq!(Level::new(0).lowered(), Level::new(0));
        assert_eq!(Level::new(3).lowered_by(5), Level::new(0));
    }
}
