//! Per-day effective fertility level: raw level from recorded signs,
//! decayed inheritance across unrecorded days.

use ciclo_core::constants::DECAY_DAYS_PER_LEVEL;
use ciclo_core::{Level, NormalizedDay};

/// The effective level of one day, after inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveLevel {
    pub level: Level,
    /// True when the level was carried over (and decayed) from the last
    /// recorded day rather than observed.
    pub inherited: bool,
}

/// Raw level of a recorded day.
///
/// 3: peak-marked, peak-type symbol, or either axis at 3.
/// 2: either axis at 2 or symbol M.
/// 1: either axis at 1 or a BIP change.
/// 0: otherwise.
pub fn raw_level(day: &NormalizedDay) -> Level {
    use ciclo_core::DetectedSymbol;

    if day.is_peak_marked
        || day.detected_symbol.is_peak_type()
        || day.max_level() >= Level::new(3)
    {
        Level::new(3)
    } else if day.max_level() >= Level::new(2) || day.detected_symbol == DetectedSymbol::M {
        Level::new(2)
    } else if day.max_level() >= Level::new(1) || day.has_change_bip {
        Level::new(1)
    } else {
        Level::new(0)
    }
}

/// Effective levels for the whole cycle.
///
/// Unrecorded days inherit the last recorded level, losing one full level
/// for every [`DECAY_DAYS_PER_LEVEL`] consecutive unrecorded days —
/// unconfirmed signs are not assumed to persist indefinitely.
pub fn effective_levels(normalized: &[NormalizedDay]) -> Vec<EffectiveLevel> {
    let mut out = Vec::with_capacity(normalized.len());
    let mut last_recorded = Level::new(0);
    let mut gap = 0usize;

    for day in normalized {
        if day.has_record {
            gap = 0;
            last_recorded = raw_level(day);
            out.push(EffectiveLevel {
                level: last_recorded,
                inherited: false,
            });
        } else {
            gap += 1;
            let lost = (gap / DECAY_DAYS_PER_LEVEL) as u8;
            out.push(EffectiveLevel {
                level: last_recorded.lowered_by(lost),
                inherited: true,
            });
        }
    }

    out
}
