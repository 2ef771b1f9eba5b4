//! The normalization pipeline for one day and for a whole cycle.

use ciclo_core::constants::{BIP_CHANGE_DELTA, BIP_WINDOW_DAYS};
use ciclo_core::{CycleDayInput, Level, NormalizedDay};

use crate::patterns::{self, appearance, sensation, ResolvedSign};
use crate::symbols;
use crate::text;

/// Normalize one day's raw record into levels, symbol, and scores.
///
/// Pure and total: any input text yields a result, unrecognized text
/// resolves to level 0 with no reasons. `bip_baseline` is the early-cycle
/// reference score (see [`bip_baseline`]); `None` disables change
/// detection for this day.
pub fn normalize(day: &CycleDayInput, bip_baseline: Option<f64>) -> NormalizedDay {
    let sensation = resolve_field(&day.sensation_text, Axis::Sensation);
    let appearance = resolve_field(&day.appearance_text, Axis::Appearance);

    let detected_symbol =
        symbols::detect(&day.appearance_text, &day.observations_text, day.symbol_raw);

    // Symbol floors raise both ordinal axes.
    let floor = detected_symbol.level_floor();
    let s_level = sensation.level().at_least(floor);
    let m_level = appearance.level().at_least(floor);

    let score_core = s_level.score().max(m_level.score());
    let score_fertil = score_core
        .max(detected_symbol.score_floor())
        .clamp(0.0, 1.0);

    let has_change_bip = match bip_baseline {
        Some(baseline) => score_core >= baseline + BIP_CHANGE_DELTA - f64::EPSILON,
        None => false,
    };

    // Appearance (M) reason first, then sensation (S).
    let mut reasons = Vec::new();
    if let Some(reason) = appearance.reason("M") {
        reasons.push(reason);
    }
    if let Some(reason) = sensation.reason("S") {
        reasons.push(reason);
    }

    NormalizedDay {
        sensation: s_level,
        appearance: m_level,
        detected_symbol,
        is_peak_marked: day.is_peak_marked(),
        score_core,
        score_fertil,
        has_change_bip,
        reasons,
        has_record: day.has_record(),
    }
}

/// BIP baseline: the maximum `score_core` across the first
/// [`BIP_WINDOW_DAYS`] days not marked with the menstrual (red) symbol.
/// `None` when none of those days carries a record.
pub fn bip_baseline(days: &[CycleDayInput]) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut inspected = 0;

    for day in days {
        if day.symbol_raw.is_menstrual() {
            continue;
        }
        if inspected >= BIP_WINDOW_DAYS {
            break;
        }
        inspected += 1;
        if !day.has_record() {
            continue;
        }
        let normalized = normalize(day, None);
        best = Some(best.map_or(normalized.score_core, |b: f64| b.max(normalized.score_core)));
    }

    best
}

/// Normalize a full cycle: compute the BIP baseline, then normalize every
/// day against it.
pub fn normalize_cycle(days: &[CycleDayInput]) -> Vec<NormalizedDay> {
    let baseline = bip_baseline(days);
    days.iter().map(|day| normalize(day, baseline)).collect()
}

enum Axis {
    Sensation,
    Appearance,
}

/// Outcome of resolving one text field.
enum FieldResolution {
    /// Explicit numeric level, no descriptor from the tables.
    Numeric(Level),
    /// A pattern table match.
    Matched(ResolvedSign),
    /// Nothing recognized.
    Empty,
}

impl FieldResolution {
    fn level(&self) -> Level {
        match self {
            FieldResolution::Numeric(level) => *level,
            FieldResolution::Matched(sign) => sign.level,
            FieldResolution::Empty => Level::new(0),
        }
    }

    fn reason(&self, axis_tag: &str) -> Option<String> {
        match self {
            FieldResolution::Numeric(level) => {
                Some(format!("{axis_tag}{} (nivel {})", level, level))
            }
            FieldResolution::Matched(sign) => {
                Some(format!("{axis_tag}{} ({})", sign.level, sign.descriptor))
            }
            FieldResolution::Empty => None,
        }
    }
}

fn resolve_field(raw: &str, axis: Axis) -> FieldResolution {
    if raw.trim().is_empty() {
        return FieldResolution::Empty;
    }
    if let Some(level) = patterns::explicit_level(raw) {
        return FieldResolution::Numeric(level);
    }

    let folded = text::fold(raw);
    let table = match axis {
        Axis::Sensation => sensation::table(),
        Axis::Appearance => appearance::table(),
    };
    match patterns::resolve(&folded, &table) {
        Some(sign) => FieldResolution::Matched(sign),
        None => FieldResolution::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciclo_core::{DetectedSymbol, RawSymbol};

    fn day_with(sensation: &str, appearance: &str) -> CycleDayInput {
        CycleDayInput {
            sensation_text: sensation.to_string(),
            appearance_text: appearance.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn mojada_is_level_two() {
        let n = normalize(&day_with("mojada", ""), None);
        assert_eq!(n.sensation, Level::new(2));
        assert_eq!(n.reasons, vec!["S2 (mojada)".to_string()]);
    }

    #[test]
    fn clara_de_huevo_is_level_three() {
        let n = normalize(&day_with("", "clara de huevo"), None);
        assert_eq!(n.appearance, Level::new(3));
        assert_eq!(n.reasons, vec!["M3 (clara de huevo)".to_string()]);
    }

    #[test]
    fn symbol_f_floors_both_axes() {
        let mut day = day_with("seca", "nada");
        day.observations_text = "F".to_string();
        let n = normalize(&day, None);
        assert_eq!(n.detected_symbol, DetectedSymbol::F);
        assert_eq!(n.sensation, Level::new(3));
        assert_eq!(n.appearance, Level::new(3));
        assert_eq!(n.score_fertil, 1.0);
    }

    #[test]
    fn unrecognized_text_is_level_zero_no_reasons() {
        let n = normalize(&day_with("zzzz qwerty", "12345x"), None);
        assert_eq!(n.sensation, Level::new(0));
        assert_eq!(n.appearance, Level::new(0));
        assert!(n.reasons.is_empty());
    }

    #[test]
    fn reasons_order_is_m_then_s() {
        let n = normalize(&day_with("húmeda", "cremosa"), None);
        assert_eq!(
            n.reasons,
            vec!["M2 (cremosa)".to_string(), "S2 (húmeda)".to_string()]
        );
    }

    #[test]
    fn bip_baseline_skips_red_days() {
        let mut days: Vec<CycleDayInput> = Vec::new();
        for _ in 0..3 {
            let mut d = day_with("seca", "");
            d.symbol_raw = RawSymbol::Red;
            days.push(d);
        }
        days.push(day_with("húmeda", ""));
        // Red days are skipped, the recorded non-red day sets the baseline.
        assert_eq!(bip_baseline(&days), Some(0.8));
    }

    #[test]
    fn bip_change_detected_against_baseline() {
        let day = day_with("mojada", "");
        let n = normalize(&day, Some(0.4));
        assert!(n.has_change_bip);
        let n = normalize(&day, Some(0.8));
        assert!(!n.has_change_bip);
    }
}
