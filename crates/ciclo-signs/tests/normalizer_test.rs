//! Integration tests for the sign normalizer.

use ciclo_core::{CycleDayInput, DetectedSymbol, Level, RawSymbol};
use ciclo_signs::{bip_baseline, normalize, normalize_cycle};

fn day(sensation: &str, appearance: &str, observations: &str) -> CycleDayInput {
    CycleDayInput {
        sensation_text: sensation.to_string(),
        appearance_text: appearance.to_string(),
        observations_text: observations.to_string(),
        ..Default::default()
    }
}

// ── Pattern table resolution ───────────────────────────────────────────────

#[test]
fn sensation_mojada_resolves_to_level_two() {
    let n = normalize(&day("mojada", "", ""), None);
    assert_eq!(n.sensation, Level::new(2));
    assert_eq!(n.reasons, vec!["S2 (mojada)".to_string()]);
}

#[test]
fn appearance_clara_de_huevo_resolves_to_level_three() {
    let n = normalize(&day("", "clara de huevo", ""), None);
    assert_eq!(n.appearance, Level::new(3));
    assert_eq!(n.reasons, vec!["M3 (clara de huevo)".to_string()]);
}

#[test]
fn diacritics_and_case_are_folded() {
    let upper = normalize(&day("HÚMEDA", "", ""), None);
    let plain = normalize(&day("humeda", "", ""), None);
    assert_eq!(upper.sensation, plain.sensation);
    assert_eq!(upper.sensation, Level::new(2));
}

#[test]
fn explicit_numeric_levels_short_circuit() {
    let n = normalize(&day("3", "1", ""), None);
    assert_eq!(n.sensation, Level::new(3));
    assert_eq!(n.appearance, Level::new(1));
}

#[test]
fn modifiers_shift_the_resolved_level() {
    assert_eq!(
        normalize(&day("muy humeda", "", ""), None).sensation,
        Level::new(3)
    );
    assert_eq!(
        normalize(&day("poco mojada", "", ""), None).sensation,
        Level::new(1)
    );
    assert_eq!(
        normalize(&day("no resbaladiza", "", ""), None).sensation,
        Level::new(1)
    );
}

// ── Symbol detection and floors ────────────────────────────────────────────

#[test]
fn symbol_floor_invariant_for_f() {
    // If the detected symbol is F, both axes end at least at 3.
    let inputs = [
        day("seca", "", "F"),
        day("", "nada", "fer"),
        day("zzz", "qqq", "hoy F abundante"),
    ];
    for input in inputs {
        let n = normalize(&input, None);
        assert_eq!(n.detected_symbol, DetectedSymbol::F);
        assert!(n.sensation >= Level::new(3) && n.appearance >= Level::new(3));
        assert_eq!(n.score_fertil, 1.0);
    }
}

#[test]
fn m_plus_beats_m_in_precedence() {
    let n = normalize(&day("", "M+ abundante", ""), None);
    assert_eq!(n.detected_symbol, DetectedSymbol::MPlus);
    assert_eq!(n.appearance, Level::new(3));
}

#[test]
fn white_symbol_fallback_raises_floor() {
    let mut input = day("", "", "");
    input.symbol_raw = RawSymbol::White;
    let n = normalize(&input, None);
    assert_eq!(n.detected_symbol, DetectedSymbol::White);
    assert_eq!(n.sensation, Level::new(1));
    assert!(n.score_fertil >= 0.4);
}

// ── Totality and purity ────────────────────────────────────────────────────

#[test]
fn unrecognized_input_degrades_to_level_zero() {
    let weird = day("@@##!!", "12,34¿?", "ニャー");
    let n = normalize(&weird, None);
    assert_eq!(n.sensation, Level::new(0));
    assert_eq!(n.appearance, Level::new(0));
    assert!(n.reasons.is_empty());
}

#[test]
fn normalize_is_idempotent() {
    let input = day("húmeda", "cremosa", "M"); // symbol M in observations
    let first = normalize(&input, Some(0.4));
    let second = normalize(&input, Some(0.4));
    assert_eq!(first, second);
}

// ── BIP baseline ───────────────────────────────────────────────────────────

#[test]
fn bip_baseline_uses_first_six_non_red_days() {
    let mut days = vec![day("seca", "", ""); 6];
    // A high-fertility day beyond the 6-day window must not count.
    days.push(day("mojada", "", ""));
    assert_eq!(bip_baseline(&days), Some(0.0));
}

#[test]
fn bip_change_flags_days_above_baseline() {
    let mut days = vec![day("seca", "", ""); 4];
    days.push(day("mojada", "", ""));
    days.push(day("", "clara de huevo", ""));
    let normalized = normalize_cycle(&days);
    // Baseline comes from the window itself (max 1.0 via clara de huevo is
    // inside the first 6 days here), so no day clears baseline + 0.4.
    assert!(normalized.iter().all(|n| !n.has_change_bip));

    // With quiet early days the later rise is detected.
    let mut days = vec![day("seca", "", ""); 6];
    days.push(day("mojada", "", ""));
    let normalized = normalize_cycle(&days);
    assert!(normalized[6].has_change_bip);
}

#[test]
fn red_days_are_excluded_from_baseline_but_normalized() {
    let mut menstrual = day("mojada", "", "");
    menstrual.symbol_raw = RawSymbol::Red;
    let quiet = day("seca", "", "");
    let days = vec![menstrual.clone(), quiet.clone(), quiet.clone()];

    // The red day's high score must not leak into the baseline.
    assert_eq!(bip_baseline(&days), Some(0.0));
    // But the red day itself still normalizes normally.
    let n = normalize(&menstrual, None);
    assert_eq!(n.sensation, Level::new(2));
}
