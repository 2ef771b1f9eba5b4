//! Symbol token detection.
//!
//! Scans appearance text, observations text, and the explicit symbol field
//! for the tokens `M+`, `M`, `F`/`FER` — in that precedence order. The
//! tokens are user shorthand for mucus quality, so matching is
//! case-insensitive and word-bounded.

use regex::Regex;
use std::sync::LazyLock;

use ciclo_core::{DetectedSymbol, RawSymbol};

static RE_M_PLUS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\bm\+").ok());
static RE_M: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\bm\b").ok());
static RE_F: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\bf\b|\bfer\b").ok());

/// Detect the fertility symbol for one day.
///
/// Falls back to `white` when the explicit symbol field is `white`;
/// otherwise `none`. Never infers a peak — that is the peak marker's job.
pub fn detect(
    appearance_text: &str,
    observations_text: &str,
    symbol_raw: RawSymbol,
) -> DetectedSymbol {
    for text in [appearance_text, observations_text] {
        if matches(&RE_M_PLUS, text) {
            return DetectedSymbol::MPlus;
        }
    }
    for text in [appearance_text, observations_text] {
        if matches(&RE_M, text) {
            return DetectedSymbol::M;
        }
    }
    for text in [appearance_text, observations_text] {
        if matches(&RE_F, text) {
            return DetectedSymbol::F;
        }
    }

    if symbol_raw == RawSymbol::White {
        return DetectedSymbol::White;
    }

    DetectedSymbol::None
}

fn matches(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn m_plus_takes_precedence_over_m() {
        assert_eq!(
            detect("moco M+", "", RawSymbol::None),
            DetectedSymbol::MPlus
        );
        assert_eq!(detect("M", "", RawSymbol::None), DetectedSymbol::M);
    }

    #[test]
    fn f_and_fer_tokens() {
        assert_eq!(detect("", "hoy F", RawSymbol::None), DetectedSymbol::F);
        assert_eq!(detect("", "fer", RawSymbol::None), DetectedSymbol::F);
    }

    #[test]
    fn white_symbol_fallback() {
        assert_eq!(detect("", "", RawSymbol::White), DetectedSymbol::White);
        assert_eq!(detect("", "", RawSymbol::Green), DetectedSymbol::None);
    }

    #[test]
    fn tokens_are_word_bounded() {
        assert_eq!(
            detect("cremosa", "fiebre", RawSymbol::None),
            DetectedSymbol::None
        );
    }
}
