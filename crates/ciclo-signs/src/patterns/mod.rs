pub mod appearance;
pub mod sensation;

use regex::Regex;
use std::sync::LazyLock;

use ciclo_core::Level;

use crate::text;

/// One entry of an ordered sign pattern table.
///
/// `regex` is written against folded text (lower-case, no diacritics).
/// `descriptor` is the canonical Spanish term shown to the user, accents
/// kept.
pub struct SignPattern {
    pub descriptor: &'static str,
    pub level: u8,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Tie-breaker among matches resolving to the same level.
    pub selection_score: u8,
    /// Level a leading `no` resolves to. Default 1 when absent.
    pub negated_level: Option<u8>,
}

macro_rules! sign_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| Regex::new($regex_str).ok());
    };
}
pub(crate) use sign_pattern;

/// A pattern match with its modifier-resolved level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSign {
    pub descriptor: &'static str,
    pub level: Level,
    selection_score: u8,
}

impl ResolvedSign {
    pub fn level_value(&self) -> u8 {
        self.level.value()
    }
}

/// Match folded text against a table, resolving leading modifiers.
///
/// The candidate with the highest resolved level wins; ties break by
/// `selection_score`, then by table order. `None` when nothing matches.
pub fn resolve(folded: &str, table: &[SignPattern]) -> Option<ResolvedSign> {
    let mut best: Option<ResolvedSign> = None;

    for pattern in table {
        let Some(re) = pattern.regex.as_ref() else { continue };
        for m in re.find_iter(folded) {
            let level = resolve_level(pattern, folded, m.start());
            let candidate = ResolvedSign {
                descriptor: pattern.descriptor,
                level,
                selection_score: pattern.selection_score,
            };
            let better = match &best {
                None => true,
                Some(b) => {
                    candidate.level > b.level
                        || (candidate.level == b.level
                            && candidate.selection_score > b.selection_score)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Apply the modifier token (if any) immediately preceding the match.
fn resolve_level(pattern: &SignPattern, folded: &str, match_start: usize) -> Level {
    let base = Level::new(pattern.level);
    match text::preceding_word(folded, match_start) {
        Some("no") => Level::new(pattern.negated_level.unwrap_or(1)),
        Some("muy") => base.raised(),
        Some("poco") | Some("leve") => base.lowered(),
        _ => base,
    }
}

/// Explicit numeric level: a text field holding exactly "0".."3".
pub fn explicit_level(text: &str) -> Option<Level> {
    match text.trim() {
        "0" => Some(Level::new(0)),
        "1" => Some(Level::new(1)),
        "2" => Some(Level::new(2)),
        "3" => Some(Level::new(3)),
        _ => None,
    }
}
