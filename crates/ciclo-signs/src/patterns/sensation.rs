//! Sensation (S axis) pattern table.

use regex::Regex;
use std::sync::LazyLock;

use super::{sign_pattern, SignPattern};

sign_pattern!(RE_SECA, r"\bsecas?\b|\bsequedad\b");
sign_pattern!(RE_NADA, r"\bnada\b|\bninguna sensacion\b");
sign_pattern!(RE_HUMEDA, r"\bhumedas?\b|\bhumedad\b");
sign_pattern!(RE_MOJADA, r"\bmojadas?\b");
sign_pattern!(RE_RESBALADIZA, r"\bresbaladizas?\b|\bresbalos[oa]s?\b");
sign_pattern!(RE_LUBRICANTE, r"\blubricantes?\b|\blubricadas?\b|\blubricacion\b");
sign_pattern!(RE_ACEITOSA, r"\baceitos[oa]s?\b");

/// All sensation patterns in table order.
pub fn table() -> Vec<SignPattern> {
    vec![
        SignPattern {
            descriptor: "seca",
            level: 0,
            regex: &RE_SECA,
            selection_score: 5,
            negated_level: Some(1),
        },
        SignPattern {
            descriptor: "nada",
            level: 0,
            regex: &RE_NADA,
            selection_score: 3,
            negated_level: None,
        },
        SignPattern {
            descriptor: "húmeda",
            level: 2,
            regex: &RE_HUMEDA,
            selection_score: 6,
            negated_level: None,
        },
        SignPattern {
            descriptor: "mojada",
            level: 2,
            regex: &RE_MOJADA,
            selection_score: 7,
            negated_level: None,
        },
        SignPattern {
            descriptor: "resbaladiza",
            level: 3,
            regex: &RE_RESBALADIZA,
            selection_score: 8,
            negated_level: None,
        },
        SignPattern {
            descriptor: "lubricante",
            level: 3,
            regex: &RE_LUBRICANTE,
            selection_score: 7,
            negated_level: None,
        },
        SignPattern {
            descriptor: "aceitosa",
            level: 3,
            regex: &RE_ACEITOSA,
            selection_score: 5,
            negated_level: None,
        },
    ]
}
