//! Appearance (M axis) pattern table.

use regex::Regex;
use std::sync::LazyLock;

use super::{sign_pattern, SignPattern};

sign_pattern!(RE_NADA_MOCO, r"\bnada\b|\bsin moco\b|\bningun moco\b");
sign_pattern!(RE_PEGAJOSA, r"\bpegajos[oa]s?\b");
sign_pattern!(RE_GRUMOSA, r"\bgrumos[oa]s?\b|\bgrumos\b");
sign_pattern!(RE_DENSA, r"\bdens[oa]s?\b|\bespes[oa]s?\b|\bpastos[oa]s?\b");
sign_pattern!(RE_TURBIA, r"\bturbi[oa]s?\b|\bamarillent[oa]s?\b");
sign_pattern!(RE_CREMOSA, r"\bcremos[oa]s?\b");
sign_pattern!(RE_LECHOSA, r"\blechos[oa]s?\b|\bblanquecin[oa]s?\b");
sign_pattern!(RE_FLUIDA, r"\bfluid[oa]s?\b|\bacuos[oa]s?\b");
sign_pattern!(RE_ELASTICA, r"\belastic[oa]s?\b|\bfilantes?\b|\bhilos\b");
sign_pattern!(RE_TRANSPARENTE, r"\btransparentes?\b|\bcristalin[oa]s?\b");
sign_pattern!(RE_CLARA_DE_HUEVO, r"\bclaras? de huevo\b");

/// All appearance patterns in table order.
pub fn table() -> Vec<SignPattern> {
    vec![
        SignPattern {
            descriptor: "nada",
            level: 0,
            regex: &RE_NADA_MOCO,
            selection_score: 3,
            negated_level: None,
        },
        SignPattern {
            descriptor: "pegajosa",
            level: 1,
            regex: &RE_PEGAJOSA,
            selection_score: 6,
            negated_level: None,
        },
        SignPattern {
            descriptor: "grumosa",
            level: 1,
            regex: &RE_GRUMOSA,
            selection_score: 5,
            negated_level: None,
        },
        SignPattern {
            descriptor: "densa",
            level: 1,
            regex: &RE_DENSA,
            selection_score: 4,
            negated_level: None,
        },
        SignPattern {
            descriptor: "turbia",
            level: 1,
            regex: &RE_TURBIA,
            selection_score: 3,
            negated_level: None,
        },
        SignPattern {
            descriptor: "cremosa",
            level: 2,
            regex: &RE_CREMOSA,
            selection_score: 6,
            negated_level: None,
        },
        SignPattern {
            descriptor: "lechosa",
            level: 2,
            regex: &RE_LECHOSA,
            selection_score: 5,
            negated_level: None,
        },
        SignPattern {
            descriptor: "fluida",
            level: 2,
            regex: &RE_FLUIDA,
            selection_score: 4,
            negated_level: None,
        },
        SignPattern {
            descriptor: "elástica",
            level: 3,
            regex: &RE_ELASTICA,
            selection_score: 7,
            negated_level: None,
        },
        SignPattern {
            descriptor: "transparente",
            level: 3,
            regex: &RE_TRANSPARENTE,
            selection_score: 6,
            negated_level: None,
        },
        SignPattern {
            descriptor: "clara de huevo",
            level: 3,
            regex: &RE_CLARA_DE_HUEVO,
            selection_score: 8,
            negated_level: None,
        },
    ]
}
