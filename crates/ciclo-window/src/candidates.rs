//! Profile candidate scan and candidate filtering.

use ciclo_core::{
    Candidate, CandidateKind, CandidateSource, DetectedSymbol, EngineConfig, Level, NormalizedDay,
};

/// Find the internal (profile) candidate: the first day whose own signs
/// suggest the fertile window has opened. At most one per cycle.
pub fn internal_candidate(normalized: &[NormalizedDay]) -> Option<Candidate> {
    for (index, day) in normalized.iter().enumerate() {
        let reason = if day.is_peak_marked {
            "marcador de pico"
        } else if day.detected_symbol == DetectedSymbol::White {
            "símbolo white"
        } else if day.detected_symbol.is_peak_type() {
            "símbolo de máxima fertilidad"
        } else if day.detected_symbol == DetectedSymbol::M {
            "símbolo M"
        } else if day.max_level() >= Level::new(2) {
            "signos S/M elevados"
        } else {
            continue;
        };

        return Some(Candidate {
            source: CandidateSource::Interno,
            day: index as u32 + 1,
            reason: reason.to_string(),
            kind: CandidateKind::Profile,
        });
    }
    None
}

/// Keep the calculator candidates the configuration allows. Postpartum
/// suppresses both calculators outright.
pub fn filter_calculators(candidates: Vec<Candidate>, config: &EngineConfig) -> Vec<Candidate> {
    if config.postpartum {
        return Vec::new();
    }
    candidates
        .into_iter()
        .filter(|c| match c.source {
            CandidateSource::Cpm => config.calculators.cpm,
            CandidateSource::T8 => config.calculators.t8,
            CandidateSource::Interno => true,
        })
        .collect()
}
