use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::PEAK_MARKER;
use crate::models::symbol::RawSymbol;

/// One calendar day of the current cycle, as supplied by the storage
/// collaborator. Placeholder days (nothing recorded) arrive with all
/// optional fields empty so day-index arithmetic stays contiguous.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleDayInput {
    /// Position in the cycle (0-based).
    pub index: usize,
    /// ISO-8601 date string. Kept as text at the boundary; parsed lazily.
    pub iso_date: String,
    pub sensation_text: String,
    pub appearance_text: String,
    pub symbol_raw: RawSymbol,
    pub observations_text: String,
    /// Explicit peak marker. Only the exact value `"peak"` marks a peak.
    pub peak_marker_raw: Option<String>,
    pub display_temperature: Option<f64>,
    /// Ignored days are excluded from temperature computations.
    pub ignored: bool,
}

impl CycleDayInput {
    /// True only when the user explicitly marked this day as the peak.
    /// Peaks are never inferred from signs.
    pub fn is_peak_marked(&self) -> bool {
        self.peak_marker_raw.as_deref() == Some(PEAK_MARKER)
    }

    /// Whether the user recorded anything at all this day.
    pub fn has_record(&self) -> bool {
        !self.sensation_text.trim().is_empty()
            || !self.appearance_text.trim().is_empty()
            || !self.observations_text.trim().is_empty()
            || self.symbol_raw != RawSymbol::None
            || self.peak_marker_raw.is_some()
            || self.display_temperature.is_some()
    }

    /// Parse the ISO date, `None` when absent or malformed.
    pub fn date(&self) -> Option<NaiveDate> {
        self.iso_date.parse().ok()
    }
}

/// A completed (or ongoing) past cycle, input to the historical calculators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleSummary {
    pub start_date: String,
    pub end_date: Option<String>,
    pub data: Vec<CycleDayInput>,
    /// User opt-out: this cycle never feeds the automatic calculators.
    pub ignored_for_auto_calculations: bool,
}

impl CycleSummary {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.parse().ok()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(|d| d.parse().ok())
    }

    /// Inclusive duration in days, when both dates parse and are ordered.
    pub fn duration_days(&self) -> Option<i64> {
        let (start, end) = (self.start()?, self.end()?);
        let days = (end - start).num_days() + 1;
        (days > 0).then_some(days)
    }
}
