//! The CycleEngine facade.

use tracing::debug;

use ciclo_assess::{assess_days, current_assessment};
use ciclo_core::models::{CycleEvaluation, DebugInfo};
use ciclo_core::{
    CicloError, CicloResult, CycleDayInput, CycleSummary, EngineConfig, OvulationDetector,
};
use ciclo_history::{compute_cpm, compute_t8};
use ciclo_signs::normalize_cycle;
use ciclo_thermal::{detect_baseline, TempPoint, ThermalShiftDetector};
use ciclo_window::build_candidates;

/// The symptothermal interpretation engine.
///
/// Owns only configuration; every evaluation is computed fresh from the
/// supplied cycle and history.
#[derive(Debug, Clone, Default)]
pub struct CycleEngine {
    config: EngineConfig,
}

impl CycleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate the current cycle against its history.
    ///
    /// `cycle` must cover every day from the cycle start to today in
    /// order (placeholders included); `today_index` must index into it —
    /// anything else is a contract violation, the only error this engine
    /// surfaces.
    pub fn evaluate(
        &self,
        cycle: &[CycleDayInput],
        history: &[CycleSummary],
        today_index: usize,
    ) -> CicloResult<CycleEvaluation> {
        if cycle.is_empty() {
            return Err(CicloError::ContractViolation {
                message: "cycle day array is empty".to_string(),
            });
        }
        if today_index >= cycle.len() {
            return Err(CicloError::TodayIndexOutOfRange {
                today_index,
                cycle_len: cycle.len(),
            });
        }

        let mut debug_info = DebugInfo::default();

        // Stage 1: sign normalization (BIP baseline + per-day levels).
        let normalized = normalize_cycle(cycle);
        debug!(days = normalized.len(), "signs normalized");

        // Stage 2: thermal analysis of the current cycle.
        let series: Vec<TempPoint> = cycle.iter().map(TempPoint::from).collect();
        let baseline = detect_baseline(&series);
        let detector = ThermalShiftDetector::new();
        let confirmation = detector.confirm(cycle);
        let temperature_infertile_start_index = confirmation.map(|c| c.confirmation_index);
        debug!(?baseline, ?confirmation, "thermal analysis done");

        // Stage 3: historical calculators.
        let cpm_candidate = compute_cpm(history);
        if cpm_candidate.is_none() && !history.is_empty() {
            debug_info.note("CPM: fewer than 6 qualifying cycles");
        }
        let t8_candidate = compute_t8(history, &detector);
        if t8_candidate.is_none() && !history.is_empty() {
            debug_info.note("T-8: fewer than 6 qualifying cycles");
        }

        // Stage 4: candidates + fertile window.
        let calculator_candidates = cpm_candidate
            .iter()
            .chain(t8_candidate.iter())
            .cloned()
            .collect();
        let outcome = build_candidates(
            cycle,
            &normalized,
            calculator_candidates,
            temperature_infertile_start_index,
            &self.config,
        );
        debug!(aggregate = ?outcome.aggregate, window = ?outcome.fertile_window, "window built");

        // Stage 5: daily assessments.
        let daily_assessments = assess_days(&normalized, outcome.fertile_window.as_ref());
        let current = current_assessment(&daily_assessments, today_index);

        Ok(CycleEvaluation {
            daily_assessments,
            current,
            fertile_window: outcome.fertile_window,
            candidates: outcome.candidates,
            aggregate: outcome.aggregate,
            baseline,
            cpm_candidate,
            t8_candidate,
            debug: debug_info,
        })
    }
}
