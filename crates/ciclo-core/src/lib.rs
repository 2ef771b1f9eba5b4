//! # ciclo-core
//!
//! Foundation crate for the ciclo symptothermal interpretation engine.
//! Defines all boundary types, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod level;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CalculatorsConfig, EngineConfig};
pub use errors::{CicloError, CicloResult};
pub use level::Level;
pub use models::{
    AssessmentState, BaselineResult, Candidate, CandidateAggregate, CandidateKind,
    CandidateSource, CycleDayInput, CyclePhase, CycleSummary, DailyAssessment, DetectedSymbol,
    FertileWindow, NormalizedDay, RawSymbol,
};
pub use traits::{OvulationConfirmation, OvulationDetector};
