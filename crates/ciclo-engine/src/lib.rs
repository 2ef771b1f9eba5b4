//! # ciclo-engine
//!
//! End-to-end facade over the interpretation pipeline: normalize signs,
//! detect the thermal baseline and shift, run the historical calculators,
//! build the fertile window, and assess every day.
//!
//! The engine is a pure function over its inputs: no I/O, no caching, no
//! shared mutable state. Identical inputs produce identical outputs, and
//! callers may invoke it concurrently without coordination.

pub mod engine;

pub use engine::CycleEngine;

// The full public surface external collaborators need.
pub use ciclo_core::{
    CicloError, CicloResult, CycleDayInput, CycleSummary, EngineConfig,
    models::CycleEvaluation,
};
