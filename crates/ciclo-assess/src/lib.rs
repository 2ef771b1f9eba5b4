//! # ciclo-assess
//!
//! Daily Assessment State Machine. Walks the cycle day by day producing
//! the final per-day classification from the normalized signs and the
//! fertile window: `waiting → {inicio, aumento, alta, muyAlta} → infertil`,
//! with sign decay across unrecorded days and monotonic peak-proximity
//! escalation.

pub mod levels;
pub mod machine;
pub mod texts;

pub use machine::{assess_days, current_assessment};
