//! # ciclo-history
//!
//! Historical cycle calculators. Both derive a conservative candidate for
//! the first fertile day of the current cycle from completed past cycles:
//!
//! - **CPM** ("ciclo más corto"): shortest qualifying cycle minus a
//!   deduction of 21 days (20 with a full 12-cycle history).
//! - **T-8**: earliest historical day of thermal rise minus 8.
//!
//! Fewer than 6 qualifying cycles yields `None` — "not enough data yet",
//! never an error.

pub mod cpm;
pub mod t8;

pub use cpm::compute_cpm;
pub use t8::compute_t8;
