//! # ciclo-window
//!
//! Candidate Aggregator & Fertile Window Builder. Merges the in-cycle
//! profile candidate with the historical calculator candidates
//! (earliest-day wins), then resolves the window's closure under the
//! symptothermal double-criterion rule (mucus P+3/P+4 and temperature
//! T+3).

pub mod builder;
pub mod candidates;
pub mod closure;

pub use builder::{build_candidates, WindowOutcome};
pub use candidates::internal_candidate;
