//! # ciclo-signs
//!
//! Sign Normalizer: turns raw per-day text and markers into ordinal
//! fertility levels (S/M axes), a detected symbol, and derived scores.
//!
//! Free text is matched against two ordered pattern tables (sensation and
//! appearance) with modifier handling; the whole pipeline is pure and
//! total — unrecognized input degrades to level 0, never an error.

pub mod normalizer;
pub mod patterns;
pub mod symbols;
pub mod text;

pub use normalizer::{bip_baseline, normalize, normalize_cycle};
