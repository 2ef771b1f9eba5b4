//! # ciclo-thermal
//!
//! Basal body temperature analysis: finds the coverline (baseline) from a
//! temperature series and confirms ovulation via the sustained thermal
//! shift (T+3). The coverline feeds the chart layer; the shift confirmation
//! feeds the T-8 calculator and the fertile window's temperature closure.

pub mod baseline;
pub mod shift;

pub use baseline::{detect_baseline, TempPoint};
pub use shift::ThermalShiftDetector;
