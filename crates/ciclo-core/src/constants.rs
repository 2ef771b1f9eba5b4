//! Fixed numeric parameters of the symptothermal method.
//!
//! These are method constants, not tunables: changing them changes the
//! clinical meaning of the engine's output.

/// Score assigned to each ordinal sign level 0..=3.
pub const LEVEL_SCORES: [f64; 4] = [0.0, 0.4, 0.8, 1.0];

/// Number of early-cycle days inspected for the BIP baseline.
pub const BIP_WINDOW_DAYS: usize = 6;

/// Minimum score_core increase over the BIP baseline that counts as a
/// meaningful change of signs.
pub const BIP_CHANGE_DELTA: f64 = 0.4;

/// Number of strictly-lower preceding temperatures required to confirm a
/// coverline ("6 lows" rule).
pub const BASELINE_LOW_DAYS: usize = 6;

/// Consecutive days above the coverline required to confirm the thermal
/// shift (T+3).
pub const SUSTAINED_HIGH_DAYS: usize = 3;

/// Minimum qualifying past cycles for either historical calculator.
pub const CALCULATOR_MIN_CYCLES: usize = 6;
/// Most recent past cycles considered by either historical calculator.
pub const CALCULATOR_MAX_CYCLES: usize = 12;

/// CPM deduction when fewer than [`CALCULATOR_MAX_CYCLES`] cycles qualify.
pub const CPM_DEDUCTION_FEW: i64 = 21;
/// CPM deduction with a full history of qualifying cycles.
pub const CPM_DEDUCTION_MANY: i64 = 20;

/// Days subtracted from the earliest historical thermal rise (T-8).
pub const T8_OFFSET_DAYS: i64 = 8;

/// Calendar days after the peak before mucus-based infertility (P+3).
pub const PEAK_CLOSURE_DAYS: i64 = 3;
/// Postpartum variant (P+4).
pub const PEAK_CLOSURE_DAYS_POSTPARTUM: i64 = 4;

/// Consecutive unrecorded days that cost one inherited sign level.
pub const DECAY_DAYS_PER_LEVEL: usize = 2;

/// Days after a strong (level >= 2) sign during which fertility is still
/// escalated to at least "aumento".
pub const ESCALATION_WINDOW_DAYS: usize = 3;

/// The only value of the raw peak-marker field that marks a peak day.
pub const PEAK_MARKER: &str = "peak";
