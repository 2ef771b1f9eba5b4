/// Engine errors.
///
/// Malformed domain data never errors: the engine degrades to safe
/// defaults. The only `Err` a caller can see is a contract violation,
/// which indicates a defect in the calling code.
#[derive(Debug, thiserror::Error)]
pub enum CicloError {
    #[error("contract violation: {message}")]
    ContractViolation { message: String },

    #[error("today index {today_index} out of range for a cycle of {cycle_len} days")]
    TodayIndexOutOfRange { today_index: usize, cycle_len: usize },
}

pub type CicloResult<T> = Result<T, CicloError>;
