pub mod assessment;
pub mod candidate;
pub mod day;
pub mod evaluation;
pub mod normalized;
pub mod symbol;
pub mod window;

pub use assessment::{AssessmentState, CyclePhase, DailyAssessment};
pub use candidate::{AggregateStatus, Candidate, CandidateAggregate, CandidateKind, CandidateSource};
pub use day::{CycleDayInput, CycleSummary};
pub use evaluation::{BaselineResult, CycleEvaluation, DebugInfo};
pub use normalized::NormalizedDay;
pub use symbol::{DetectedSymbol, RawSymbol};
pub use window::{ClosureDetail, ClosureStatus, FertileWindow};
