pub mod channel;
pub mod executor;
pub mod outcome;
pub mod payload;
pub mod run_state;

pub use channel::{JsonChannel, SubmissionChannel};
pub use executor::{SubmissionCompletion, SubmissionExecutor};
pub use outcome::{ReportedError, SubmissionOutcome};
pub use payload::SubmissionPayload;
pub use run_state::SubmissionRunState;
