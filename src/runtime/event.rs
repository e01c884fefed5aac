use crate::core::FieldName;
use crate::core::value::Value;
use crate::submission::SubmissionOutcome;

/// Everything that can move the form state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: FieldName, value: Value },
    FieldBlurred { field: FieldName },
    SubmitRequested,
    /// Arrives from the submission executor, tagged with the run it answers.
    SubmissionResolved { run_id: u64, outcome: SubmissionOutcome },
}
