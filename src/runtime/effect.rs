use crate::state::FormPhase;
use crate::submission::SubmissionPayload;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    InvokeSubmission {
        run_id: u64,
        payload: SubmissionPayload,
    },
    PhaseChanged {
        from: FormPhase,
        to: FormPhase,
    },
    RequestRender,
}
