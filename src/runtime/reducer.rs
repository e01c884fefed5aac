use crate::core::FieldName;
use crate::core::value::Value;
use crate::runtime::effect::Effect;
use crate::runtime::event::FormEvent;
use crate::state::{FormPhase, FormState};
use crate::submission::{SubmissionOutcome, SubmissionPayload};
use crate::validation::ServerErrorPolicy;
use crate::validation::schema::Schema;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut FormState, schema: &dyn Schema, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                Self::handle_change(state, schema, field, value)
            }
            FormEvent::FieldBlurred { field } => Self::handle_blur(state, schema, field),
            FormEvent::SubmitRequested => Self::handle_submit(state),
            FormEvent::SubmissionResolved { run_id, outcome } => {
                Self::handle_resolved(state, run_id, outcome)
            }
        }
    }

    fn handle_change(
        state: &mut FormState,
        schema: &dyn Schema,
        field: FieldName,
        value: Value,
    ) -> Vec<Effect> {
        if let Err(err) = state.registry.write(field, value) {
            tracing::warn!(field = %field, error = %err, "ignoring field change");
            return vec![];
        }

        if state.server_error_policy == ServerErrorPolicy::Invalidate {
            state.registry.clear_server_error(field);
        }

        let mut effects = Vec::new();
        let reveal = state.mode.reveals_on_change();
        Self::validate(state, schema, field, reveal, true, &mut effects);
        effects.push(Effect::RequestRender);
        effects
    }

    fn handle_blur(state: &mut FormState, schema: &dyn Schema, field: FieldName) -> Vec<Effect> {
        state.registry.touch(field);

        let mut effects = Vec::new();
        let reveal = state.mode.reveals_on_blur();
        Self::validate(state, schema, field, reveal, false, &mut effects);
        effects.push(Effect::RequestRender);
        effects
    }

    /// Edits keep revalidating while a submission is pending, but the phase
    /// stays `Submitting` until the outcome arrives.
    fn validate(
        state: &mut FormState,
        schema: &dyn Schema,
        field: FieldName,
        reveal: bool,
        edited: bool,
        effects: &mut Vec<Effect>,
    ) {
        if state.is_submitting {
            state.revalidate(schema, Some(field), reveal, edited);
            return;
        }

        Self::transition(state, FormPhase::Validating, effects);
        state.revalidate(schema, Some(field), reveal, edited);
        let settled = state.settled_phase();
        Self::transition(state, settled, effects);
    }

    fn handle_submit(state: &mut FormState) -> Vec<Effect> {
        if state.is_submitting {
            tracing::debug!(run_id = ?state.runs.in_flight(), "submit ignored, submission in flight");
            return vec![];
        }

        let mut effects = Vec::new();

        if !state.is_valid {
            state.registry.reveal_all();
            let settled = state.settled_phase();
            Self::transition(state, settled, &mut effects);
            effects.push(Effect::RequestRender);
            return effects;
        }

        let Some(run_id) = state.runs.start() else {
            return effects;
        };

        state.is_submitting = true;
        Self::transition(state, FormPhase::Submitting, &mut effects);

        let payload = SubmissionPayload::from_values(state.registry.values());
        tracing::info!(run_id, "submission started");
        effects.push(Effect::InvokeSubmission { run_id, payload });
        effects.push(Effect::RequestRender);
        effects
    }

    fn handle_resolved(
        state: &mut FormState,
        run_id: u64,
        outcome: SubmissionOutcome,
    ) -> Vec<Effect> {
        if !state.runs.finish(run_id) {
            tracing::warn!(run_id, "discarding stale submission outcome");
            return vec![];
        }

        state.is_submitting = false;
        let mut effects = Vec::new();

        let next = match &outcome {
            SubmissionOutcome::Success { .. } => FormPhase::SubmissionSucceeded,
            SubmissionOutcome::Error { errors, .. } => {
                state.registry.clear_server_errors();
                for reported in errors {
                    match reported.to_field_error() {
                        Ok(error) => state.registry.set_field_error(error.path, error.message),
                        Err(err) => {
                            tracing::warn!(path = %reported.path, error = %err, "skipping server error");
                        }
                    }
                }
                state.refresh_validity();
                FormPhase::SubmissionFailed
            }
        };

        tracing::info!(run_id, success = outcome.is_success(), "submission resolved");
        state.outcome = Some(outcome);
        Self::transition(state, next, &mut effects);
        let settled = state.settled_phase();
        Self::transition(state, settled, &mut effects);
        effects.push(Effect::RequestRender);
        effects
    }

    fn transition(state: &mut FormState, to: FormPhase, effects: &mut Vec<Effect>) {
        let from = state.phase;
        if from == to {
            return;
        }
        tracing::debug!(?from, ?to, "form phase changed");
        state.phase = to;
        effects.push(Effect::PhaseChanged { from, to });
    }
}
