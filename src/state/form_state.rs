use crate::config::FormConfig;
use crate::core::FieldName;
use crate::core::values::FieldError;
use crate::state::registry::FieldRegistry;
use crate::submission::{SubmissionOutcome, SubmissionRunState};
use crate::validation::schema::Schema;
use crate::validation::{ServerErrorPolicy, ValidationMode};

/// Controller states. `Validating` is passed through synchronously on every
/// edit and never observed between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Invalid,
    Valid,
    Submitting,
    SubmissionSucceeded,
    SubmissionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

/// The status line above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: BannerTone,
    pub message: String,
}

impl Banner {
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        let tone = if outcome.is_success() {
            BannerTone::Success
        } else {
            BannerTone::Error
        };
        Self {
            tone,
            message: outcome.message().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub registry: FieldRegistry,
    pub is_valid: bool,
    pub is_submitting: bool,
    /// `None` until the first submission of this mount resolves.
    pub outcome: Option<SubmissionOutcome>,
    pub phase: FormPhase,
    pub mode: ValidationMode,
    pub server_error_policy: ServerErrorPolicy,
    pub runs: SubmissionRunState,
    /// Local verdict, kept apart from `is_valid` which may also account for
    /// server errors.
    pub(crate) locally_valid: bool,
}

impl FormState {
    /// A freshly mounted form: empty values, errors computed but hidden.
    pub fn new(config: &FormConfig, schema: &dyn Schema) -> Self {
        let mut state = Self {
            registry: FieldRegistry::new(),
            is_valid: false,
            is_submitting: false,
            outcome: None,
            phase: FormPhase::Idle,
            mode: config.validation_mode,
            server_error_policy: config.server_error_policy,
            runs: SubmissionRunState::default(),
            locally_valid: false,
        };
        state.revalidate(schema, None, false, false);
        state
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid && !self.is_submitting
    }

    pub fn banner(&self) -> Option<Banner> {
        self.outcome.as_ref().map(Banner::from_outcome)
    }

    pub fn error_for(&self, field: FieldName) -> Option<FieldError> {
        self.registry.error_for(field)
    }

    /// Re-runs the schema over all fields. `focus` is the field the event
    /// concerns; only that one may be revealed, and only an edit of it may
    /// replace its server error.
    pub(crate) fn revalidate(
        &mut self,
        schema: &dyn Schema,
        focus: Option<FieldName>,
        reveal: bool,
        edited: bool,
    ) {
        let values = self.registry.values().clone();
        let errors = schema.validate(&values).err().unwrap_or_default();
        self.locally_valid = errors.is_empty();

        for field in FieldName::ALL {
            let local = errors
                .iter()
                .find(|e| e.path == field)
                .map(|e| e.message.clone());
            let focused = focus == Some(field);
            self.registry
                .sync_local(field, local, reveal && focused, edited && focused);
        }

        self.refresh_validity();
    }

    pub(crate) fn refresh_validity(&mut self) {
        self.is_valid = match self.server_error_policy {
            ServerErrorPolicy::Cosmetic => self.locally_valid,
            ServerErrorPolicy::Invalidate => {
                self.locally_valid && !self.registry.has_server_errors()
            }
        };
    }

    pub(crate) fn settled_phase(&self) -> FormPhase {
        if self.is_valid {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        }
    }
}
