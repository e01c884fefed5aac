use crate::config::FormConfig;
use crate::core::FieldName;
use crate::core::value::Value;
use crate::core::values::{FieldError, FormValues};
use crate::error::FormError;
use crate::i18n::Translator;
use crate::runtime::effect::Effect;
use crate::runtime::event::FormEvent;
use crate::runtime::reducer::Reducer;
use crate::state::{Banner, FieldBinding, FormPhase, FormState};
use crate::submission::{SubmissionChannel, SubmissionCompletion, SubmissionExecutor};
use crate::validation::schema::{PartnerSchema, Schema};
use crate::view::FormView;
use std::sync::Arc;
use std::time::Duration;

/// One mounted partner form: state, schema, localization and the channel
/// submissions go through.
pub struct FormController<C: SubmissionChannel + 'static> {
    state: FormState,
    config: FormConfig,
    schema: Box<dyn Schema>,
    /// `false` once a caller installs its own schema.
    localized_schema: bool,
    translator: Translator,
    channel: Arc<C>,
    executor: SubmissionExecutor,
}

impl<C: SubmissionChannel + 'static> FormController<C> {
    /// Default behaviour and the built-in English messages.
    pub fn new(channel: C) -> Self {
        Self::assemble(channel, FormConfig::default(), Translator::default())
    }

    /// Loads the message catalog named by `config`, if any.
    pub fn with_config(channel: C, config: FormConfig) -> Result<Self, FormError> {
        let translator = config.translator()?;
        Ok(Self::assemble(channel, config, translator))
    }

    /// Swaps the catalog. Local error messages follow it unless a schema was
    /// installed with [`FormController::with_schema`].
    pub fn with_translator(mut self, translator: Translator) -> Self {
        if self.localized_schema {
            self.schema = Box::new(PartnerSchema::localized(&translator));
        }
        self.translator = translator;
        self.remount();
        self
    }

    pub fn with_schema(mut self, schema: impl Schema + 'static) -> Self {
        self.schema = Box::new(schema);
        self.localized_schema = false;
        self.remount();
        self
    }

    fn assemble(channel: C, config: FormConfig, translator: Translator) -> Self {
        let schema: Box<dyn Schema> = Box::new(PartnerSchema::localized(&translator));
        let state = FormState::new(&config, schema.as_ref());
        Self {
            state,
            config,
            schema,
            localized_schema: true,
            translator,
            channel: Arc::new(channel),
            executor: SubmissionExecutor::new(),
        }
    }

    /// Feeds one event through the reducer and carries out its effects.
    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        let effects = Reducer::reduce(&mut self.state, self.schema.as_ref(), event);
        for effect in &effects {
            if let Effect::InvokeSubmission { run_id, payload } = effect {
                self.executor
                    .spawn(Arc::clone(&self.channel), *run_id, payload.clone());
            }
        }
        effects
    }

    pub fn bind(&self, field: FieldName) -> FieldBinding {
        self.state.registry.register(field)
    }

    pub fn change(&mut self, field: FieldName, value: impl Into<Value>) -> Result<(), FormError> {
        let value = value.into();
        if !value.fits(field.kind()) {
            return Err(FormError::ValueKind {
                field,
                expected: field.kind(),
            });
        }
        self.dispatch(FormEvent::FieldChanged { field, value });
        Ok(())
    }

    /// Same as [`FormController::change`] for a field known only by its wire name.
    pub fn change_by_name(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let field: FieldName = name.parse()?;
        self.change(field, value)
    }

    pub fn blur(&mut self, field: FieldName) {
        self.dispatch(FormEvent::FieldBlurred { field });
    }

    /// Returns whether a submission was started.
    pub fn submit(&mut self) -> bool {
        self.dispatch(FormEvent::SubmitRequested)
            .iter()
            .any(|effect| matches!(effect, Effect::InvokeSubmission { .. }))
    }

    /// Applies every completion that has arrived. Returns how many were read,
    /// stale ones included.
    pub fn poll(&mut self) -> usize {
        let completions = self.executor.drain_ready();
        let count = completions.len();
        for completion in completions {
            self.resolve(completion);
        }
        count
    }

    /// Blocks for at most `timeout` waiting for a completion.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        match self.executor.wait_ready(timeout) {
            Some(completion) => {
                self.resolve(completion);
                true
            }
            None => false,
        }
    }

    /// Starts over as if the form had been mounted again. An outcome still in
    /// flight is discarded when it arrives.
    pub fn reset(&mut self) {
        self.remount();
    }

    fn remount(&mut self) {
        let mut runs = self.state.runs.clone();
        runs.abandon();
        self.state = FormState::new(&self.config, self.schema.as_ref());
        self.state.runs = runs;
    }

    fn resolve(&mut self, completion: SubmissionCompletion) {
        self.dispatch(FormEvent::SubmissionResolved {
            run_id: completion.run_id,
            outcome: completion.outcome,
        });
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        self.state.registry.values()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.phase
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn banner(&self) -> Option<Banner> {
        self.state.banner()
    }

    pub fn error_for(&self, field: FieldName) -> Option<FieldError> {
        self.state.error_for(field)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn view(&self) -> FormView {
        FormView::build(&self.state, &self.translator)
    }
}

#[cfg(test)]
mod tests {
    use super::FormController;
    use crate::core::FieldName;
    use crate::core::values::{FieldError, FormValues};
    use crate::error::FormError;
    use crate::i18n::Translator;
    use crate::submission::{SubmissionOutcome, SubmissionPayload};
    use crate::validation::schema::Schema;

    struct NameOnly;

    impl Schema for NameOnly {
        fn validate(&self, values: &FormValues) -> Result<(), Vec<FieldError>> {
            match self.validate_field(FieldName::Name, values) {
                Some(error) => Err(vec![error]),
                None => Ok(()),
            }
        }

        fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<FieldError> {
            (field == FieldName::Name && values.name.trim().is_empty())
                .then(|| FieldError::new(FieldName::Name, "name please"))
        }
    }

    fn thanks(_: &SubmissionPayload) -> SubmissionOutcome {
        SubmissionOutcome::success("Thanks!")
    }

    #[test]
    fn change_rejects_wrong_kind_and_unknown_names() {
        let mut form = FormController::new(thanks);
        assert!(matches!(
            form.change(FieldName::Terms, "yes"),
            Err(FormError::ValueKind { .. })
        ));
        assert!(matches!(
            form.change_by_name("phone", "123"),
            Err(FormError::UnknownField(_))
        ));
        form.change_by_name("applicantName", "Ana Popescu")
            .expect("known field");
        assert_eq!(form.values().applicant_name, "Ana Popescu");
    }

    #[test]
    fn reset_clears_values_and_outcome() {
        let mut form = FormController::new(thanks);
        form.change(FieldName::Name, "Ana").expect("change");
        form.reset();
        assert!(form.values().name.is_empty());
        assert!(form.banner().is_none());
    }

    #[test]
    fn translator_keeps_a_custom_schema() {
        let translator = Translator::from_yaml_str("forms", "forms:\n  submit: Trimite\n")
            .expect("catalog");
        let mut form = FormController::new(thanks)
            .with_schema(NameOnly)
            .with_translator(translator);

        form.change(FieldName::Name, "").expect("name");
        assert_eq!(
            form.error_for(FieldName::Name).map(|e| e.message),
            Some("name please".to_string())
        );
        form.change(FieldName::Name, "Ana").expect("name");
        assert!(form.can_submit());
        assert_eq!(form.view().submit.label, "Trimite");
    }
}
