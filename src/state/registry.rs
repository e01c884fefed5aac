use crate::core::FieldName;
use crate::core::value::Value;
use crate::core::values::{FieldError, FormValues};
use crate::error::FormError;
use crate::runtime::event::FormEvent;
use crate::state::validation::{ErrorSource, ErrorVisibility, ValidationState};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub touched: bool,
    pub dirty: bool,
}

/// What an input needs to render itself and report back.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    pub name: FieldName,
    pub value: Value,
    pub error: Option<String>,
    pub touched: bool,
}

impl FieldBinding {
    pub fn change(&self, value: impl Into<Value>) -> FormEvent {
        FormEvent::FieldChanged {
            field: self.name,
            value: value.into(),
        }
    }

    pub fn blur(&self) -> FormEvent {
        FormEvent::FieldBlurred { field: self.name }
    }
}

/// Values, touched state and errors of the six form fields.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    values: FormValues,
    meta: IndexMap<FieldName, FieldMeta>,
    validation: ValidationState,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self {
            values: FormValues::new(),
            meta: FieldName::ALL
                .into_iter()
                .map(|field| (field, FieldMeta::default()))
                .collect(),
            validation: ValidationState::default(),
        }
    }

    pub fn register(&self, name: FieldName) -> FieldBinding {
        FieldBinding {
            name,
            value: self.values.get(name),
            error: self.validation.visible_error(name).map(str::to_string),
            touched: self.meta(name).touched,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn meta(&self, name: FieldName) -> FieldMeta {
        self.meta.get(&name).copied().unwrap_or_default()
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn write(&mut self, name: FieldName, value: Value) -> Result<(), FormError> {
        self.values.set(name, value)?;
        self.meta.entry(name).or_default().dirty = true;
        Ok(())
    }

    pub fn touch(&mut self, name: FieldName) {
        self.meta.entry(name).or_default().touched = true;
    }

    /// Overwrites whatever error the field had with a visible server error.
    pub fn set_field_error(&mut self, name: FieldName, message: impl Into<String>) {
        self.validation
            .set_error(name, message, ErrorSource::Server, ErrorVisibility::Inline);
    }

    pub fn error_for(&self, name: FieldName) -> Option<FieldError> {
        self.validation
            .visible_error(name)
            .map(|message| FieldError::new(name, message))
    }

    pub fn clear_server_error(&mut self, name: FieldName) {
        if self.validation.has_source(name, ErrorSource::Server) {
            self.validation.clear_error(name);
        }
    }

    pub fn clear_server_errors(&mut self) {
        self.validation.clear_source(ErrorSource::Server);
    }

    pub fn has_server_errors(&self) -> bool {
        self.validation.has_server_errors()
    }

    pub fn reveal_all(&mut self) {
        self.validation.reveal_all();
    }

    /// Records the schema's verdict for one field. Server errors stay unless the
    /// field itself was edited into a locally invalid value. A local error that
    /// was shown once stays shown.
    pub fn sync_local(&mut self, name: FieldName, local: Option<String>, reveal: bool, edited: bool) {
        let current = self.validation.entry(name);
        let is_server = current.is_some_and(|e| e.source == ErrorSource::Server);
        let was_shown = current.is_some_and(|e| {
            e.source == ErrorSource::Local && e.visibility == ErrorVisibility::Inline
        });

        if is_server && !(edited && local.is_some()) {
            return;
        }

        match local {
            Some(message) => {
                let visibility = if reveal || was_shown {
                    ErrorVisibility::Inline
                } else {
                    ErrorVisibility::Hidden
                };
                self.validation
                    .set_error(name, message, ErrorSource::Local, visibility);
            }
            None => self.validation.clear_error(name),
        }
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
