use crate::core::FieldName;
use crate::core::value::Value;
use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Current contents of the partner form. Lives as long as the mounted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Kept raw so an out-of-range selection reaches the validator.
    pub service: String,
    pub name: String,
    pub lastname: String,
    pub applicant_name: String,
    pub email: String,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Value {
        match field {
            FieldName::Terms => Value::Bool(self.terms),
            _ => Value::Text(self.text(field).unwrap_or_default().to_string()),
        }
    }

    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Service => Some(self.service.as_str()),
            FieldName::Name => Some(self.name.as_str()),
            FieldName::Lastname => Some(self.lastname.as_str()),
            FieldName::ApplicantName => Some(self.applicant_name.as_str()),
            FieldName::Email => Some(self.email.as_str()),
            FieldName::Terms => None,
        }
    }

    pub fn set(&mut self, field: FieldName, value: Value) -> Result<(), FormError> {
        if !value.fits(field.kind()) {
            return Err(FormError::ValueKind {
                field,
                expected: field.kind(),
            });
        }

        if field == FieldName::Terms {
            self.terms = value.as_bool().unwrap_or(false);
        } else if let Some(slot) = self.text_mut(field) {
            *slot = match value {
                Value::Text(text) => text,
                _ => String::new(),
            };
        }
        Ok(())
    }

    /// Builder form of [`FormValues::set`], for literals in tests and fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<Value>) -> Result<Self, FormError> {
        self.set(field, value.into())?;
        Ok(self)
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Service => Some(&mut self.service),
            FieldName::Name => Some(&mut self.name),
            FieldName::Lastname => Some(&mut self.lastname),
            FieldName::ApplicantName => Some(&mut self.applicant_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Terms => None,
        }
    }
}

/// A violated constraint or a server-reported problem, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(path: FieldName, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}
