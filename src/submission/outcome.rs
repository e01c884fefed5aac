use crate::core::FieldName;
use crate::core::values::FieldError;
use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// A field error as the remote handler reports it. `path` is untyped on the
/// wire and only becomes a [`FieldName`] when merged into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedError {
    pub path: String,
    pub message: String,
}

impl ReportedError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn to_field_error(&self) -> Result<FieldError, FormError> {
        let path: FieldName = self.path.parse()?;
        Ok(FieldError::new(path, self.message.clone()))
    }
}

impl From<FieldError> for ReportedError {
    fn from(error: FieldError) -> Self {
        Self {
            path: error.path.as_str().to_string(),
            message: error.message,
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success {
        message: String,
    },
    Error {
        message: String,
        #[serde(default)]
        errors: Vec<ReportedError>,
    },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>, errors: Vec<ReportedError>) -> Self {
        Self::Error {
            message: message.into(),
            errors,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message, .. } => message.as_str(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn errors(&self) -> &[ReportedError] {
        match self {
            Self::Success { .. } => &[],
            Self::Error { errors, .. } => errors.as_slice(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }
}
