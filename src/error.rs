use crate::core::{FieldKind, FieldName};
use thiserror::Error;

/// Errors surfaced by the form core. None of them is fatal to the host
/// application; validation and submission failures are modelled as data, not
/// as `FormError`.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that is not one of the six form keys.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// A service value outside the closed option list.
    #[error("unknown service option: {0}")]
    UnknownService(String),

    /// A value of the wrong kind was written into a field.
    #[error("field `{field}` expects a {expected} value")]
    ValueKind { field: FieldName, expected: FieldKind },

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
