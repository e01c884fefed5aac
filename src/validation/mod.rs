pub mod schema;
pub mod validators;

use serde::{Deserialize, Serialize};

/// When a field's local error becomes visible. Validity itself is recomputed
/// on every change in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    All,
    OnChange,
    OnBlur,
    OnSubmit,
}

impl ValidationMode {
    pub fn reveals_on_change(&self) -> bool {
        matches!(self, Self::All | Self::OnChange)
    }

    pub fn reveals_on_blur(&self) -> bool {
        matches!(self, Self::All | Self::OnBlur)
    }
}

/// What server-reported field errors do to local validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerErrorPolicy {
    /// Shown under the field only. `is_valid` ignores them and local edits
    /// leave them in place until the next outcome replaces them.
    #[default]
    Cosmetic,
    /// The form stays invalid while any server error is present; editing the
    /// field clears its server error.
    Invalidate,
}
