use crate::error::FormError;
use crate::i18n::Translator;
use crate::validation::{ServerErrorPolicy, ValidationMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_NAMESPACE: &str = "forms";

/// Form behaviour, usually read from a YAML file:
///
/// ```yaml
/// validation_mode: all
/// server_error_policy: cosmetic
/// namespace: forms
/// messages: locales/ro.yaml
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub validation_mode: ValidationMode,
    pub server_error_policy: ServerErrorPolicy,
    pub namespace: String,
    /// Message catalog; the built-in English catalog is used when unset.
    pub messages: Option<PathBuf>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::default(),
            server_error_policy: ServerErrorPolicy::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            messages: None,
        }
    }
}

impl FormConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, FormError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Loads the config; a relative `messages` path is resolved against the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let raw = fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&raw)?;
        if let (Some(messages), Some(dir)) = (config.messages.as_ref(), path.parent()) {
            if messages.is_relative() {
                config.messages = Some(dir.join(messages));
            }
        }
        Ok(config)
    }

    pub fn translator(&self) -> Result<Translator, FormError> {
        match &self.messages {
            Some(path) => Translator::load(&self.namespace, path),
            None => Ok(Translator::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormConfig;
    use crate::validation::{ServerErrorPolicy, ValidationMode};

    #[test]
    fn empty_document_uses_defaults() {
        let config = FormConfig::from_yaml_str("{}").expect("config");
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.validation_mode, ValidationMode::All);
        assert_eq!(config.namespace, "forms");
    }

    #[test]
    fn parses_modes_and_policies() {
        let config = FormConfig::from_yaml_str(
            "validation_mode: on_blur\nserver_error_policy: invalidate\n",
        )
        .expect("config");
        assert_eq!(config.validation_mode, ValidationMode::OnBlur);
        assert_eq!(config.server_error_policy, ServerErrorPolicy::Invalidate);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(FormConfig::from_yaml_str("validation_mode: eventually\n").is_err());
    }

    #[test]
    fn translator_defaults_to_english() {
        let translator = FormConfig::default().translator().expect("translator");
        assert_eq!(translator.t("submit"), "Send");
    }
}
