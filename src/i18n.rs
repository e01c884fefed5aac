//! Message lookup for labels, placeholders and error texts.
//!
//! Catalogs are nested YAML mappings under a namespace (`forms` by default);
//! they are flattened into dotted keys such as `input.email.label`.

use crate::config::DEFAULT_NAMESPACE;
use crate::error::FormError;
use indexmap::IndexMap;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;

const ENGLISH: &[(&str, &str)] = &[
    ("input.service.label", "Service"),
    ("input.service.placeholder", "Choose a service"),
    ("input.service.options.erasmus", "Erasmus"),
    ("input.service.options.language-courses", "Language courses"),
    ("input.service.options.concierge", "Concierge"),
    ("input.service.error", "Please choose a service"),
    ("input.name.label", "Name"),
    ("input.name.placeholder", "Your name"),
    ("input.name.error", "Please enter your name"),
    ("input.lastname.label", "Last name"),
    ("input.lastname.placeholder", "Your last name"),
    ("input.lastname.error", "Please enter your last name"),
    ("input.applicantName.label", "Applicant name"),
    ("input.applicantName.placeholder", "Full name of the applicant"),
    ("input.applicantName.error", "Please enter the applicant's name"),
    ("input.email.label", "Email"),
    ("input.email.placeholder", "name@example.com"),
    ("input.email.error", "Please enter a valid email address"),
    ("input.terms.label", "I agree to the terms and conditions"),
    ("input.terms.placeholder", ""),
    ("input.terms.error", "You must accept the terms"),
    ("submit", "Send"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    namespace: String,
    messages: IndexMap<String, String>,
}

impl Translator {
    pub fn new(namespace: impl Into<String>, messages: IndexMap<String, String>) -> Self {
        Self {
            namespace: namespace.into(),
            messages,
        }
    }

    pub fn english() -> Self {
        let messages = ENGLISH
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(DEFAULT_NAMESPACE, messages)
    }

    /// Reads the `namespace` section of a YAML catalog. A document without
    /// that top-level key is taken as the namespace contents itself.
    pub fn from_yaml_str(namespace: &str, raw: &str) -> Result<Self, FormError> {
        let document: YamlValue = serde_yaml::from_str(raw)?;
        let section = document.get(namespace).unwrap_or(&document);

        let mut messages = IndexMap::new();
        flatten(section, String::new(), &mut messages);
        Ok(Self::new(namespace, messages))
    }

    pub fn load(namespace: &str, path: &Path) -> Result<Self, FormError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(namespace, &raw)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Looks `key` up. Missing keys come back verbatim.
    pub fn t(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                tracing::warn!(namespace = %self.namespace, key, "missing translation");
                key.to_string()
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

fn flatten(node: &YamlValue, prefix: String, out: &mut IndexMap<String, String>) {
    match node {
        YamlValue::Mapping(map) => {
            for (key, value) in map {
                let Some(key) = scalar(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(value, path, out);
            }
        }
        YamlValue::Tagged(tagged) => flatten(&tagged.value, prefix, out),
        other => {
            if let Some(text) = scalar(other) {
                if !prefix.is_empty() {
                    out.insert(prefix, text);
                }
            }
        }
    }
}

fn scalar(node: &YamlValue) -> Option<String> {
    match node {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
