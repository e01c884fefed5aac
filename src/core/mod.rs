pub mod value;
pub mod values;

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six keys of the partner form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "service")]
    Service,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "lastname")]
    Lastname,
    #[serde(rename = "applicantName")]
    ApplicantName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "terms")]
    Terms,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        Self::Service,
        Self::Name,
        Self::Lastname,
        Self::ApplicantName,
        Self::Email,
        Self::Terms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Name => "name",
            Self::Lastname => "lastname",
            Self::ApplicantName => "applicantName",
            Self::Email => "email",
            Self::Terms => "terms",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Terms => FieldKind::Bool,
            _ => FieldKind::Text,
        }
    }

    pub fn label_key(&self) -> String {
        format!("input.{}.label", self.as_str())
    }

    pub fn placeholder_key(&self) -> String {
        format!("input.{}.placeholder", self.as_str())
    }

    pub fn error_key(&self) -> String {
        format!("input.{}.error", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| FormError::UnknownField(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Bool => f.write_str("boolean"),
        }
    }
}

/// Options offered by the `service` combo box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Erasmus,
    LanguageCourses,
    Concierge,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [Self::Erasmus, Self::LanguageCourses, Self::Concierge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Erasmus => "erasmus",
            Self::LanguageCourses => "language-courses",
            Self::Concierge => "concierge",
        }
    }

    pub fn label_key(&self) -> String {
        format!("input.service.options.{}", self.as_str())
    }

    pub fn iter() -> impl Iterator<Item = ServiceKind> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|service| service.as_str() == value)
            .ok_or_else(|| FormError::UnknownService(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, FieldName, ServiceKind};

    #[test]
    fn field_names_round_trip_through_wire_names() {
        for field in FieldName::ALL {
            let parsed: FieldName = field.as_str().parse().expect("known field");
            assert_eq!(parsed, field);
        }
        assert!("applicant_name".parse::<FieldName>().is_err());
    }

    #[test]
    fn only_terms_is_boolean() {
        let bools: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|field| field.kind() == FieldKind::Bool)
            .collect();
        assert_eq!(bools, vec![FieldName::Terms]);
    }

    #[test]
    fn service_options_keep_display_order() {
        let names: Vec<_> = ServiceKind::iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["erasmus", "language-courses", "concierge"]);
        assert_eq!(
            ServiceKind::LanguageCourses.label_key(),
            "input.service.options.language-courses"
        );
        assert!("".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn localization_keys_use_wire_names() {
        assert_eq!(FieldName::ApplicantName.label_key(), "input.applicantName.label");
        assert_eq!(FieldName::Email.error_key(), "input.email.error");
    }
}
