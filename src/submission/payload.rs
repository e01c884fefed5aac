use crate::core::FieldName;
use crate::core::values::FormValues;
use crate::error::FormError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value a ticked checkbox contributes to form data.
pub const CHECKBOX_ON: &str = "on";

/// Field name to value, encoded the way a browser encodes form data: text
/// fields are always present, the `terms` checkbox only when ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload(IndexMap<String, String>);

impl SubmissionPayload {
    pub fn from_values(values: &FormValues) -> Self {
        let mut entries = IndexMap::new();
        for field in FieldName::ALL {
            match field {
                FieldName::Terms => {
                    if values.terms {
                        entries.insert(field.as_str().to_string(), CHECKBOX_ON.to_string());
                    }
                }
                _ => {
                    let text = values.text(field).unwrap_or_default();
                    entries.insert(field.as_str().to_string(), text.to_string());
                }
            }
        }
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionPayload;
    use crate::core::values::FormValues;

    #[test]
    fn ticked_terms_are_sent_as_on() {
        let values = FormValues {
            service: "concierge".into(),
            name: "Ana".into(),
            lastname: "Popescu".into(),
            applicant_name: "Ana Popescu".into(),
            email: "ana@example.com".into(),
            terms: true,
        };
        let payload = SubmissionPayload::from_values(&values);
        assert_eq!(payload.get("terms"), Some("on"));
        assert_eq!(payload.get("applicantName"), Some("Ana Popescu"));
        assert_eq!(payload.len(), 6);
    }

    #[test]
    fn unticked_terms_are_absent() {
        let payload = SubmissionPayload::from_values(&FormValues::new());
        assert!(!payload.contains("terms"));
        assert_eq!(payload.get("email"), Some(""));
    }

    #[test]
    fn json_keeps_field_order() {
        let payload = SubmissionPayload::from_values(&FormValues::new());
        assert_eq!(
            payload.to_json().expect("encode"),
            r#"{"service":"","name":"","lastname":"","applicantName":"","email":""}"#
        );
    }
}
