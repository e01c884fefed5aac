use crate::core::values::{FieldError, FormValues};
use crate::core::{FieldName, ServiceKind};
use crate::i18n::Translator;
use crate::validation::validators::{self, Validator, run_validators};
use indexmap::IndexMap;

/// A pure check over a whole form snapshot.
pub trait Schema: Send + Sync {
    /// Errors come back in field order, at most one per field.
    fn validate(&self, values: &FormValues) -> Result<(), Vec<FieldError>>;

    fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<FieldError>;
}

/// Constraints of the partner-contact form.
pub struct PartnerSchema {
    rules: IndexMap<FieldName, Vec<Validator>>,
}

impl PartnerSchema {
    /// English messages from the built-in catalog.
    pub fn new() -> Self {
        Self::localized(&Translator::default())
    }

    /// Each field reports `input.<field>.error` from `translator`.
    pub fn localized(translator: &Translator) -> Self {
        let message = |field: FieldName| translator.t(&field.error_key());
        let services: Vec<&str> = ServiceKind::iter().map(|s| s.as_str()).collect();

        let mut rules: IndexMap<FieldName, Vec<Validator>> = IndexMap::new();
        rules.insert(
            FieldName::Service,
            vec![validators::one_of(&services, message(FieldName::Service))],
        );
        for field in [FieldName::Name, FieldName::Lastname, FieldName::ApplicantName] {
            rules.insert(field, vec![validators::required(message(field))]);
        }
        rules.insert(
            FieldName::Email,
            vec![
                validators::required(message(FieldName::Email)),
                validators::email(message(FieldName::Email)),
            ],
        );
        rules.insert(
            FieldName::Terms,
            vec![validators::accepted(message(FieldName::Terms))],
        );

        Self { rules }
    }
}

impl Default for PartnerSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema for PartnerSchema {
    fn validate(&self, values: &FormValues) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = FieldName::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, values))
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<FieldError> {
        let rules = self.rules.get(&field)?;
        run_validators(rules, &values.get(field))
            .err()
            .map(|message| FieldError::new(field, message))
    }
}
