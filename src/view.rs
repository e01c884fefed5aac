use crate::core::value::Value;
use crate::core::{FieldName, ServiceKind};
use crate::i18n::Translator;
use crate::state::{Banner, FormState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub value: Value,
    pub error: Option<String>,
    /// Combo-box entries; empty for plain inputs.
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub label: String,
    pub enabled: bool,
    pub pending: bool,
}

/// Everything a renderer needs, already localized.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub banner: Option<Banner>,
    pub fields: Vec<FieldView>,
    pub submit: SubmitView,
}

impl FormView {
    pub fn build(state: &FormState, translator: &Translator) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| {
                let binding = state.registry.register(name);
                let options = if name == FieldName::Service {
                    ServiceKind::iter()
                        .map(|service| OptionView {
                            value: service.as_str(),
                            label: translator.t(&service.label_key()),
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                FieldView {
                    name,
                    label: translator.t(&name.label_key()),
                    placeholder: translator.t(&name.placeholder_key()),
                    value: binding.value,
                    error: binding.error,
                    options,
                }
            })
            .collect();

        Self {
            banner: state.banner(),
            fields,
            submit: SubmitView {
                label: translator.t("submit"),
                enabled: state.can_submit(),
                pending: state.is_submitting,
            },
        }
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::FormView;
    use crate::config::FormConfig;
    use crate::core::FieldName;
    use crate::i18n::Translator;
    use crate::state::FormState;
    use crate::validation::schema::PartnerSchema;

    #[test]
    fn fresh_form_view_is_localized_and_disabled() {
        let state = FormState::new(&FormConfig::default(), &PartnerSchema::new());
        let view = FormView::build(&state, &Translator::english());

        assert!(view.banner.is_none());
        assert_eq!(view.fields.len(), 6);
        assert_eq!(view.submit.label, "Send");
        assert!(!view.submit.enabled);

        let service = view.field(FieldName::Service).expect("service field");
        let values: Vec<_> = service.options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["erasmus", "language-courses", "concierge"]);
        assert!(view.field(FieldName::Email).expect("email").options.is_empty());
    }
}
