use crate::core::FieldName;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorVisibility {
    Hidden,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    Local,
    Server,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEntry {
    pub error: String,
    pub source: ErrorSource,
    pub visibility: ErrorVisibility,
}

/// Per-field errors. One entry per field; every write replaces the previous one.
#[derive(Debug, Default, Clone)]
pub struct ValidationState {
    entries: IndexMap<FieldName, ValidationEntry>,
}

impl ValidationState {
    pub fn set_error(
        &mut self,
        id: FieldName,
        error: impl Into<String>,
        source: ErrorSource,
        visibility: ErrorVisibility,
    ) {
        self.entries.insert(
            id,
            ValidationEntry {
                error: error.into(),
                source,
                visibility,
            },
        );
    }

    pub fn clear_error(&mut self, id: FieldName) {
        self.entries.shift_remove(&id);
    }

    pub fn entry(&self, id: FieldName) -> Option<&ValidationEntry> {
        self.entries.get(&id)
    }

    pub fn visible_error(&self, id: FieldName) -> Option<&str> {
        self.entries.get(&id).and_then(|entry| {
            matches!(entry.visibility, ErrorVisibility::Inline).then_some(entry.error.as_str())
        })
    }

    pub fn reveal_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.visibility = ErrorVisibility::Inline;
        }
    }

    pub fn has_source(&self, id: FieldName, source: ErrorSource) -> bool {
        self.entries.get(&id).is_some_and(|entry| entry.source == source)
    }

    pub fn has_server_errors(&self) -> bool {
        self.entries
            .values()
            .any(|entry| entry.source == ErrorSource::Server)
    }

    pub fn clear_source(&mut self, source: ErrorSource) {
        self.entries.retain(|_, entry| entry.source != source);
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.entries.iter().filter_map(|(id, entry)| {
            matches!(entry.visibility, ErrorVisibility::Inline).then_some((*id, entry.error.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorSource, ErrorVisibility, ValidationState};
    use crate::core::FieldName;

    #[test]
    fn last_write_wins() {
        let mut state = ValidationState::default();
        state.set_error(FieldName::Email, "local", ErrorSource::Local, ErrorVisibility::Hidden);
        state.set_error(FieldName::Email, "server", ErrorSource::Server, ErrorVisibility::Inline);
        assert_eq!(state.visible_error(FieldName::Email), Some("server"));
        assert!(state.has_source(FieldName::Email, ErrorSource::Server));
    }

    #[test]
    fn hidden_errors_are_not_visible_until_revealed() {
        let mut state = ValidationState::default();
        state.set_error(FieldName::Name, "required", ErrorSource::Local, ErrorVisibility::Hidden);
        assert_eq!(state.visible_error(FieldName::Name), None);
        state.reveal_all();
        assert_eq!(state.visible_error(FieldName::Name), Some("required"));
    }

    #[test]
    fn clear_source_keeps_other_entries() {
        let mut state = ValidationState::default();
        state.set_error(FieldName::Name, "required", ErrorSource::Local, ErrorVisibility::Inline);
        state.set_error(FieldName::Email, "taken", ErrorSource::Server, ErrorVisibility::Inline);
        state.clear_source(ErrorSource::Server);
        assert!(!state.has_server_errors());
        assert_eq!(state.visible_entries().count(), 1);
    }
}
