use serde::{Deserialize, Serialize};

/// Attributes of one input source as reported by the platform registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSourceRecord {
    /// Stable identifier, e.g. `com.apple.keylayout.ABC`
    pub id: String,
    pub localized_name: String,
    /// Whether the source may be made active
    pub is_select_capable: bool,
    /// Whether the source is the active one
    pub is_selected: bool,
    pub source_languages: Vec<String>,
}

impl InputSourceRecord {
    /// Create a select-capable, unselected record with no languages
    pub fn new(id: impl Into<String>, localized_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            localized_name: localized_name.into(),
            is_select_capable: true,
            is_selected: false,
            source_languages: Vec::new(),
        }
    }

    pub fn with_select_capable(mut self, capable: bool) -> Self {
        self.is_select_capable = capable;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_languages = languages.into_iter().map(Into::into).collect();
        self
    }
}
