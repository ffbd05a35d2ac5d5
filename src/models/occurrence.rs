use serde::{Deserialize, Serialize};

/// A single punch within a day, as produced by extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOccurrence {
    pub label: String,
    /// "HH:MM", only used in messages.
    pub time: String,
    /// Day token printed next to the punch by some host pages (e.g. "15").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_tag: Option<String>,
}

impl EventOccurrence {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
            date_tag: None,
        }
    }

    pub fn with_date_tag(mut self, tag: impl Into<String>) -> Self {
        self.date_tag = Some(tag.into());
        self
    }
}
