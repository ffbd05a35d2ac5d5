use super::occurrence::EventOccurrence;
use serde::Serialize;

/// One calendar day: its `dd.mm.yy` token and the punches in recorded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: String,
    pub events: Vec<EventOccurrence>,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, events: Vec<EventOccurrence>) -> Self {
        Self {
            date: date.into(),
            events,
        }
    }

    /// Convenience constructor from `(label, time)` pairs without date tags.
    pub fn from_pairs(date: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        let events = pairs
            .iter()
            .map(|(label, time)| EventOccurrence::new(*label, *time))
            .collect();
        Self::new(date, events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
