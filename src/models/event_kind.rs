use serde::{Deserialize, Serialize};

/// Rule flags attached to one event label.
///
/// - `valid_first`: the label may open the day
/// - `valid_last`: the label may close the day
/// - `opening`: the label starts a work interval (arrival) rather than ending
///   one (departure). Whole-day absences are flagged so they stand alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventKind {
    #[serde(rename = "first")]
    pub valid_first: bool,
    #[serde(rename = "last")]
    pub valid_last: bool,
    pub opening: bool,
}

impl EventKind {
    pub const fn new(valid_first: bool, valid_last: bool, opening: bool) -> Self {
        Self {
            valid_first,
            valid_last,
            opening,
        }
    }

    /// Compact form used by `kinds`: e.g. `F-O` for a first-only opening label.
    pub fn flags(&self) -> String {
        let f = if self.valid_first { 'F' } else { '-' };
        let l = if self.valid_last { 'L' } else { '-' };
        let o = if self.opening { 'O' } else { 'C' };
        format!("{f}{l}{o}")
    }
}
