//! Per-day sequence checks.
//!
//! One forward pass over the punches of a day. For every index the checks run
//! in a fixed order (first entry, last entry, continuity, date tag) and every
//! finding is collected; nothing stops the pass.

use crate::core::catalog::EventCatalog;
use crate::errors::AppResult;
use crate::models::day::DayRecord;
use crate::models::event_kind::EventKind;
use crate::models::issue::{IssueCode, ValidationIssue};
use crate::utils::time::require_time;

#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    /// Compare punch date tags with the day token. Tags are only checked
    /// where extraction supplied them.
    pub date_check: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { date_check: true }
    }
}

/// Validate one day against the catalog.
///
/// Fails (for this day only) when a label is not in the catalog or a time is
/// not `HH:MM`; every other problem is returned as a [`ValidationIssue`].
pub fn validate_day(
    day: &DayRecord,
    catalog: &EventCatalog,
    opts: ValidatorOptions,
) -> AppResult<Vec<ValidationIssue>> {
    // Resolve everything first so a structural error never leaves a half
    // filled issue list behind.
    let kinds = day
        .events
        .iter()
        .map(|ev| {
            require_time(&ev.time)?;
            catalog.lookup(&ev.label)
        })
        .collect::<AppResult<Vec<EventKind>>>()?;

    let mut issues = Vec::new();
    let last = day.events.len().saturating_sub(1);
    let mut previous: Option<(&str, EventKind)> = None;

    for (index, (ev, kind)) in day.events.iter().zip(kinds).enumerate() {
        if index == 0 && !kind.valid_first {
            issues.push(ValidationIssue::new(
                IssueCode::InvalidFirstEntry,
                format!("First entry of the day cannot be {}", ev.label),
                index,
            ));
        }

        if index == last && !kind.valid_last {
            issues.push(ValidationIssue::new(
                IssueCode::InvalidLastEntry,
                format!("Last entry of the day cannot be {}", ev.label),
                index,
            ));
        }

        // Only the opening flag is compared: two different whole-day labels
        // in a row are reported as well.
        if let Some((prev_label, prev_kind)) = previous
            && prev_kind.opening == kind.opening
        {
            issues.push(ValidationIssue::new(
                IssueCode::BrokenContinuity,
                format!(
                    "The entry {} cannot be followed by {} at the time {}",
                    prev_label, ev.label, ev.time
                ),
                index,
            ));
        }

        if opts.date_check
            && let Some(tag) = &ev.date_tag
            && !day.date.starts_with(tag.as_str())
        {
            issues.push(ValidationIssue::new(
                IssueCode::DateMismatch,
                format!(
                    "The entry at {} is tagged {}, which does not match the day {}",
                    ev.time, tag, day.date
                ),
                index,
            ));
        }

        previous = Some((ev.label.as_str(), kind));
    }

    Ok(issues)
}
