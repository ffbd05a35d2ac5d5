//! CSV sheets: one row per punch.
//!
//! Header: `date,kind,label,time,date_tag,worked`. Consecutive rows with the
//! same date form one day; a row with an empty label is a day without punches.

use super::model::{DayKind, MonthSheet, SheetDay};
use crate::errors::AppResult;
use crate::models::occurrence::EventOccurrence;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    #[serde(default)]
    kind: Option<DayKind>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    date_tag: Option<String>,
    #[serde(default)]
    worked: Option<String>,
}

pub(crate) fn parse_csv<R: Read>(input: R) -> AppResult<MonthSheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut days: Vec<SheetDay> = Vec::new();

    for row in rdr.deserialize::<CsvRow>() {
        let row = row?;

        let starts_new_day = days.last().is_none_or(|d| d.date != row.date);
        if starts_new_day {
            days.push(SheetDay {
                date: row.date.clone(),
                kind: DayKind::default(),
                worked: None,
                events: Vec::new(),
            });
        }

        let Some(day) = days.last_mut() else {
            continue;
        };

        if let Some(kind) = row.kind {
            day.kind = kind;
        }
        if day.worked.is_none() {
            day.worked = row.worked.filter(|w| !w.is_empty());
        }
        if !row.label.is_empty() {
            day.events.push(EventOccurrence {
                label: row.label,
                time: row.time,
                date_tag: row.date_tag.filter(|t| !t.is_empty()),
            });
        }
    }

    Ok(MonthSheet { days })
}
