//! Day tokens in the host timesheet format `dd.mm.yy`.

use chrono::{Local, NaiveDate};

pub const DAY_TOKEN_FORMAT: &str = "%d.%m.%y";

/// Current local date as a day token. Read once per run by the CLI.
pub fn today_token() -> String {
    Local::now().date_naive().format(DAY_TOKEN_FORMAT).to_string()
}

pub fn parse_day_token(s: &str) -> Option<NaiveDate> {
    // chrono accepts "1.3.24"; the sheet format is always zero padded
    if s.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(s, DAY_TOKEN_FORMAT).ok()
}

pub fn is_day_token(s: &str) -> bool {
    parse_day_token(s).is_some()
}
