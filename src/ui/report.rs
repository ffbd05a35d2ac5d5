//! Terminal rendering of a validation report.

use crate::core::catalog::EventCatalog;
use crate::models::report::{DayReport, DayStatus, ValidationReport};
use crate::models::summary::MonthOutcome;
use crate::ui::messages::colours_enabled;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};

const WRAP_WIDTH: usize = 78;

fn status_colour(status: DayStatus) -> Colour {
    match status {
        DayStatus::Today => Colour::Green,
        DayStatus::HasIssues => Colour::Red,
        DayStatus::Invalid => Colour::Purple,
        DayStatus::Clean => Colour::White,
    }
}

fn paint(style: Style, text: &str) -> String {
    if colours_enabled() {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

fn wrap_item(text: &str) -> String {
    let opts = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent("  • ")
        .subsequent_indent("    ");
    textwrap::fill(text, opts)
}

/// Lines shown under one day: the optional "Today" marker, then the findings.
pub fn day_lines(day: &DayReport) -> Vec<String> {
    let mut lines = Vec::new();

    if day.status == DayStatus::Today {
        lines.push("Today".to_string());
    }
    if let Some(err) = &day.error {
        lines.push(format!("Cannot validate this day: {err}"));
    }
    lines.extend(day.issues.iter().map(|i| i.message.clone()));

    lines
}

/// Plain-text overview of the days with issues, in sheet order.
pub fn render_overview(report: &ValidationReport) -> String {
    if report.overview.is_empty() {
        return "No issues with your presence were found.\n".to_string();
    }

    let mut out = String::from("Some issues with your presence were found:\n");
    for entry in &report.overview {
        out.push_str(&format!("  {} - {} errors\n", entry.date, entry.issue_count));
    }
    out
}

/// Plain-text month accounting block.
pub fn render_month(month: &MonthOutcome, separator: char) -> String {
    let totals = match month {
        MonthOutcome::Quota(summary) => summary.totals(),
        MonthOutcome::NoRemainingDays(totals) => *totals,
        MonthOutcome::Unavailable { error } => {
            return format!("Month accounting unavailable: {error}\n");
        }
    };

    let mut table = Table::new(vec![Column::new("Month"), Column::new("Time")])
        .with_separator(separator);
    table.add_row(vec![
        "Required".into(),
        mins2readable(totals.required_minutes_total, false, true),
    ]);
    table.add_row(vec![
        "Worked".into(),
        mins2readable(totals.worked_minutes_total, false, true),
    ]);
    let remaining_label = if totals.remaining_minutes < 0 {
        "Overtime"
    } else {
        "Remaining"
    };
    table.add_row(vec![
        remaining_label.to_string(),
        mins2readable(totals.remaining_minutes.abs(), false, true),
    ]);
    table.add_row(vec![
        "Days with logged time".into(),
        totals.logged_days.to_string(),
    ]);
    table.add_row(vec![
        "Days without entry".into(),
        totals.days_without_entry.to_string(),
    ]);

    let mut out = table.render();

    match month {
        MonthOutcome::Quota(summary) => out.push_str(&format!(
            "Required per remaining day: {} (over {} day(s))\n",
            mins2readable(summary.quota_minutes(), false, true),
            summary.days_without_entry
        )),
        MonthOutcome::NoRemainingDays(_) => {
            out.push_str("Every working day already has logged time: no daily quota applicable.\n")
        }
        MonthOutcome::Unavailable { .. } => {}
    }

    out
}

pub fn print_report(report: &ValidationReport, show_clean: bool, separator: char) {
    println!(
        "{}",
        paint(
            Style::new().bold(),
            &format!("Attendance check (today: {})", report.today)
        )
    );
    println!();

    let mut clean = 0usize;
    for day in &report.days {
        if day.status == DayStatus::Clean {
            clean += 1;
            if !show_clean {
                continue;
            }
        }

        let colour = status_colour(day.status);
        println!(
            "{} {}",
            paint(colour.bold(), &day.date),
            paint(colour.normal(), &format!("[{}]", day.status.as_str()))
        );
        for line in day_lines(day) {
            println!("{}", wrap_item(&line));
        }
    }

    if !show_clean && clean > 0 {
        println!(
            "{}",
            paint(
                Colour::Fixed(8).normal(),
                &format!("{clean} clean day(s) not shown")
            )
        );
    }

    println!();
    print!("{}", render_overview(report));
    println!();
    print!("{}", render_month(&report.month, separator));
}

/// Catalog listing for the `kinds` command.
pub fn render_catalog(catalog: &EventCatalog, separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new("Label"),
        Column::new("First"),
        Column::new("Last"),
        Column::new("Side"),
        Column::new("Flags"),
    ])
    .with_separator(separator);

    fn yes_no(b: bool) -> String {
        let s = if b { "yes" } else { "no" };
        s.to_string()
    }

    for (label, kind) in catalog.iter() {
        let side = if kind.opening { "opening" } else { "closing" };
        table.add_row(vec![
            label.to_string(),
            yes_no(kind.valid_first),
            yes_no(kind.valid_last),
            side.to_string(),
            kind.flags(),
        ]);
    }

    table.render()
}
