use rattendance::core::catalog::EventCatalog;
use rattendance::core::validator::{ValidatorOptions, validate_day};
use rattendance::errors::AppError;
use rattendance::models::day::DayRecord;
use rattendance::models::event_kind::EventKind;
use rattendance::models::issue::IssueCode;
use rattendance::models::occurrence::EventOccurrence;
use std::collections::BTreeMap;

fn check(day: &DayRecord) -> Vec<IssueCode> {
    validate_day(day, &EventCatalog::default(), ValidatorOptions::default())
        .expect("day validates")
        .into_iter()
        .map(|i| i.code)
        .collect()
}

#[test]
fn test_empty_day_has_no_issues() {
    let day = DayRecord::new("01.03.24", vec![]);
    assert!(day.is_empty());
    assert!(check(&day).is_empty());
}

#[test]
fn test_alternating_day_is_clean() {
    let day = DayRecord::from_pairs("01.03.24", &[("Příchod", "08:00"), ("Odchod", "16:30")]);
    assert!(check(&day).is_empty());

    let day = DayRecord::from_pairs(
        "01.03.24",
        &[
            ("Příchod", "08:00"),
            ("Odchod", "11:30"),
            ("Služební cesta", "12:00"),
            ("Odchod", "17:00"),
        ],
    );
    assert!(check(&day).is_empty());
}

#[test]
fn test_single_departure_is_invalid_first_only() {
    // Odchod may close a day, so only the first-entry check fires
    let day = DayRecord::from_pairs("01.03.24", &[("Odchod", "16:00")]);
    assert_eq!(check(&day), vec![IssueCode::InvalidFirstEntry]);
}

#[test]
fn test_single_break_fails_first_and_last() {
    let day = DayRecord::from_pairs("01.03.24", &[("Přestávka", "12:00")]);
    assert_eq!(
        check(&day),
        vec![IssueCode::InvalidFirstEntry, IssueCode::InvalidLastEntry]
    );
}

#[test]
fn test_single_whole_day_absence_is_clean() {
    let day = DayRecord::from_pairs("01.03.24", &[("Nemoc", "08:00")]);
    assert!(check(&day).is_empty());
}

#[test]
fn test_two_arrivals_break_continuity() {
    let day = DayRecord::from_pairs(
        "01.03.24",
        &[("Příchod", "08:00"), ("Příchod", "12:00"), ("Odchod", "16:00")],
    );

    let issues =
        validate_day(&day, &EventCatalog::default(), ValidatorOptions::default()).unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::BrokenContinuity);
    assert_eq!(issues[0].event_index, Some(1));
    assert_eq!(
        issues[0].message,
        "The entry Příchod cannot be followed by Příchod at the time 12:00"
    );
}

#[test]
fn test_two_arrivals_only_also_fail_last_entry() {
    let day = DayRecord::from_pairs("01.03.24", &[("Příchod", "08:00"), ("Příchod", "12:00")]);
    assert_eq!(
        check(&day),
        vec![IssueCode::InvalidLastEntry, IssueCode::BrokenContinuity]
    );
}

#[test]
fn test_two_whole_day_absences_in_a_row_are_flagged() {
    // only the opening flag is compared
    let day = DayRecord::from_pairs("01.03.24", &[("Lékař", "08:00"), ("Nemoc", "10:00")]);
    assert_eq!(check(&day), vec![IssueCode::BrokenContinuity]);
}

#[test]
fn test_issue_order_follows_event_index() {
    let day = DayRecord::from_pairs(
        "01.03.24",
        &[
            ("Odchod", "07:00"),
            ("Odchod", "08:00"),
            ("Příchod", "09:00"),
            ("Příchod", "10:00"),
        ],
    );

    let issues =
        validate_day(&day, &EventCatalog::default(), ValidatorOptions::default()).unwrap();
    let got: Vec<(IssueCode, Option<usize>)> =
        issues.iter().map(|i| (i.code, i.event_index)).collect();

    assert_eq!(
        got,
        vec![
            (IssueCode::InvalidFirstEntry, Some(0)),
            (IssueCode::BrokenContinuity, Some(1)),
            (IssueCode::InvalidLastEntry, Some(3)),
            (IssueCode::BrokenContinuity, Some(3)),
        ]
    );
}

#[test]
fn test_date_tag_mismatch() {
    let day = DayRecord::new(
        "15.03.24",
        vec![
            EventOccurrence::new("Příchod", "08:00").with_date_tag("14"),
            EventOccurrence::new("Odchod", "16:00").with_date_tag("15"),
        ],
    );

    let issues =
        validate_day(&day, &EventCatalog::default(), ValidatorOptions::default()).unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::DateMismatch);
    assert_eq!(issues[0].event_index, Some(0));
    assert!(issues[0].message.contains("08:00"));
    assert!(issues[0].message.contains("14"));
}

#[test]
fn test_date_check_can_be_disabled() {
    let day = DayRecord::new(
        "15.03.24",
        vec![
            EventOccurrence::new("Příchod", "08:00").with_date_tag("14"),
            EventOccurrence::new("Odchod", "16:00").with_date_tag("14"),
        ],
    );

    let issues = validate_day(
        &day,
        &EventCatalog::default(),
        ValidatorOptions { date_check: false },
    )
    .unwrap();
    assert!(issues.is_empty());
}

#[test]
fn test_unknown_label_fails_the_day() {
    let day = DayRecord::from_pairs("01.03.24", &[("Odchod", "07:00"), ("Teleport", "08:00")]);

    match validate_day(&day, &EventCatalog::default(), ValidatorOptions::default()) {
        Err(AppError::UnknownEventKind(label)) => assert_eq!(label, "Teleport"),
        other => panic!("expected UnknownEventKind, got {other:?}"),
    }
}

#[test]
fn test_malformed_time_fails_the_day() {
    let day = DayRecord::from_pairs("01.03.24", &[("Příchod", "8 o'clock")]);

    assert!(matches!(
        validate_day(&day, &EventCatalog::default(), ValidatorOptions::default()),
        Err(AppError::InvalidTime(_))
    ));
}

#[test]
fn test_alternate_rule_set() {
    let mut map = BTreeMap::new();
    map.insert("In".to_string(), EventKind::new(true, false, true));
    map.insert("Out".to_string(), EventKind::new(false, true, false));
    let catalog = EventCatalog::new(map);

    let clean = DayRecord::from_pairs("01.03.24", &[("In", "08:00"), ("Out", "16:00")]);
    assert!(
        validate_day(&clean, &catalog, ValidatorOptions::default())
            .unwrap()
            .is_empty()
    );

    // the default labels are unknown to this rule set
    let czech = DayRecord::from_pairs("01.03.24", &[("Příchod", "08:00")]);
    assert!(validate_day(&czech, &catalog, ValidatorOptions::default()).is_err());
}

#[test]
fn test_validation_is_deterministic() {
    let day = DayRecord::from_pairs("01.03.24", &[("Odchod", "07:00"), ("Přestávka", "08:00")]);
    let catalog = EventCatalog::default();

    let a = validate_day(&day, &catalog, ValidatorOptions::default()).unwrap();
    let b = validate_day(&day, &catalog, ValidatorOptions::default()).unwrap();
    assert_eq!(a, b);
}
