use rattendance::core::calculator::{
    DEFAULT_DAILY_REQUIRED_HOURS, MAX_DAILY_REQUIRED_HOURS, check_daily_required_hours, evaluate,
    summarize, tally,
};
use rattendance::errors::AppError;
use rattendance::models::summary::MonthOutcome;
use rattendance::models::worked::WorkedTimeEntry;

/// 15 logged days of 6h40m: 100h00m in total.
fn fifteen_days_hundred_hours() -> Vec<WorkedTimeEntry> {
    vec![WorkedTimeEntry::new(6, 40); 15]
}

#[test]
fn test_summarize_reference_month() {
    let entries = fifteen_days_hundred_hours();
    let s = summarize(&entries, 20, DEFAULT_DAILY_REQUIRED_HOURS).unwrap();

    assert_eq!(s.required_minutes_total, 9600);
    assert_eq!(s.worked_minutes_total, 6000);
    assert_eq!(s.remaining_minutes, 3600);
    assert_eq!(s.logged_days, 15);
    assert_eq!(s.days_without_entry, 5);
    assert_eq!(s.required_minutes_per_remaining_day, 720.0);
    assert_eq!(s.quota_minutes(), 720);
}

#[test]
fn test_zero_entries_are_not_logged_days() {
    let mut entries = vec![WorkedTimeEntry::new(8, 0), WorkedTimeEntry::new(7, 45)];
    entries.extend(vec![WorkedTimeEntry::default(); 3]);

    let t = tally(&entries, 10, 8).unwrap();
    assert_eq!(t.logged_days, 2);
    assert_eq!(t.days_without_entry, 8);
    assert_eq!(t.worked_minutes_total, 8 * 60 + 7 * 60 + 45);
}

#[test]
fn test_overtime_is_negative_remaining() {
    let entries = vec![WorkedTimeEntry::new(12, 0); 3];
    let s = summarize(&entries, 4, 8).unwrap();

    assert_eq!(s.required_minutes_total, 4 * 8 * 60);
    assert_eq!(s.worked_minutes_total, 2160);
    assert_eq!(s.remaining_minutes, -240);
    assert_eq!(s.days_without_entry, 1);
    assert_eq!(s.required_minutes_per_remaining_day, -240.0);
}

#[test]
fn test_fractional_quota_truncates_for_display() {
    let entries = vec![WorkedTimeEntry::new(8, 0)];
    // 4 × 8h = 1920 required, 480 worked, 1440 left over 3 days
    let s = summarize(&entries, 4, 8).unwrap();
    assert_eq!(s.remaining_minutes, 1440);
    assert_eq!(s.required_minutes_per_remaining_day, 480.0);

    let s = summarize(&[WorkedTimeEntry::new(0, 1)], 4, 8).unwrap();
    // (1920 - 1) / 3 = 639.666…
    assert!((s.required_minutes_per_remaining_day - 639.666).abs() < 0.001);
    assert_eq!(s.quota_minutes(), 639);
}

#[test]
fn test_no_remaining_days_is_guarded() {
    let entries = vec![WorkedTimeEntry::new(8, 0); 3];

    assert!(matches!(
        summarize(&entries, 3, 8),
        Err(AppError::NoRemainingDays)
    ));

    // more logged days than working days is guarded as well
    assert!(matches!(
        summarize(&entries, 2, 8),
        Err(AppError::NoRemainingDays)
    ));

    match evaluate(&entries, 3, 8) {
        MonthOutcome::NoRemainingDays(t) => {
            assert_eq!(t.days_without_entry, 0);
            assert_eq!(t.remaining_minutes, 0);
        }
        other => panic!("expected NoRemainingDays, got {other:?}"),
    }
}

#[test]
fn test_required_hours_out_of_range_are_rejected() {
    assert!(matches!(
        tally(&[], 2, i64::MAX),
        Err(AppError::InvalidRequiredHours(i64::MAX))
    ));
    assert!(matches!(
        summarize(&[], 2, MAX_DAILY_REQUIRED_HOURS + 1),
        Err(AppError::InvalidRequiredHours(25))
    ));
    assert!(matches!(
        tally(&[], 2, 0),
        Err(AppError::InvalidRequiredHours(0))
    ));
    assert_eq!(check_daily_required_hours(24).unwrap(), 24);
    assert_eq!(
        tally(&[], 2, MAX_DAILY_REQUIRED_HOURS)
            .unwrap()
            .required_minutes_total,
        2 * 24 * 60
    );
}

#[test]
fn test_huge_day_count_does_not_overflow() {
    assert!(tally(&[], i64::MAX, 8).is_err());
    assert!(summarize(&[], i64::MAX, 8).is_err());
}

#[test]
fn test_evaluate_reports_bad_hours_as_unavailable() {
    match evaluate(&[WorkedTimeEntry::new(8, 0)], 3, i64::MAX) {
        MonthOutcome::Unavailable { error } => {
            assert!(error.contains("between 1 and 24"), "{error}")
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn test_summarize_is_pure() {
    let entries = fifteen_days_hundred_hours();
    let a = summarize(&entries, 20, 8).unwrap();
    let b = summarize(&entries, 20, 8).unwrap();
    assert_eq!(a, b);
    assert_eq!(evaluate(&entries, 20, 8), MonthOutcome::Quota(a));
}

#[test]
fn test_worked_label_parsing() {
    assert_eq!(
        WorkedTimeEntry::parse("worked: 7:30").unwrap(),
        WorkedTimeEntry::new(7, 30)
    );
    assert_eq!(
        WorkedTimeEntry::parse("Odpracováno 08:05").unwrap(),
        WorkedTimeEntry::new(8, 5)
    );
    assert_eq!(
        WorkedTimeEntry::parse("0:00").unwrap(),
        WorkedTimeEntry::default()
    );
    assert!(WorkedTimeEntry::parse("0:00").unwrap().is_zero());

    for bad in ["", "worked", "7h30", "7:75", "1234:30", "worked 1234:30"] {
        assert!(
            matches!(
                WorkedTimeEntry::parse(bad),
                Err(AppError::InvalidWorkedTime(_))
            ),
            "{bad:?} should not parse"
        );
    }
}
