//! Integration tests for classification, rolling, offsetting and counting.
//!
//! Scenario dates follow a Monday–Friday week in mid-2025 unless stated.

use busday_calendar::{count, is_business_day, offset, roll, CalendarSpec, Date, RollPolicy, WeekPattern};
use busday_core::Error;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn mon_fri() -> CalendarSpec {
    CalendarSpec::try_new(&[true, true, true, true, true, false, false], []).unwrap()
}

/// Brute-force count used as a reference for the closed form.
fn naive_count(cal: &CalendarSpec, begin: Date, end: Date) -> i32 {
    let (lo, hi, sign) = if begin <= end { (begin, end, 1) } else { (end, begin, -1) };
    let mut n = 0;
    let mut d = lo;
    while d < hi {
        if cal.is_business_day(d) {
            n += 1;
        }
        d += 1;
    }
    sign * n
}

// ─── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn saturday_is_not_a_business_day() {
    assert!(!is_business_day(&mon_fri(), date(2025, 6, 14)));
}

#[test]
fn saturday_rolls_to_monday_or_friday() {
    let cal = mon_fri();
    assert_eq!(roll(&cal, date(2025, 6, 14), RollPolicy::Forward).unwrap(), date(2025, 6, 16));
    assert_eq!(roll(&cal, date(2025, 6, 14), RollPolicy::Backward).unwrap(), date(2025, 6, 13));
}

#[test]
fn week_count_is_five() {
    assert_eq!(count(&mon_fri(), date(2025, 6, 9), date(2025, 6, 16)), 5);
}

#[test]
fn offset_skips_independence_day_and_weekend() {
    let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [date(2025, 7, 4)]);
    assert_eq!(offset(&cal, date(2025, 7, 3), 1, RollPolicy::Raise).unwrap(), date(2025, 7, 7));
}

// ─── Construction ─────────────────────────────────────────────────────────────

#[test]
fn malformed_week_pattern_is_rejected() {
    for len in [0, 1, 6, 8] {
        let flags = vec![true; len];
        assert!(
            matches!(CalendarSpec::try_new(&flags, []), Err(Error::InvalidCalendar(_))),
            "length {len} accepted"
        );
    }
}

#[test]
fn holiday_on_excluded_weekday_is_a_noop() {
    let with = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [date(2025, 6, 14)]);
    assert_eq!(with, mon_fri());
}

#[test]
fn calendar_is_shareable_across_threads() {
    let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [date(2025, 7, 4)]);
    let results: Vec<i32> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cal = &cal;
                s.spawn(move || count(cal, date(2025, 1 + i, 1), date(2025, 12, 31)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results[0], naive_count(&cal, date(2025, 1, 1), date(2025, 12, 31)));
    assert!(results.windows(2).all(|w| w[0] > w[1]));
}

// ─── Rolling ──────────────────────────────────────────────────────────────────

#[test]
fn modified_policies_respect_month_end() {
    let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, [date(2025, 10, 31)]);
    // Friday Oct 31 is a holiday; following lands on Nov 3.
    assert_eq!(
        roll(&cal, date(2025, 10, 31), RollPolicy::ModifiedFollowing).unwrap(),
        date(2025, 10, 30)
    );
    assert_eq!(
        roll(&cal, date(2025, 10, 31), RollPolicy::Forward).unwrap(),
        date(2025, 11, 3)
    );
    // Saturday Nov 1: preceding is Oct 30, so modified preceding goes forward.
    assert_eq!(
        roll(&cal, date(2025, 11, 1), RollPolicy::ModifiedPreceding).unwrap(),
        date(2025, 11, 3)
    );
}

#[test]
fn all_holiday_weekdays_still_terminate() {
    // Every eligible day of a whole year is a holiday.
    let mut holidays = Vec::new();
    let mut d = date(2025, 1, 1);
    while d < date(2026, 1, 1) {
        holidays.push(d);
        d += 1;
    }
    let cal = CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, holidays);
    assert_eq!(roll(&cal, date(2025, 6, 14), RollPolicy::Forward).unwrap(), date(2026, 1, 1));
    assert_eq!(roll(&cal, date(2025, 6, 14), RollPolicy::Backward).unwrap(), date(2024, 12, 31));
    assert_eq!(count(&cal, date(2025, 1, 1), date(2026, 1, 1)), 0);
}

#[test]
fn degenerate_calendar() {
    let cal = CalendarSpec::try_new(&[false; 7], []).unwrap();
    assert!(matches!(
        roll(&cal, date(2025, 6, 16), RollPolicy::Forward),
        Err(Error::NoBusinessDayReachable { .. })
    ));
    assert!(matches!(
        offset(&cal, date(2025, 6, 16), 3, RollPolicy::Backward),
        Err(Error::NoBusinessDayReachable { .. })
    ));
    assert_eq!(count(&cal, date(2025, 6, 16), date(2026, 6, 16)), 0);
}

// ─── Offsets ──────────────────────────────────────────────────────────────────

#[test]
fn offset_matches_single_steps() {
    let cal = CalendarSpec::new(
        "Sun Mon Tue Wed Thu".parse().unwrap(),
        [date(2025, 3, 30), date(2025, 3, 31), date(2025, 4, 1), date(2025, 6, 5)],
    );
    let start = date(2025, 3, 2);
    assert!(cal.is_business_day(start));
    let mut stepped = start;
    for n in 1..=120 {
        stepped += 1;
        while !cal.is_business_day(stepped) {
            stepped += 1;
        }
        assert_eq!(offset(&cal, start, n, RollPolicy::Raise).unwrap(), stepped, "n = {n}");
    }
}

#[test]
fn negative_offset_from_rolled_date() {
    let cal = mon_fri();
    // Backward roll of Sunday is Friday; one business day earlier is Thursday.
    assert_eq!(
        offset(&cal, date(2025, 6, 15), -1, RollPolicy::Backward).unwrap(),
        date(2025, 6, 12)
    );
}

// ─── Counting ─────────────────────────────────────────────────────────────────

#[test]
fn count_matches_brute_force() {
    let cal = CalendarSpec::new(
        "1011101".parse().unwrap(),
        [date(2024, 2, 29), date(2024, 12, 25), date(2025, 1, 1), date(2025, 5, 1)],
    );
    let base = date(2024, 12, 20);
    for a in -20..20 {
        for b in [-400, -31, -7, -1, 0, 1, 6, 7, 8, 13, 200] {
            let (x, y) = (base + a, base + a + b);
            assert_eq!(count(&cal, x, y), naive_count(&cal, x, y), "[{x}, {y})");
        }
    }
}

#[test]
fn count_over_long_span() {
    let cal = CalendarSpec::new(
        WeekPattern::MONDAY_TO_FRIDAY,
        [date(2025, 1, 1), date(2025, 7, 4), date(2025, 12, 25)],
    );
    assert_eq!(count(&cal, date(2000, 1, 1), date(2030, 1, 1)), 7823);
    assert_eq!(count(&mon_fri(), date(2000, 1, 1), date(2030, 1, 1)), 7826);
}
