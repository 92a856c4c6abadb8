//! Benchmarks for the range queries.
//!
//! Run with: cargo bench -p busday-calendar

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use busday_calendar::{count, offset, roll, CalendarSpec, Date, RollPolicy, WeekPattern};

// =============================================================================
// TEST DATA
// =============================================================================

/// Monday–Friday with three fixed holidays a year over two centuries.
fn holiday_calendar() -> CalendarSpec {
    let mut holidays = Vec::new();
    for year in 1900..2100 {
        for (m, d) in [(1, 1), (7, 4), (12, 25)] {
            holidays.push(Date::from_ymd(year, m, d).unwrap());
        }
    }
    CalendarSpec::new(WeekPattern::MONDAY_TO_FRIDAY, holidays)
}

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_count(c: &mut Criterion) {
    let cal = holiday_calendar();
    let begin = date(2000, 1, 1);
    let mut group = c.benchmark_group("count");
    for years in [1, 10, 99] {
        let end = date(2000 + years, 1, 1);
        group.bench_with_input(BenchmarkId::from_parameter(years), &end, |b, &end| {
            b.iter(|| count(black_box(&cal), black_box(begin), black_box(end)))
        });
    }
    group.finish();
}

fn bench_offset(c: &mut Criterion) {
    let cal = holiday_calendar();
    let start = date(2000, 1, 3);
    let mut group = c.benchmark_group("offset");
    for n in [5, 250, 20_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| offset(black_box(&cal), black_box(start), black_box(n), RollPolicy::Forward))
        });
    }
    group.finish();
}

fn bench_roll(c: &mut Criterion) {
    let cal = holiday_calendar();
    let christmas_eve = date(2050, 12, 24);
    c.bench_function("roll_forward_over_holiday", |b| {
        b.iter(|| roll(black_box(&cal), black_box(christmas_eve), RollPolicy::Forward))
    });
}

criterion_group!(queries, bench_count, bench_offset, bench_roll);
criterion_main!(queries);
