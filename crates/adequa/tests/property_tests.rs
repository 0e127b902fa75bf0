//! Property-based tests for period resolution.
//!
//! These use proptest to generate random period specifications and verify the
//! resolver's invariants: resolved windows are always ordered, defaulted ends
//! never exceed the dataset ceiling, and resolution never panics on arbitrary
//! input.

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

use adequa::period::{PeriodBounds, resolve};

const EPOCH: (i32, u32, u32) = (2020, 1, 1);

fn day(offset: i64) -> NaiveDate {
    let (y, m, d) = EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).unwrap() + Duration::days(offset)
}

fn bounds(ceiling_offset: i64, window_days: i64) -> PeriodBounds {
    PeriodBounds::new("%Y-%m-%d", day(ceiling_offset), window_days)
}

proptest! {
    /// A defaulted end is exactly `min(ceiling, start + window)` and never
    /// exceeds the ceiling.
    #[test]
    fn default_end_never_exceeds_ceiling(
        start_offset in 0i64..20_000,
        ceiling_offset in 0i64..20_000,
        window_days in 1i64..365,
    ) {
        let bounds = bounds(ceiling_offset, window_days);
        let start = day(start_offset).format("%Y-%m-%d").to_string();

        let resolution = resolve(Some(&start), None, &bounds).unwrap();
        prop_assert!(resolution.period.end <= bounds.max_date);

        let expected = bounds
            .max_date
            .min(day(start_offset).and_time(NaiveTime::MIN) + Duration::days(window_days));
        prop_assert_eq!(resolution.period.end, expected);
    }

    /// An explicit range resolves iff the end is strictly after the start,
    /// and the parsed window reproduces the inputs exactly.
    #[test]
    fn explicit_range_is_strictly_ordered(
        start_offset in 0i64..20_000,
        end_offset in 0i64..20_000,
    ) {
        let bounds = bounds(30_000, 7);
        let start = day(start_offset).format("%Y-%m-%d").to_string();
        let end = day(end_offset).format("%Y-%m-%d").to_string();

        let result = resolve(Some(&start), Some(&end), &bounds);
        if end_offset > start_offset {
            let resolution = result.unwrap();
            prop_assert_eq!(resolution.period.start, day(start_offset).and_time(NaiveTime::MIN));
            prop_assert_eq!(resolution.period.end, day(end_offset).and_time(NaiveTime::MIN));
            prop_assert!(resolution.period.start < resolution.period.end);
        } else {
            let err = result.unwrap_err();
            prop_assert!(err.is_fatal());
        }
    }

    /// Without a start, any end string is discarded with a warning and the
    /// template window wins; the end is never even parsed.
    #[test]
    fn missing_start_discards_any_end(end in "[ -~]{0,30}") {
        let resolution = resolve(None, Some(&end), &bounds(20_000, 7)).unwrap();
        prop_assert_eq!(
            resolution.period.start,
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().and_time(NaiveTime::MIN)
        );
        prop_assert_eq!(
            resolution.period.end,
            NaiveDate::from_ymd_opt(1900, 12, 1).unwrap().and_time(NaiveTime::MIN)
        );
        prop_assert_eq!(resolution.warnings.len(), 1);
    }

    /// Arbitrary garbage never panics: it either resolves or returns an error.
    #[test]
    fn resolver_never_panics(
        start in proptest::option::of("[ -~]{0,30}"),
        end in proptest::option::of("[ -~]{0,30}"),
    ) {
        let _ = resolve(start.as_deref(), end.as_deref(), &bounds(20_000, 7));
    }
}
