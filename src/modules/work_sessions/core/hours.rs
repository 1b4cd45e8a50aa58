// Elapsed-time arithmetic for work sessions.
//
// Hours are the exact millisecond difference divided by 3_600_000. Closing a
// session rounds half-up to two decimals; live durations stay unrounded.

use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod hours_tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rstest::rstest;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[rstest]
    fn it_should_compute_exact_hours_from_milliseconds() {
        let start = at(9, 0);
        let end = start + TimeDelta::milliseconds(5_400_000);
        assert_eq!(elapsed_hours(start, end), 1.5);
    }

    #[rstest]
    fn it_should_not_depend_on_the_calendar_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 23, 50, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 0, 10, 0).unwrap();
        assert_eq!(round_hours(elapsed_hours(start, end)), 0.33);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.333_333, 0.33)]
    #[case(0.666_666, 0.67)]
    #[case(1.125, 1.13)]
    #[case(7.999, 8.0)]
    fn it_should_round_half_up_to_two_decimals(#[case] hours: f64, #[case] expected: f64) {
        assert_eq!(round_hours(hours), expected);
    }
}
