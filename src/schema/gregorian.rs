use crate::schema::{
    gregorian_days_before_month, gregorian_days_before_year,
    gregorian_days_in_month, gregorian_is_leap, gregorian_month_day, Schema,
};

/// The proleptic Gregorian calendar.
///
/// Twelve months, February gaining a 29th day in leap years. A year is a
/// leap year when it is divisible by 4, except century years not divisible
/// by 400. The full cycle is 400 years of 146,097 days.
///
/// This schema's year 1 starts on epoch day 1; it *defines* the epoch that
/// every other schema's [`epoch`](Schema::epoch) is expressed against.
///
/// # Example
///
/// ```
/// use calends::schema::{Gregorian, Schema};
///
/// assert!(Gregorian.is_leap_year(2000));
/// assert!(!Gregorian.is_leap_year(1900));
/// assert_eq!(Gregorian.days_in_month(2024, 2), 29);
/// assert_eq!(Gregorian.days_in_month(2025, 2), 28);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Gregorian;

impl Schema for Gregorian {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        if gregorian_is_leap(year) {
            366
        } else {
            365
        }
    }

    #[inline]
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        gregorian_days_in_month(gregorian_is_leap(year), month)
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        gregorian_is_leap(year)
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 2 && day == 29
    }

    #[inline]
    fn epoch(&self) -> i64 {
        1
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        gregorian_days_before_year(year)
    }

    #[inline]
    fn days_before_month(&self, year: i32, month: i32) -> i32 {
        gregorian_days_before_month(gregorian_is_leap(year), month)
    }

    #[inline]
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        gregorian_month_day(gregorian_is_leap(year), day_of_year)
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (146_097, 400)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}
