use crate::schema::Schema;

/// The Coptic calendar.
///
/// Twelve 30-day months followed by a short thirteenth month holding the
/// five epagomenal days, six in leap years. A year is a leap year when
/// `year % 4 == 3`, so the cycle is the Julian one (1,461 days over 4
/// years) shifted by three years.
///
/// The epagomenal days are ordinary days of month 13, flagged via
/// [`is_supplementary_day`](Schema::is_supplementary_day); the sixth one
/// exists only in leap years and is also flagged via
/// [`is_intercalary_day`](Schema::is_intercalary_day).
///
/// Year 1 of this calendar (the era of Diocletian) begins on epoch day
/// 103,605, which is 0284-08-29 in the Julian calendar.
///
/// # Example
///
/// ```
/// use calends::schema::{Coptic, Schema};
///
/// assert_eq!(Coptic.days_in_month(3, 13), 6);
/// assert_eq!(Coptic.days_in_month(4, 13), 5);
/// assert!(Coptic.is_supplementary_day(3, 13, 5));
/// assert!(Coptic.is_intercalary_day(3, 13, 6));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Coptic;

#[inline]
fn is_leap(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

impl Schema for Coptic {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        13
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        if is_leap(year) {
            366
        } else {
            365
        }
    }

    #[inline]
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month < 13 {
            30
        } else if is_leap(year) {
            6
        } else {
            5
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 13 && day == 6
    }

    #[inline]
    fn is_supplementary_day(&self, _year: i32, month: i32, _day: i32) -> bool {
        month == 13
    }

    #[inline]
    fn epoch(&self) -> i64 {
        103_605
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        // Leap years are those congruent to 3 mod 4, so exactly
        // `floor(year / 4)` of the years before `year` are leap.
        let y = i64::from(year);
        365 * (y - 1) + y.div_euclid(4)
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        30 * (month - 1)
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let month = ((day_of_year - 1) / 30 + 1).min(13);
        (month, day_of_year - 30 * (month - 1))
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        13 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (1_461, 4)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (13, 1)
    }
}
