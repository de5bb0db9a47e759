use crate::schema::{gregorian_days_before_year, gregorian_is_leap, Schema};

/// Offset between this calendar's year numbering and the Gregorian one:
/// year 1 is Gregorian 1789.
const YEAR_OFFSET: i32 = 1_788;

/// The Positivist calendar (Comte, 1849).
///
/// Thirteen months of 28 days followed by a complementary day (the
/// Festival of the Dead) closing every year, and a second one (the
/// Festival of Holy Women) in leap years. Both are ordinary days of
/// month 13, flagged via
/// [`is_supplementary_day`](Schema::is_supplementary_day).
///
/// Year 1 corresponds to Gregorian 1789 and the leap rule is the
/// Gregorian rule under that shift, so year 1 begins on epoch day 653,055
/// (Gregorian 1789-01-01).
#[derive(Clone, Copy, Debug, Default)]
pub struct Positivist;

#[inline]
fn is_leap(year: i32) -> bool {
    gregorian_is_leap(year + YEAR_OFFSET)
}

impl Schema for Positivist {
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
            28
        } else if is_leap(year) {
            30
        } else {
            29
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 13 && day == 30
    }

    #[inline]
    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 13 && day >= 29
    }

    #[inline]
    fn epoch(&self) -> i64 {
        653_055
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        gregorian_days_before_year(year + YEAR_OFFSET)
            - gregorian_days_before_year(1 + YEAR_OFFSET)
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        28 * (month - 1)
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let month = ((day_of_year - 1) / 28 + 1).min(13);
        (month, day_of_year - 28 * (month - 1))
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        13 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (146_097, 400)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (13, 1)
    }
}
