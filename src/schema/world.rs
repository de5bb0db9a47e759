use crate::schema::{gregorian_days_before_year, gregorian_is_leap, Schema};

/// Cumulative days before each month, common years. Each quarter is
/// 31 + 30 + 30 = 91 days; December's Worldsday brings the total to 365.
const DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 61, 91, 122, 152, 182, 213, 243, 273, 304, 334];

/// The World calendar, a perennial quarter-based design.
///
/// Four identical quarters of 31 + 30 + 30 days, plus *Worldsday* appended
/// to December (its 31st day) every year, and *Leapyear Day* appended to
/// June (its 31st day) in leap years. Both are ordinary days of their
/// months here, flagged via
/// [`is_supplementary_day`](Schema::is_supplementary_day); outside the
/// week cycle in the original proposal, but the week is no concern of a
/// day-count schema. The leap rule is the Gregorian one, and year 1 begins
/// on epoch day 1, so the calendar stays aligned with Gregorian years.
#[derive(Clone, Copy, Debug, Default)]
pub struct World;

impl Schema for World {
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
        match month {
            12 => 31,
            6 if gregorian_is_leap(year) => 31,
            _ => {
                if month % 3 == 1 {
                    31
                } else {
                    30
                }
            }
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        gregorian_is_leap(year)
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 6 && day == 31
    }

    #[inline]
    fn is_supplementary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        (month == 12 || month == 6) && day == 31
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
        let mut days = DAYS_BEFORE_MONTH[(month - 1) as usize];
        if gregorian_is_leap(year) && month > 6 {
            days += 1;
        }
        days
    }

    #[inline]
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let mut doy = day_of_year;
        if gregorian_is_leap(year) {
            // Leapyear Day lands just past June's common 182-day prefix.
            if doy == 183 {
                return (6, 31);
            }
            if doy > 183 {
                doy -= 1;
            }
        }
        if doy == 365 {
            return (12, 31);
        }
        let month =
            DAYS_BEFORE_MONTH.partition_point(|&days| days < doy) as i32;
        (month, doy - DAYS_BEFORE_MONTH[(month - 1) as usize])
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
