use crate::schema::Schema;

/// The tabular Islamic calendar.
///
/// A purely lunar calendar: twelve months alternating 30 and 29 days, with
/// the last month stretched to 30 days in leap years. Leap years are the
/// eleven years `y` of each 30-year cycle with `(11 y + 14) mod 30 < 11`
/// (the most common of the tabular leap patterns), giving a cycle of
/// 10,631 days and a mean month extremely close to the synodic month.
///
/// This is the arithmetic approximation used for civil reckoning; the
/// observational calendar it approximates is determined by actual crescent
/// sightings and is out of scope here.
///
/// Year 1 begins on epoch day 227,015, which is 0622-07-16 in the Julian
/// calendar.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabularIslamic;

#[inline]
fn is_leap(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(30) < 11
}

impl Schema for TabularIslamic {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        if is_leap(year) {
            355
        } else {
            354
        }
    }

    #[inline]
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 && is_leap(year) {
            30
        } else if month % 2 == 1 {
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
        month == 12 && day == 30
    }

    #[inline]
    fn epoch(&self) -> i64 {
        227_015
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        // `floor((3 + 11 y) / 30)` counts the leap years among `1..year`.
        let y = i64::from(year);
        354 * (y - 1) + (3 + 11 * y).div_euclid(30)
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        // Alternating 30/29 collapses to this closed form.
        29 * (month - 1) + month / 2
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        // Invert the 59-day month pairs; day 355 of a leap year still
        // belongs to month 12.
        let month = ((2 * (day_of_year - 1)) / 59 + 1).min(12);
        (month, day_of_year - (29 * (month - 1) + month / 2))
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (10_631, 30)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}
