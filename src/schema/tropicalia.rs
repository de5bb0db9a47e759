/*!
The Tropicália family of reform calendars.

All three variants share the same leap rule: every fourth year is a leap
year, except years divisible by 128. That yields 31 leap years per 128-year
cycle (46,751 days) and a mean year of 365.2421875 days, closer to the
tropical year than the Gregorian mean. They differ only in how the year is
cut into months.
*/

use crate::schema::{
    gregorian_days_before_month, gregorian_days_in_month,
    gregorian_month_day, Schema,
};

#[inline]
fn is_leap(year: i32) -> bool {
    year.rem_euclid(4) == 0 && year.rem_euclid(128) != 0
}

#[inline]
fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(128)
}

/// The Tropicália calendar: Gregorian month shapes on a 128-year cycle.
///
/// February has 29 days in leap years, exactly as in the Gregorian
/// calendar; only the leap rule differs. Year 1 starts on epoch day 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tropicalia;

impl Schema for Tropicalia {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
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
        gregorian_days_in_month(is_leap(year), month)
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
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
        days_before_year(year)
    }

    #[inline]
    fn days_before_month(&self, year: i32, month: i32) -> i32 {
        gregorian_days_before_month(is_leap(year), month)
    }

    #[inline]
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        gregorian_month_day(is_leap(year), day_of_year)
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (46_751, 128)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}

/// The Tropicália 30-31 variant: months alternate 30 and 31 days.
///
/// Odd months have 30 days and even months 31, except the twelfth month,
/// which has 30 days in common years. The intercalary day is the 31st of
/// the twelfth month.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tropicalia3031;

impl Schema for Tropicalia3031 {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
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
        if month == 12 {
            if is_leap(year) {
                31
            } else {
                30
            }
        } else if month % 2 == 1 {
            30
        } else {
            31
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day == 31
    }

    #[inline]
    fn epoch(&self) -> i64 {
        1
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        days_before_year(year)
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        // Whole 61-day month pairs, plus 30 for an even month.
        let m = month - 1;
        61 * (m / 2) + 30 * (m % 2)
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let d = day_of_year - 1;
        let (pair, within) = (d / 61, d % 61);
        if within < 30 {
            (2 * pair + 1, within + 1)
        } else {
            (2 * pair + 2, within - 29)
        }
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (46_751, 128)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}

/// The Tropicália 31-30 variant: months alternate 31 and 30 days.
///
/// Odd months have 31 days and even months 30, except the twelfth month,
/// which has 29 days in common years. The intercalary day is the 30th of
/// the twelfth month.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tropicalia3130;

impl Schema for Tropicalia3130 {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
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
        if month == 12 {
            if is_leap(year) {
                30
            } else {
                29
            }
        } else if month % 2 == 1 {
            31
        } else {
            30
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
        1
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        days_before_year(year)
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        let m = month - 1;
        61 * (m / 2) + 31 * (m % 2)
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let d = day_of_year - 1;
        let (pair, within) = (d / 61, d % 61);
        if within < 31 {
            (2 * pair + 1, within + 1)
        } else {
            (2 * pair + 2, within - 30)
        }
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (46_751, 128)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::tests::{check_schema_cycle, check_schema_laws};

    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(4));
        assert!(is_leap(124));
        assert!(!is_leap(128));
        assert!(!is_leap(256));
        assert!(is_leap(132));
        assert!(!is_leap(0));
        assert!(is_leap(-4));
        assert!(!is_leap(-128));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(Tropicalia.days_in_year(4), 366);
        assert_eq!(Tropicalia3031.days_in_year(128), 365);
        assert_eq!(Tropicalia3130.days_in_year(4), 366);
    }

    #[test]
    fn schema_laws() {
        // A window straddling year 1 plus the 128-year cycle boundary.
        check_schema_laws(&Tropicalia, -140..140);
        check_schema_laws(&Tropicalia3031, -140..140);
        check_schema_laws(&Tropicalia3130, -140..140);
        check_schema_cycle(&Tropicalia);
        check_schema_cycle(&Tropicalia3031);
        check_schema_cycle(&Tropicalia3130);
    }

    #[test]
    fn variant_month_shapes() {
        assert_eq!(Tropicalia3031.days_in_month(1, 1), 30);
        assert_eq!(Tropicalia3031.days_in_month(1, 2), 31);
        assert_eq!(Tropicalia3031.days_in_month(1, 12), 30);
        assert_eq!(Tropicalia3031.days_in_month(4, 12), 31);

        assert_eq!(Tropicalia3130.days_in_month(1, 1), 31);
        assert_eq!(Tropicalia3130.days_in_month(1, 2), 30);
        assert_eq!(Tropicalia3130.days_in_month(1, 12), 29);
        assert_eq!(Tropicalia3130.days_in_month(4, 12), 30);
    }
}
