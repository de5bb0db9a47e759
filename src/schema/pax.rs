use crate::schema::Schema;

/// Days per 400-year cycle: 329 common years of 364 days and 71 leap-week
/// years of 371. Deliberately equal to the Gregorian cycle total, so the
/// two calendars drift apart within a cycle but realign every 400 years.
const DAYS_PER_CYCLE: i64 = 329 * 364 + 71 * 371;

/// Months per 400-year cycle: thirteen regular months per year plus one
/// leap-week month per leap year.
const MONTHS_PER_CYCLE: i64 = 13 * 400 + 71;

/// The Pax calendar, a perennial leap-week design.
///
/// Thirteen months of exactly 28 days make a 364-day year of whole weeks.
/// Leap years insert a one-week month (*Pax*) as month 13, pushing the
/// final month to position 14 and the year to 371 days. A year is a leap
/// year when its last two digits are divisible by 6 or equal to 99; for
/// century years (last two digits 00) the rule inverts and only those
/// *not* divisible by 400 qualify. That places 71 leap weeks in 400 years.
///
/// Because the month count varies, this schema is the stress test for the
/// kernel's flattened-month arithmetic. Like the other cycle schemas it
/// carries per-cycle leap, day and month tables, computed at construction.
///
/// Year 1 begins on epoch day 1.
///
/// # Example
///
/// ```
/// use calends::schema::{Pax, Schema};
///
/// let schema = Pax::new();
/// assert_eq!(schema.months_in_year(5), 13);
/// assert_eq!(schema.months_in_year(6), 14);
/// assert_eq!(schema.days_in_month(6, 13), 7);
/// assert_eq!(schema.days_in_month(6, 14), 28);
/// ```
#[derive(Clone)]
pub struct Pax {
    /// Leap status of each cycle position.
    leap: [bool; 400],
    /// Days before each cycle year, within the cycle.
    day_prefix: [i32; 400],
    /// Months before each cycle year, within the cycle.
    month_prefix: [i32; 400],
}

#[inline]
fn year_is_leap(year: i32) -> bool {
    let r = year.rem_euclid(100);
    if r == 0 {
        year.rem_euclid(400) != 0
    } else {
        r % 6 == 0 || r == 99
    }
}

impl Pax {
    /// Creates the schema, computing its 400-year cycle tables.
    ///
    /// # Panics
    ///
    /// Panics if the generated tables are internally inconsistent (leap
    /// week count or day total not matching the documented cycle
    /// constants). That would be a bug in this crate, not a user error.
    pub fn new() -> Pax {
        let mut leap = [false; 400];
        let mut day_prefix = [0i32; 400];
        let mut month_prefix = [0i32; 400];
        let (mut days, mut months) = (0i32, 0i32);
        for pos in 0..400 {
            day_prefix[pos] = days;
            month_prefix[pos] = months;
            leap[pos] = year_is_leap(pos as i32 + 1);
            days += if leap[pos] { 371 } else { 364 };
            months += if leap[pos] { 14 } else { 13 };
        }
        assert_eq!(i64::from(days), DAYS_PER_CYCLE);
        assert_eq!(i64::from(months), MONTHS_PER_CYCLE);
        trace!("built pax cycle tables: {} leap weeks per cycle", {
            MONTHS_PER_CYCLE - 13 * 400
        });
        Pax { leap, day_prefix, month_prefix }
    }

    #[inline]
    fn cycle_position(&self, year: i32) -> (i64, usize) {
        let offset = i64::from(year) - 1;
        (offset.div_euclid(400), offset.rem_euclid(400) as usize)
    }
}

impl Default for Pax {
    fn default() -> Pax {
        Pax::new()
    }
}

impl core::fmt::Debug for Pax {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("Pax")
    }
}

impl Schema for Pax {
    #[inline]
    fn months_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) {
            14
        } else {
            13
        }
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) {
            371
        } else {
            364
        }
    }

    #[inline]
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 13 && self.is_leap_year(year) {
            7
        } else {
            28
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        let (_, pos) = self.cycle_position(year);
        self.leap[pos]
    }

    #[inline]
    fn is_intercalary_day(&self, year: i32, month: i32, _day: i32) -> bool {
        // The whole leap-week month is intercalary.
        month == 13 && self.is_leap_year(year)
    }

    #[inline]
    fn epoch(&self) -> i64 {
        1
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        let (cycles, pos) = self.cycle_position(year);
        cycles * DAYS_PER_CYCLE + i64::from(self.day_prefix[pos])
    }

    #[inline]
    fn days_before_month(&self, year: i32, month: i32) -> i32 {
        if month == 14 {
            // Only reachable in leap years: twelve regular months plus
            // the seven-day Pax month.
            12 * 28 + 7
        } else {
            28 * (month - 1)
        }
    }

    #[inline]
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        if self.is_leap_year(year) && day_of_year > 336 {
            if day_of_year <= 343 {
                (13, day_of_year - 336)
            } else {
                (14, day_of_year - 343)
            }
        } else {
            let month = ((day_of_year - 1) / 28 + 1).min(13);
            (month, day_of_year - 28 * (month - 1))
        }
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        let (cycles, pos) = self.cycle_position(year);
        cycles * MONTHS_PER_CYCLE + i64::from(self.month_prefix[pos])
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (DAYS_PER_CYCLE, 400)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (MONTHS_PER_CYCLE, 400)
    }
}
