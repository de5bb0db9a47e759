use crate::schema::Schema;

/// Days per 19-year cycle: twelve common years of 354 days and seven
/// embolismic years of 384.
const DAYS_PER_CYCLE: i64 = 12 * 354 + 7 * 384;

/// Months per 19-year cycle: the classic 235 Metonic lunations.
const MONTHS_PER_CYCLE: i64 = 12 * 12 + 7 * 13;

/// A schematic lunisolar calendar on the 19-year Metonic cycle.
///
/// Twelve months alternating 30 and 29 days make a 354-day common year;
/// seven years out of every nineteen are *embolismic* and append a whole
/// thirteenth month of 30 days, keeping the calendar aligned with both the
/// lunation and the solar year. The embolismic years are those `y` with
/// `(7 y + 1) mod 19 < 7`, which spaces them 3, 6, 8, 11, 14, 17 and 19
/// years into the cycle.
///
/// Unlike the closed-form schemas, this one carries its cycle tables:
/// year lengths and day/month prefix sums over one 19-year cycle, computed
/// once at construction from the embolismic rule. Locating a year is then
/// modular arithmetic plus one table lookup.
///
/// Year 1 begins on epoch day 1.
///
/// # Example
///
/// ```
/// use calends::schema::{Lunisolar, Schema};
///
/// let schema = Lunisolar::new();
/// assert_eq!(schema.months_in_year(2), 12);
/// assert_eq!(schema.months_in_year(3), 13);
/// assert_eq!(schema.days_in_year(3), 384);
/// ```
#[derive(Clone, Debug)]
pub struct Lunisolar {
    /// Length in days of each year of the cycle, indexed by
    /// `(year - 1).rem_euclid(19)`.
    year_len: [i32; 19],
    /// Days before each cycle year, within the cycle.
    day_prefix: [i32; 19],
    /// Months before each cycle year, within the cycle.
    month_prefix: [i32; 19],
}

#[inline]
fn is_embolismic(cycle_year: i32) -> bool {
    (7 * cycle_year + 1).rem_euclid(19) < 7
}

impl Lunisolar {
    /// Creates the schema, computing its 19-year cycle tables.
    ///
    /// # Panics
    ///
    /// Panics if the generated tables are internally inconsistent (their
    /// sums not matching the documented cycle totals). That would be a bug
    /// in this crate, not a user error.
    pub fn new() -> Lunisolar {
        let mut year_len = [0i32; 19];
        let mut day_prefix = [0i32; 19];
        let mut month_prefix = [0i32; 19];
        let (mut days, mut months) = (0i32, 0i32);
        for pos in 0..19 {
            day_prefix[pos] = days;
            month_prefix[pos] = months;
            let embolismic = is_embolismic(pos as i32 + 1);
            year_len[pos] = if embolismic { 384 } else { 354 };
            days += year_len[pos];
            months += if embolismic { 13 } else { 12 };
        }
        assert_eq!(i64::from(days), DAYS_PER_CYCLE);
        assert_eq!(i64::from(months), MONTHS_PER_CYCLE);
        trace!("built lunisolar cycle tables: {year_len:?}");
        Lunisolar { year_len, day_prefix, month_prefix }
    }

    /// The position of `year` within the 19-year cycle, along with the
    /// number of whole cycles before it.
    #[inline]
    fn cycle_position(&self, year: i32) -> (i64, usize) {
        let offset = i64::from(year) - 1;
        (offset.div_euclid(19), offset.rem_euclid(19) as usize)
    }
}

impl Default for Lunisolar {
    fn default() -> Lunisolar {
        Lunisolar::new()
    }
}

impl Schema for Lunisolar {
    #[inline]
    fn months_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) {
            13
        } else {
            12
        }
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        let (_, pos) = self.cycle_position(year);
        self.year_len[pos]
    }

    #[inline]
    fn days_in_month(&self, _year: i32, month: i32) -> i32 {
        // Months 1..=12 alternate 30/29; the embolismic month 13 has 30.
        if month == 13 || month % 2 == 1 {
            30
        } else {
            29
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        let (_, pos) = self.cycle_position(year);
        self.year_len[pos] == 384
    }

    #[inline]
    fn is_intercalary_day(&self, year: i32, month: i32, _day: i32) -> bool {
        // The whole embolismic month is intercalary.
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
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        29 * (month - 1) + month / 2
    }

    #[inline]
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        let cap = self.months_in_year(year);
        let month = ((2 * (day_of_year - 1)) / 59 + 1).min(cap);
        (month, day_of_year - (29 * (month - 1) + month / 2))
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        let (cycles, pos) = self.cycle_position(year);
        cycles * MONTHS_PER_CYCLE + i64::from(self.month_prefix[pos])
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (DAYS_PER_CYCLE, 19)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (MONTHS_PER_CYCLE, 19)
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::tests::{check_schema_cycle, check_schema_laws};

    use super::*;

    #[test]
    fn embolismic_pattern() {
        let schema = Lunisolar::new();
        let leap_years: std::vec::Vec<i32> =
            (1..=19).filter(|&y| schema.is_leap_year(y)).collect();
        assert_eq!(leap_years, [3, 6, 8, 11, 14, 17, 19]);
        // The pattern repeats in both directions.
        assert!(schema.is_leap_year(22));
        assert!(schema.is_leap_year(-13)); // cycle year 6
        assert!(!schema.is_leap_year(20));
    }

    #[test]
    fn month_lengths() {
        let schema = Lunisolar::new();
        assert_eq!(schema.days_in_month(1, 1), 30);
        assert_eq!(schema.days_in_month(1, 2), 29);
        assert_eq!(schema.days_in_month(1, 12), 29);
        assert_eq!(schema.days_in_month(3, 13), 30);
    }

    #[test]
    fn intercalary_month() {
        let schema = Lunisolar::new();
        assert!(schema.is_intercalary_day(3, 13, 1));
        assert!(schema.is_intercalary_day(3, 13, 30));
        assert!(!schema.is_intercalary_day(3, 12, 29));
    }

    #[test]
    fn schema_laws() {
        let schema = Lunisolar::new();
        check_schema_laws(&schema, -40..40);
        check_schema_cycle(&schema);
    }
}
