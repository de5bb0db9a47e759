use crate::schema::Schema;

/// Days per 2,820-year grand cycle: 2,137 common years of 365 days and
/// 683 leap years of 366.
const DAYS_PER_CYCLE: i64 = 2_820 * 365 + 683;

/// The cycle position occupied by year 475; the grand cycle is anchored so
/// that a fresh cycle begins there, which is what makes the arithmetic
/// below agree with the astronomical calendar over its era of validity.
const ANCHOR_YEAR: i64 = 475;

/// The arithmetic Persian calendar on the 2,820-year cycle.
///
/// Six 31-day months, five 30-day months and a final month of 29 days,
/// stretched to 30 in leap years. Leap years follow the 2,820-year grand
/// cycle: 21 sub-cycles of 128 years followed by one of 132, each built
/// from 29-, 33- and 37-year blocks in which every fourth year past the
/// first is a leap year. That places 683 leap years in each grand cycle
/// for a mean year of 365.24220 days.
///
/// The block structure is unwound once at construction into a per-cycle
/// leap table and day prefix sums; every query afterwards is modular
/// arithmetic plus a lookup.
///
/// Year 1 begins on epoch day 226,896, which is 0622-03-19 in the Julian
/// calendar.
///
/// # Example
///
/// ```
/// use calends::schema::{Persian2820, Schema};
///
/// let schema = Persian2820::new();
/// assert!(schema.is_leap_year(1375));
/// assert!(!schema.is_leap_year(1374));
/// assert_eq!(schema.days_in_month(1375, 12), 30);
/// ```
#[derive(Clone)]
pub struct Persian2820 {
    /// Leap status of each cycle position.
    leap: [bool; 2_820],
    /// Days before each cycle position, within the grand cycle.
    day_prefix: [i32; 2_820],
    /// Days from the start of the anchoring grand cycle to year 1.
    /// Negative, since year 1 precedes the anchor year.
    year_one: i64,
}

/// Leap status of the 1-based position `p` within the grand cycle.
///
/// Positions split into 128-year sub-cycles (the last runs 132), which in
/// turn split into 29/33/33/33-year blocks (29/33/33/37 for the last).
/// Within a block, the leap years are those at positions 5, 9, 13, ...
fn position_is_leap(p: i32) -> bool {
    debug_assert!(1 <= p && p <= 2_820);
    let (sub_len, mut q) = if p > 21 * 128 {
        (132, p - 21 * 128)
    } else {
        (128, (p - 1) % 128 + 1)
    };
    for block in [29, 33, 33, if sub_len == 132 { 37 } else { 33 }] {
        if q <= block {
            return q > 1 && q % 4 == 1;
        }
        q -= block;
    }
    unreachable!("sub-cycle blocks cover every position")
}

impl Persian2820 {
    /// Creates the schema, computing its 2,820-year cycle tables.
    ///
    /// # Panics
    ///
    /// Panics if the generated tables are internally inconsistent (leap
    /// count or day total not matching the documented cycle constants).
    /// That would be a bug in this crate, not a user error.
    pub fn new() -> Persian2820 {
        let mut leap = [false; 2_820];
        let mut day_prefix = [0i32; 2_820];
        let (mut days, mut leaps) = (0i32, 0i32);
        for pos in 0..2_820 {
            day_prefix[pos] = days;
            leap[pos] = position_is_leap(pos as i32 + 1);
            days += if leap[pos] { 366 } else { 365 };
            leaps += i32::from(leap[pos]);
        }
        assert_eq!(i64::from(days), DAYS_PER_CYCLE);
        assert_eq!(leaps, 683);
        debug!("built persian cycle tables: {leaps} leap years per cycle");

        let mut schema = Persian2820 { leap, day_prefix, year_one: 0 };
        schema.year_one = schema.days_from_cycle_start(1);
        schema
    }

    /// The position of `year` within the grand cycle, along with the
    /// number of whole cycles between the anchor cycle and it.
    #[inline]
    fn cycle_position(&self, year: i32) -> (i64, usize) {
        let offset = i64::from(year) - ANCHOR_YEAR;
        (offset.div_euclid(2_820), offset.rem_euclid(2_820) as usize)
    }

    /// Days from the start of the anchoring grand cycle to `year`.
    #[inline]
    fn days_from_cycle_start(&self, year: i32) -> i64 {
        let (cycles, pos) = self.cycle_position(year);
        cycles * DAYS_PER_CYCLE + i64::from(self.day_prefix[pos])
    }
}

impl Default for Persian2820 {
    fn default() -> Persian2820 {
        Persian2820::new()
    }
}

impl core::fmt::Debug for Persian2820 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // The tables are derived data; dumping 2,820 entries helps nobody.
        f.write_str("Persian2820")
    }
}

impl Schema for Persian2820 {
    #[inline]
    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    #[inline]
    fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    #[inline]
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month <= 6 {
            31
        } else if month <= 11 {
            30
        } else if self.is_leap_year(year) {
            30
        } else {
            29
        }
    }

    #[inline]
    fn is_leap_year(&self, year: i32) -> bool {
        let (_, pos) = self.cycle_position(year);
        self.leap[pos]
    }

    #[inline]
    fn is_intercalary_day(&self, _year: i32, month: i32, day: i32) -> bool {
        month == 12 && day == 30
    }

    #[inline]
    fn epoch(&self) -> i64 {
        226_896
    }

    #[inline]
    fn days_before_year(&self, year: i32) -> i64 {
        self.days_from_cycle_start(year) - self.year_one
    }

    #[inline]
    fn days_before_month(&self, _year: i32, month: i32) -> i32 {
        if month <= 7 {
            31 * (month - 1)
        } else {
            186 + 30 * (month - 7)
        }
    }

    #[inline]
    fn month_day(&self, _year: i32, day_of_year: i32) -> (i32, i32) {
        let month = if day_of_year <= 186 {
            (day_of_year - 1) / 31 + 1
        } else {
            ((day_of_year - 187) / 30 + 7).min(12)
        };
        (month, day_of_year - self.days_before_month(_year, month))
    }

    #[inline]
    fn months_before_year(&self, year: i32) -> i64 {
        12 * (i64::from(year) - 1)
    }

    #[inline]
    fn year_cycle(&self) -> (i64, i64) {
        (DAYS_PER_CYCLE, 2_820)
    }

    #[inline]
    fn month_cycle(&self) -> (i64, i64) {
        (12, 1)
    }
}
