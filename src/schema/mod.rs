/*!
Calendar schemas.

A [`Schema`] is a pure, immutable description of one calendar's shape: how
many months a year has, how long each month is, which years are leap years
and where the calendar's year 1 sits relative to the shared epoch. Schemas
carry no date state of their own; they only answer structural questions,
and the [`convert`](crate::convert) and [`math`](crate::math) modules do
the rest generically.

Two algorithm families cover every schema here:

* *Periodic* schemas (Gregorian, Julian, Coptic, the Tropicália variants,
  World, ...) answer every query with a closed form over `year mod cycle`.
* *Cycle accumulation* schemas ([`Persian2820`], [`Lunisolar`], [`Pax`])
  precompute small per-cycle tables once at construction and combine them
  with modular arithmetic to locate a year inside nested sub-cycles.

Either way, no query ever iterates over years or months, so everything the
converter and kernel build on top stays O(1).

Days that exist only in leap years (February 29, the Coptic sixth
epagomenal day, the Pax leap week) are ordinary valid days of their month,
flagged via [`Schema::is_intercalary_day`]. Days appended outside the
regular month structure (epagomenal/complementary days) are likewise
ordinary days, flagged via [`Schema::is_supplementary_day`].
*/

pub use self::{
    coptic::Coptic,
    egyptian::Egyptian,
    french_republican::FrenchRepublican,
    gregorian::Gregorian,
    international_fixed::InternationalFixed,
    julian::Julian,
    lunisolar::Lunisolar,
    pax::Pax,
    persian::Persian2820,
    positivist::Positivist,
    tabular_islamic::TabularIslamic,
    tropicalia::{Tropicalia, Tropicalia3031, Tropicalia3130},
    world::World,
};

mod coptic;
mod egyptian;
mod french_republican;
mod gregorian;
mod international_fixed;
mod julian;
mod lunisolar;
mod pax;
mod persian;
mod positivist;
mod tabular_islamic;
mod tropicalia;
mod world;

/// A pure description of one calendar's month, day and leap year structure.
///
/// Implementations are stateless or hold only tables fixed at construction
/// time, and are therefore freely shareable across threads. All methods are
/// total over *valid* inputs: callers are expected to validate fields first
/// (see [`validate`](crate::validate)); behavior for out-of-range fields is
/// unspecified but must not panic in release builds.
///
/// # Invariants
///
/// Every implementation must uphold, for all supported years `y`:
///
/// * `1 <= m <= months_in_year(y)` for every valid month `m`, and
///   `1 <= d <= days_in_month(y, m)` for every valid day `d`;
/// * the month lengths of `y` sum to `days_in_year(y)`;
/// * `days_before_year(y + 1) - days_before_year(y) == days_in_year(y)`;
/// * [`month_day`](Schema::month_day) is the exact inverse of
///   [`day_of_year`](Schema::day_of_year).
///
/// These laws are what the converter's round-trip guarantee reduces to,
/// and the test suite checks them for every schema in this crate.
pub trait Schema: core::fmt::Debug + Send + Sync {
    /// Returns the number of months in the given year.
    ///
    /// Most calendars have a fixed month count, but some (the leap-week
    /// Pax calendar, lunisolar calendars with embolismic months) gain a
    /// month in leap years.
    fn months_in_year(&self, year: i32) -> i32;

    /// Returns the number of days in the given year.
    fn days_in_year(&self, year: i32) -> i32;

    /// Returns the number of days in the given month.
    fn days_in_month(&self, year: i32, month: i32) -> i32;

    /// Returns true if and only if the given year is a leap year.
    ///
    /// "Leap" means the year is longer than a common year, whatever form
    /// the extension takes: an intercalary day, a leap week or a whole
    /// embolismic month.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Returns true for days that exist only in leap years, like
    /// February 29.
    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool;

    /// Returns true for days that sit outside the regular month structure,
    /// like the five or six epagomenal days that calendars in the Egyptian
    /// tradition append after their twelve 30-day months.
    ///
    /// Supplementary days exist every year (the leap-only sixth epagomenal
    /// day is *also* intercalary). Most calendars have none.
    #[inline]
    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool {
        let (_, _, _) = (year, month, day);
        false
    }

    /// Returns the epoch day number of this calendar's 0001-01-01.
    ///
    /// Epoch day 1 is 0001-01-01 of the proleptic Gregorian calendar, per
    /// the Rata Die convention, so this value is what anchors the schema's
    /// own year reckoning to the shared timeline.
    fn epoch(&self) -> i64;

    /// Returns the number of days in all years strictly before `year`,
    /// counted from this calendar's year 1.
    ///
    /// `days_before_year(1)` is `0`; the value is negative for years
    /// before year 1. Implementations must use a closed form or
    /// construction-time cycle tables, never a year-by-year scan.
    fn days_before_year(&self, year: i32) -> i64;

    /// Returns the number of days in all months of `year` strictly before
    /// `month`.
    fn days_before_month(&self, year: i32, month: i32) -> i32;

    /// Returns the month and day-of-month for the given day of the year.
    ///
    /// This is the exact inverse of [`day_of_year`](Schema::day_of_year).
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32);

    /// Returns the day of the year for the given month and day.
    #[inline]
    fn day_of_year(&self, year: i32, month: i32, day: i32) -> i32 {
        self.days_before_month(year, month) + day
    }

    /// Returns the number of months in all years strictly before `year`,
    /// counted from this calendar's year 1.
    ///
    /// For fixed-month calendars this is just `(year - 1) * months`, but
    /// the kernel's month arithmetic relies on it being correct for
    /// variable-month calendars too.
    fn months_before_year(&self, year: i32) -> i64;

    /// Returns this calendar's full leap cycle as `(days, years)`.
    ///
    /// The ratio is the calendar's exact average year length and is used
    /// to estimate a year from a day count before correcting by at most a
    /// step or two. For the Gregorian calendar this is `(146_097, 400)`.
    fn year_cycle(&self) -> (i64, i64);

    /// Returns this calendar's full leap cycle as `(months, years)`.
    ///
    /// The month-granularity analogue of [`year_cycle`](Schema::year_cycle),
    /// used by the kernel to locate the year containing a flattened month
    /// index.
    fn month_cycle(&self) -> (i64, i64);

    /// Returns the inclusive range of years this schema supports.
    ///
    /// The default is the symmetric proleptic range `-9999..=9999`.
    /// Anything derived from a day count within this range fits
    /// comfortably in an `i64`.
    #[inline]
    fn year_bounds(&self) -> (i32, i32) {
        (-9999, 9999)
    }
}

impl<'a, S: Schema + ?Sized> Schema for &'a S {
    fn months_in_year(&self, year: i32) -> i32 {
        (**self).months_in_year(year)
    }
    fn days_in_year(&self, year: i32) -> i32 {
        (**self).days_in_year(year)
    }
    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        (**self).days_in_month(year, month)
    }
    fn is_leap_year(&self, year: i32) -> bool {
        (**self).is_leap_year(year)
    }
    fn is_intercalary_day(&self, year: i32, month: i32, day: i32) -> bool {
        (**self).is_intercalary_day(year, month, day)
    }
    fn is_supplementary_day(&self, year: i32, month: i32, day: i32) -> bool {
        (**self).is_supplementary_day(year, month, day)
    }
    fn epoch(&self) -> i64 {
        (**self).epoch()
    }
    fn days_before_year(&self, year: i32) -> i64 {
        (**self).days_before_year(year)
    }
    fn days_before_month(&self, year: i32, month: i32) -> i32 {
        (**self).days_before_month(year, month)
    }
    fn month_day(&self, year: i32, day_of_year: i32) -> (i32, i32) {
        (**self).month_day(year, day_of_year)
    }
    fn day_of_year(&self, year: i32, month: i32, day: i32) -> i32 {
        (**self).day_of_year(year, month, day)
    }
    fn months_before_year(&self, year: i32) -> i64 {
        (**self).months_before_year(year)
    }
    fn year_cycle(&self) -> (i64, i64) {
        (**self).year_cycle()
    }
    fn month_cycle(&self) -> (i64, i64) {
        (**self).month_cycle()
    }
    fn year_bounds(&self) -> (i32, i32) {
        (**self).year_bounds()
    }
}

/// Returns true if and only if the given year is a Gregorian leap year.
///
/// This folds the mod-100 and mod-400 tests into a single division: a year
/// not divisible by 25 only needs the mod-4 test, and a year divisible by
/// 25 is a multiple of 100 within its residue class, where divisibility by
/// 16 and by 400 agree.
#[inline]
pub(crate) fn gregorian_is_leap(year: i32) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    year % d == 0
}

/// Days in all Gregorian years strictly before `year`, from year 1.
#[inline]
pub(crate) fn gregorian_days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Cumulative days before each month of a common Gregorian-shaped year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns the number of days in the given Gregorian-shaped month.
///
/// The non-February arm is a bit trick over the month number: it yields 31
/// for months 1, 3, 5, 7, 8, 10, 12 and 30 for the rest.
#[inline]
pub(crate) fn gregorian_days_in_month(leap: bool, month: i32) -> i32 {
    if month == 2 {
        if leap {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Days before the given month of a Gregorian-shaped year.
#[inline]
pub(crate) fn gregorian_days_before_month(leap: bool, month: i32) -> i32 {
    let mut days = GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize];
    if leap && month > 2 {
        days += 1;
    }
    days
}

/// The inverse of [`gregorian_days_before_month`]: month and day-of-month
/// for a day-of-year in a Gregorian-shaped year.
#[inline]
pub(crate) fn gregorian_month_day(leap: bool, day_of_year: i32) -> (i32, i32) {
    let mut doy = day_of_year;
    if leap {
        if doy == 60 {
            return (2, 29);
        }
        if doy > 60 {
            doy -= 1;
        }
    }
    let month =
        GREGORIAN_DAYS_BEFORE_MONTH.partition_point(|&days| days < doy) as i32;
    let day = doy - GREGORIAN_DAYS_BEFORE_MONTH[(month - 1) as usize];
    (month, day)
}
