/*!
Calendrical arithmetic.

Every operation here is a pure function of a [`Schema`], its date inputs
and an explicit policy value; there is no ambient configuration. The
policies exist because calendrical addition is not total: adding a month
to January 31, or a year to February 29, lands on a day that does not
exist in the target month. An [`AdditionRuleset`] says what to do then,
and the default says *refuse* ([`DateRule::Exact`] and friends), so any
silent adjustment is one the caller opted into.

Differences run the other way and are total, but they have their own
boundary question: counting months from January 31 to February 28 of a
common year, has the "anniversary" occurred? The clamped landing says yes,
the raw day-of-month comparison says no, and both are defensible readings.
[`CountCutoff`] makes that choice explicit on every count.

Overflow is never silent: any operation that would move the linear day
count outside the schema's supported range reports an error for which
[`Error::is_overflow`](crate::Error::is_overflow) returns true.
*/

use crate::{
    convert,
    error::{math::Error as MathError, Error, ErrorContext},
    parts::{DateParts, OrdinalParts},
    schema::Schema,
    validate,
};

/// How [`add_months`] and [`add_years`] resolve a day that does not exist
/// in the target month.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateRule {
    /// Report the ambiguity as an error instead of adjusting anything.
    #[default]
    Exact,
    /// Roll forward to the first day of the following month.
    StartOfNextMonth,
    /// Clamp to the last day of the target month.
    EndOfMonth,
}

/// How [`add_years_ordinal`] resolves a day-of-year that does not exist in
/// the target year.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrdinalRule {
    /// Report the ambiguity as an error instead of adjusting anything.
    #[default]
    Exact,
    /// Roll forward to the first day of the following year.
    StartOfNextYear,
}

/// How year arithmetic resolves a month that does not exist in the target
/// year.
///
/// Only schemas with a variable month count (the leap-week Pax calendar,
/// lunisolar calendars) can make this rule fire.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonthRule {
    /// Report the ambiguity as an error instead of adjusting anything.
    #[default]
    Exact,
    /// Roll forward to the first month of the following year.
    StartOfNextYear,
}

/// The overflow policies for one batch of arithmetic, one per axis.
///
/// The default is `Exact` on every axis: ambiguous results are reported,
/// never adjusted. Use the builder methods to opt into adjustment:
///
/// ```
/// use calends::{AdditionRuleset, DateRule};
///
/// let ruleset = AdditionRuleset::new().date(DateRule::EndOfMonth);
/// assert_eq!(ruleset.date, DateRule::EndOfMonth);
/// assert_eq!(ruleset, AdditionRuleset::default().date(DateRule::EndOfMonth));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionRuleset {
    /// Resolves a nonexistent day-of-month.
    pub date: DateRule,
    /// Resolves a nonexistent day-of-year.
    pub ordinal: OrdinalRule,
    /// Resolves a nonexistent month.
    pub month: MonthRule,
}

impl AdditionRuleset {
    /// Returns the all-`Exact` ruleset.
    #[inline]
    pub const fn new() -> AdditionRuleset {
        AdditionRuleset {
            date: DateRule::Exact,
            ordinal: OrdinalRule::Exact,
            month: MonthRule::Exact,
        }
    }

    /// Returns this ruleset with the given day-of-month rule.
    #[inline]
    pub const fn date(self, rule: DateRule) -> AdditionRuleset {
        AdditionRuleset { date: rule, ..self }
    }

    /// Returns this ruleset with the given day-of-year rule.
    #[inline]
    pub const fn ordinal(self, rule: OrdinalRule) -> AdditionRuleset {
        AdditionRuleset { ordinal: rule, ..self }
    }

    /// Returns this ruleset with the given month rule.
    #[inline]
    pub const fn month(self, rule: MonthRule) -> AdditionRuleset {
        AdditionRuleset { month: rule, ..self }
    }
}

/// How the `count_*_between` family decides whether the final partial unit
/// has elapsed when the start day does not exist in the end month.
///
/// Counting months from 0001-01-31, is 0001-02-28 a whole month later?
/// The two defensible answers are both here; there is deliberately no
/// implicit choice between them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountCutoff {
    /// A probe landing clamped to the last day of the end month counts as
    /// a whole elapsed unit. Month-granularity information wins: January
    /// 31 to February 28 of a common year is one month.
    #[default]
    Clamp,
    /// Raw day-of-month comparison. Day-granularity information wins:
    /// January 31 to February 28 is zero months, because 28 < 31.
    Strict,
}

/// A difference between two dates, decomposed greatest-unit-first.
///
/// Produced by [`between`]. All three components carry the sign of the
/// difference, so a negative span has negative fields throughout.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateSpan {
    /// Whole years elapsed.
    pub years: i64,
    /// Whole months remaining after the years.
    pub months: i64,
    /// Days remaining after the months.
    pub days: i64,
}

impl DateSpan {
    /// Bundles a years/months/days decomposition.
    #[inline]
    pub const fn new(years: i64, months: i64, days: i64) -> DateSpan {
        DateSpan { years, months, days }
    }
}

/// Adds a number of days to a date. Negative values subtract.
///
/// Day arithmetic is never ambiguous, so no [`AdditionRuleset`] applies;
/// zero is the identity.
///
/// Three strategies hide under this one entry point: a shift that stays
/// inside the month touches only the day field, one that stays inside the
/// year runs at day-of-year granularity and anything bigger takes the full
/// trip through the epoch day count. They agree exactly; the tiers only
/// dodge conversion work on the hot small-shift cases.
///
/// # Errors
///
/// Returns an overflow error when the result leaves the schema's
/// supported range.
///
/// # Example
///
/// ```
/// use calends::{math, schema::Gregorian, DateParts};
///
/// let d = math::add_days(&Gregorian, DateParts::new(2024, 2, 28), 2)?;
/// assert_eq!(d, DateParts::new(2024, 3, 1));
/// # Ok::<(), calends::Error>(())
/// ```
pub fn add_days<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
    days: i64,
) -> Result<DateParts, Error> {
    // Within the month: only the day field moves.
    let day = i64::from(date.day) + days;
    if 1 <= day && day <= i64::from(schema.days_in_month(date.year, date.month))
    {
        return Ok(DateParts::new(date.year, date.month, day as i32));
    }
    // Within the year: redistribute via the day-of-year.
    let doy = i64::from(schema.day_of_year(date.year, date.month, date.day))
        + days;
    if 1 <= doy && doy <= i64::from(schema.days_in_year(date.year)) {
        let (month, day) = schema.month_day(date.year, doy as i32);
        return Ok(DateParts::new(date.year, month, day));
    }
    // Anything else: the full epoch day round trip.
    let epoch_day = convert::to_epoch_day(schema, date)
        .checked_add(days)
        .filter(|&epoch_day| {
            validate::check_epoch_day(schema, epoch_day).is_ok()
        })
        .ok_or(MathError::Overflow { unit: "days" })?;
    Ok(convert::from_epoch_day(schema, epoch_day))
}

/// Adds a number of days to an ordinal date. Negative values subtract.
///
/// The ordinal analogue of [`add_days`], skipping the month tier.
///
/// # Errors
///
/// Returns an overflow error when the result leaves the schema's
/// supported range.
pub fn add_days_ordinal<S: Schema + ?Sized>(
    schema: &S,
    ordinal: OrdinalParts,
    days: i64,
) -> Result<OrdinalParts, Error> {
    let doy = i64::from(ordinal.day_of_year) + days;
    if 1 <= doy && doy <= i64::from(schema.days_in_year(ordinal.year)) {
        return Ok(OrdinalParts::new(ordinal.year, doy as i32));
    }
    let epoch_day = convert::ordinal_to_epoch_day(schema, ordinal)
        .checked_add(days)
        .filter(|&epoch_day| {
            validate::check_epoch_day(schema, epoch_day).is_ok()
        })
        .ok_or(MathError::Overflow { unit: "days" })?;
    Ok(convert::epoch_day_to_ordinal(schema, epoch_day))
}

/// Adds a number of months to a date. Negative values subtract.
///
/// The month index is flattened across years (correctly for schemas whose
/// month count varies), shifted, and unflattened; the ruleset's
/// [`DateRule`] then resolves the day field against the target month's
/// length.
///
/// # Errors
///
/// Returns an ambiguity error under [`DateRule::Exact`] when the original
/// day exceeds the target month's length, and an overflow error when the
/// result leaves the schema's supported range.
///
/// # Example
///
/// ```
/// use calends::{
///     math::{self, AdditionRuleset, DateRule},
///     schema::Gregorian,
///     DateParts,
/// };
///
/// let jan31 = DateParts::new(1, 1, 31);
/// let ruleset = AdditionRuleset::new();
/// // 0001-02-31 does not exist, and `Exact` says so.
/// assert!(math::add_months(&Gregorian, jan31, 1, ruleset).unwrap_err()
///     .is_ambiguous());
/// assert_eq!(
///     math::add_months(&Gregorian, jan31, 1, ruleset.date(DateRule::EndOfMonth))?,
///     DateParts::new(1, 2, 28),
/// );
/// # Ok::<(), calends::Error>(())
/// ```
pub fn add_months<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
    months: i64,
    ruleset: AdditionRuleset,
) -> Result<DateParts, Error> {
    let flat = schema.months_before_year(date.year)
        + i64::from(date.month - 1);
    let result = flat
        .checked_add(months)
        .ok_or(Error::from(MathError::Overflow { unit: "months" }))
        .and_then(|flat| nth_month(schema, flat))
        .and_then(|(year, month)| {
            resolve_day(schema, year, month, date.day, ruleset.date)
        });
    result.context(MathError::FailedAddMonths)
}

/// Adds a number of years to a date. Negative values subtract.
///
/// For variable-month schemas the ruleset's [`MonthRule`] first resolves a
/// month missing from the target year (a thirteenth lunisolar month
/// landing on a common year); the [`DateRule`] then resolves the day
/// field. The classic case is an intercalary day whose target year is
/// common: February 29 plus one year errors under [`DateRule::Exact`],
/// clamps to February 28 under [`DateRule::EndOfMonth`] and rolls to
/// March 1 under [`DateRule::StartOfNextMonth`].
///
/// # Errors
///
/// Returns an ambiguity error under the `Exact` rules as described above,
/// and an overflow error when the result leaves the schema's supported
/// range.
pub fn add_years<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
    years: i64,
    ruleset: AdditionRuleset,
) -> Result<DateParts, Error> {
    let result =
        add_years_to_month(schema, date.year, date.month, years, ruleset)
            .and_then(|(year, month)| {
                resolve_day(schema, year, month, date.day, ruleset.date)
            });
    result.context(MathError::FailedAddYears)
}

/// Adds a number of years to a year/month pair. Negative values subtract.
///
/// This is the month-granularity operation that [`add_years`] builds on;
/// it exists on its own for callers tracking year-month values without a
/// day field. Only the ruleset's [`MonthRule`] applies.
///
/// # Errors
///
/// Returns an ambiguity error under [`MonthRule::Exact`] when the month
/// does not exist in the target year, and an overflow error when the
/// result leaves the schema's supported range.
pub fn add_years_to_month<S: Schema + ?Sized>(
    schema: &S,
    year: i32,
    month: i32,
    years: i64,
    ruleset: AdditionRuleset,
) -> Result<(i32, i32), Error> {
    let target = i64::from(year)
        .checked_add(years)
        .ok_or(MathError::Overflow { unit: "years" })?;
    let target = year_in_bounds(schema, target, "years")?;
    if month <= schema.months_in_year(target) {
        return Ok((target, month));
    }
    match ruleset.month {
        MonthRule::Exact => {
            Err(Error::from(MathError::AmbiguousMonth { year: target, month }))
        }
        MonthRule::StartOfNextYear => {
            let next =
                year_in_bounds(schema, i64::from(target) + 1, "years")?;
            Ok((next, 1))
        }
    }
}

/// Adds a number of years to an ordinal date. Negative values subtract.
///
/// The ruleset's [`OrdinalRule`] resolves a day-of-year missing from the
/// target year (day 366 landing on a common year).
///
/// # Errors
///
/// Returns an ambiguity error under [`OrdinalRule::Exact`] as described
/// above, and an overflow error when the result leaves the schema's
/// supported range.
pub fn add_years_ordinal<S: Schema + ?Sized>(
    schema: &S,
    ordinal: OrdinalParts,
    years: i64,
    ruleset: AdditionRuleset,
) -> Result<OrdinalParts, Error> {
    let target = i64::from(ordinal.year)
        .checked_add(years)
        .ok_or(MathError::Overflow { unit: "years" })?;
    let target = year_in_bounds(schema, target, "years")?;
    if ordinal.day_of_year <= schema.days_in_year(target) {
        return Ok(OrdinalParts::new(target, ordinal.day_of_year));
    }
    match ruleset.ordinal {
        OrdinalRule::Exact => Err(Error::from(MathError::AmbiguousOrdinal {
            year: target,
            day_of_year: ordinal.day_of_year,
        })),
        OrdinalRule::StartOfNextYear => {
            let next =
                year_in_bounds(schema, i64::from(target) + 1, "years")?;
            Ok(OrdinalParts::new(next, 1))
        }
    }
}

/// Counts the days from `start` to `end`, negative when `end` is earlier.
///
/// This is the exact inverse of [`add_days`]:
/// `count_days_between(s, d, add_days(s, d, n)?) == n` always.
#[inline]
pub fn count_days_between<S: Schema + ?Sized>(
    schema: &S,
    start: DateParts,
    end: DateParts,
) -> i64 {
    convert::to_epoch_day(schema, end) - convert::to_epoch_day(schema, start)
}

/// Counts the whole months from `start` to `end`, negative when `end` is
/// earlier.
///
/// Whenever `add_months` under [`DateRule::Exact`] succeeds,
/// `count_months_between(s, d, add_months(..., n, ...)?, cutoff) == n` for
/// either cutoff; the cutoffs only disagree when the start day does not
/// exist in the end month (see [`CountCutoff`]).
pub fn count_months_between<S: Schema + ?Sized>(
    schema: &S,
    start: DateParts,
    end: DateParts,
    cutoff: CountCutoff,
) -> i64 {
    let flat_start =
        schema.months_before_year(start.year) + i64::from(start.month - 1);
    let flat_end =
        schema.months_before_year(end.year) + i64::from(end.month - 1);
    let mut months = flat_end - flat_start;
    if months == 0 {
        return 0;
    }
    let sign = months.signum();
    let reached = match cutoff {
        CountCutoff::Clamp => {
            let day =
                start.day.min(schema.days_in_month(end.year, end.month));
            let landed = DateParts::new(end.year, end.month, day);
            if sign > 0 {
                landed <= end
            } else {
                landed >= end
            }
        }
        CountCutoff::Strict => {
            if sign > 0 {
                end.day >= start.day
            } else {
                end.day <= start.day
            }
        }
    };
    if !reached {
        months -= sign;
    }
    months
}

/// Counts the whole years from `start` to `end`, negative when `end` is
/// earlier.
///
/// The "has the anniversary occurred yet" decision follows the given
/// [`CountCutoff`], exactly as for [`count_months_between`].
pub fn count_years_between<S: Schema + ?Sized>(
    schema: &S,
    start: DateParts,
    end: DateParts,
    cutoff: CountCutoff,
) -> i64 {
    let mut years = i64::from(end.year) - i64::from(start.year);
    if years == 0 {
        return 0;
    }
    let sign = years.signum();
    let reached = match cutoff {
        CountCutoff::Clamp => {
            let landed = clamped_shift_years(schema, start, years);
            if sign > 0 {
                landed <= end
            } else {
                landed >= end
            }
        }
        CountCutoff::Strict => {
            if sign > 0 {
                (end.month, end.day) >= (start.month, start.day)
            } else {
                (end.month, end.day) <= (start.month, start.day)
            }
        }
    };
    if !reached {
        years -= sign;
    }
    years
}

/// Decomposes the difference from `start` to `end` greatest-unit-first:
/// whole years, then whole months, then days.
///
/// The components reassemble exactly: shift `start` by the years (month
/// and day clamped into the target year), then by the months (day clamped
/// into the target month), then by the days, and `end` comes back. For
/// fixed-month schemas the first two shifts are
/// [`add_years`]/[`add_months`] under [`DateRule::EndOfMonth`]; schemas
/// with a variable month count additionally clamp a vanished month to the
/// target year's last month, which no [`MonthRule`] expresses. All three
/// components share the sign of the difference.
///
/// # Example
///
/// ```
/// use calends::{math::{self, CountCutoff}, schema::Gregorian, DateParts};
///
/// let span = math::between(
///     &Gregorian,
///     DateParts::new(3, 4, 5),
///     DateParts::new(4, 4, 4),
///     CountCutoff::Clamp,
/// );
/// // One day short of a year.
/// assert_eq!((span.years, span.months, span.days), (0, 11, 30));
/// ```
pub fn between<S: Schema + ?Sized>(
    schema: &S,
    start: DateParts,
    end: DateParts,
    cutoff: CountCutoff,
) -> DateSpan {
    let years = count_years_between(schema, start, end, cutoff);
    let anchor = clamped_shift_years(schema, start, years);
    let months = count_months_between(schema, anchor, end, cutoff);
    let anchor = clamped_shift_months(schema, anchor, months);
    let days = count_days_between(schema, anchor, end);
    DateSpan { years, months, days }
}

/// Checks an i64 year against the schema's bounds, narrowing it. A year
/// outside the bounds is an arithmetic overflow, not a validation error:
/// the inputs were fine, the result does not fit.
#[inline]
fn year_in_bounds<S: Schema + ?Sized>(
    schema: &S,
    year: i64,
    unit: &'static str,
) -> Result<i32, Error> {
    let (min, max) = schema.year_bounds();
    if year < i64::from(min) || i64::from(max) < year {
        return Err(Error::from(MathError::Overflow { unit }));
    }
    Ok(year as i32)
}

/// Locates the year containing the 0-based flattened month index `flat`,
/// returning the year and 1-based month within it.
///
/// The same estimate-and-correct shape as the converter's year lookup,
/// over months instead of days.
fn nth_month<S: Schema + ?Sized>(
    schema: &S,
    flat: i64,
) -> Result<(i32, i32), Error> {
    let (min_year, max_year) = schema.year_bounds();
    if flat < schema.months_before_year(min_year)
        || schema.months_before_year(max_year + 1) <= flat
    {
        return Err(Error::from(MathError::Overflow { unit: "months" }));
    }
    let (cycle_months, cycle_years) = schema.month_cycle();
    let estimate = 1 + (flat * cycle_years).div_euclid(cycle_months);
    let mut year =
        estimate.clamp(i64::from(min_year), i64::from(max_year)) as i32;
    loop {
        let before = schema.months_before_year(year);
        if flat < before {
            year -= 1;
        } else if flat - before >= i64::from(schema.months_in_year(year)) {
            year += 1;
        } else {
            return Ok((year, (flat - before) as i32 + 1));
        }
    }
}

/// Applies a [`DateRule`] to a candidate day in the given month.
fn resolve_day<S: Schema + ?Sized>(
    schema: &S,
    year: i32,
    month: i32,
    day: i32,
    rule: DateRule,
) -> Result<DateParts, Error> {
    let days = schema.days_in_month(year, month);
    if day <= days {
        return Ok(DateParts::new(year, month, day));
    }
    match rule {
        DateRule::Exact => {
            Err(Error::from(MathError::AmbiguousDay { year, month, day }))
        }
        DateRule::EndOfMonth => Ok(DateParts::new(year, month, days)),
        DateRule::StartOfNextMonth => {
            if month < schema.months_in_year(year) {
                Ok(DateParts::new(year, month + 1, 1))
            } else {
                let next =
                    year_in_bounds(schema, i64::from(year) + 1, "months")?;
                Ok(DateParts::new(next, 1, 1))
            }
        }
    }
}

/// Shifts a date by whole years, clamping the month and day into the
/// target year. Used by the counting probes, where the shift amount is
/// derived from in-range dates and so cannot overflow.
fn clamped_shift_years<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
    years: i64,
) -> DateParts {
    let year = (i64::from(date.year) + years) as i32;
    let month = date.month.min(schema.months_in_year(year));
    let day = date.day.min(schema.days_in_month(year, month));
    DateParts::new(year, month, day)
}

/// Shifts a date by whole months, clamping the day into the target month.
/// Same derived-input caveat as [`clamped_shift_years`].
fn clamped_shift_months<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
    months: i64,
) -> DateParts {
    let flat = schema.months_before_year(date.year)
        + i64::from(date.month - 1)
        + months;
    let (year, month) =
        nth_month(schema, flat).expect("derived month index is in range");
    let day = date.day.min(schema.days_in_month(year, month));
    DateParts::new(year, month, day)
}

#[cfg(test)]
mod tests {
    use crate::schema::{Coptic, Gregorian, Lunisolar, Pax};

    use super::*;

    const CLAMP: AdditionRuleset = AdditionRuleset {
        date: DateRule::EndOfMonth,
        ordinal: OrdinalRule::StartOfNextYear,
        month: MonthRule::StartOfNextYear,
    };

    fn d(year: i32, month: i32, day: i32) -> DateParts {
        DateParts::new(year, month, day)
    }

    #[test]
    fn add_days_zero_is_identity() {
        for date in [d(2024, 2, 29), d(1, 1, 1), d(-4, 12, 31)] {
            assert_eq!(add_days(&Gregorian, date, 0).unwrap(), date);
        }
        assert_eq!(
            add_days_ordinal(&Gregorian, OrdinalParts::new(2024, 366), 0)
                .unwrap(),
            OrdinalParts::new(2024, 366),
        );
    }

    #[test]
    fn add_months_zero_is_identity() {
        let ruleset = AdditionRuleset::new();
        for date in [d(2024, 2, 29), d(1, 1, 31), d(-4, 12, 31)] {
            assert_eq!(add_months(&Gregorian, date, 0, ruleset).unwrap(), date);
            assert_eq!(add_years(&Gregorian, date, 0, ruleset).unwrap(), date);
        }
    }

    #[test]
    fn add_days_tiers_agree() {
        // Shift sizes chosen to hit the in-month, in-year and epoch-day
        // tiers; the reference is always the epoch day round trip.
        let (pax, lunisolar) = (Pax::new(), Lunisolar::new());
        let schemas: &[&dyn crate::schema::Schema] =
            &[&Gregorian, &Coptic, &pax, &lunisolar];
        for &schema in schemas {
            let start = convert::from_epoch_day(schema, 700_000);
            for n in [-3000, -400, -40, -3, -1, 0, 1, 3, 17, 40, 400, 3000] {
                let got = add_days(schema, start, n).unwrap();
                let want =
                    convert::from_epoch_day(schema, 700_000 + n);
                assert_eq!(got, want, "{schema:?}: {start} + {n} days");
            }
        }
    }

    #[test]
    fn add_days_crosses_boundaries() {
        assert_eq!(
            add_days(&Gregorian, d(2024, 2, 28), 2).unwrap(),
            d(2024, 3, 1),
        );
        assert_eq!(
            add_days(&Gregorian, d(2024, 12, 31), 1).unwrap(),
            d(2025, 1, 1),
        );
        assert_eq!(
            add_days(&Gregorian, d(2025, 1, 1), -1).unwrap(),
            d(2024, 12, 31),
        );
        assert_eq!(
            add_days(&Coptic, d(3, 13, 5), 1).unwrap(),
            d(3, 13, 6),
        );
        assert_eq!(add_days(&Coptic, d(3, 13, 6), 1).unwrap(), d(4, 1, 1));
    }

    #[test]
    fn add_days_overflow() {
        let err = add_days(&Gregorian, d(9999, 12, 31), 1).unwrap_err();
        assert!(err.is_overflow(), "{err}");
        let err = add_days(&Gregorian, d(-9999, 1, 1), -1).unwrap_err();
        assert!(err.is_overflow(), "{err}");
        // i64 saturation rather than panicking.
        let err =
            add_days(&Gregorian, d(2024, 1, 1), i64::MAX).unwrap_err();
        assert!(err.is_overflow(), "{err}");
    }

    #[test]
    fn cutoff_determinism() {
        // The canonical end-of-January cases, common and leap target.
        let eom = AdditionRuleset::new().date(DateRule::EndOfMonth);
        let next = AdditionRuleset::new().date(DateRule::StartOfNextMonth);

        assert_eq!(
            add_months(&Gregorian, d(1, 1, 31), 1, eom).unwrap(),
            d(1, 2, 28),
        );
        assert_eq!(
            add_months(&Gregorian, d(4, 1, 31), 1, eom).unwrap(),
            d(4, 2, 29),
        );
        assert_eq!(
            add_months(&Gregorian, d(1, 1, 31), 1, next).unwrap(),
            d(1, 3, 1),
        );
        assert_eq!(
            add_months(&Gregorian, d(4, 1, 31), 1, next).unwrap(),
            d(4, 3, 1),
        );
        let err =
            add_months(&Gregorian, d(1, 1, 31), 1, AdditionRuleset::new())
                .unwrap_err();
        assert!(err.is_ambiguous(), "{err}");
    }

    #[test]
    fn add_years_intercalary_day() {
        let feb29 = d(2024, 2, 29);
        let exact = AdditionRuleset::new();
        let eom = exact.date(DateRule::EndOfMonth);
        let next = exact.date(DateRule::StartOfNextMonth);

        let err = add_years(&Gregorian, feb29, 1, exact).unwrap_err();
        assert!(err.is_ambiguous(), "{err}");
        assert_eq!(
            add_years(&Gregorian, feb29, 1, eom).unwrap(),
            d(2025, 2, 28),
        );
        assert_eq!(
            add_years(&Gregorian, feb29, 1, next).unwrap(),
            d(2025, 3, 1),
        );
        // Leap target year: no ambiguity under any rule.
        assert_eq!(
            add_years(&Gregorian, feb29, 4, exact).unwrap(),
            d(2028, 2, 29),
        );
    }

    #[test]
    fn add_years_exact_inverse() -> anyhow::Result<()> {
        // 0003-04-05 + 6 years and back, per the unambiguous-inverse law.
        let exact = AdditionRuleset::new();
        let there = add_years(&Gregorian, d(3, 4, 5), 6, exact)?;
        assert_eq!(there, d(9, 4, 5));
        assert_eq!(add_years(&Gregorian, there, -6, exact)?, d(3, 4, 5));
        Ok(())
    }

    #[test]
    fn add_months_flattened_over_variable_years() -> anyhow::Result<()> {
        let schema = Lunisolar::new();
        let exact = AdditionRuleset::new();
        // Year 2 is common (12 months), year 3 embolismic (13 months):
        // stepping month by month walks through all of them.
        let mut date = d(2, 12, 1);
        date = add_months(&schema, date, 1, exact)?;
        assert_eq!(date, d(3, 1, 1));
        date = add_months(&schema, date, 12, exact)?;
        assert_eq!(date, d(3, 13, 1));
        date = add_months(&schema, date, 1, exact)?;
        assert_eq!(date, d(4, 1, 1));
        // And back across the embolismic month in one hop.
        assert_eq!(add_months(&schema, d(4, 1, 1), -14, exact)?, d(2, 12, 1));
        Ok(())
    }

    #[test]
    fn add_years_variable_month_count() {
        let schema = Lunisolar::new();
        let exact = AdditionRuleset::new();
        // Month 13 of embolismic year 3 has no counterpart in year 4.
        let err = add_years(&schema, d(3, 13, 10), 1, exact).unwrap_err();
        assert!(err.is_ambiguous(), "{err}");
        assert_eq!(
            add_years(&schema, d(3, 13, 10), 1, CLAMP).unwrap(),
            d(5, 1, 10),
        );
        // Year 6 is embolismic again, so the month survives.
        assert_eq!(
            add_years(&schema, d(3, 13, 10), 3, exact).unwrap(),
            d(6, 13, 10),
        );

        let pax = Pax::new();
        let err = add_years(&pax, d(6, 14, 28), 1, exact).unwrap_err();
        assert!(err.is_ambiguous(), "{err}");
        assert_eq!(
            add_years_to_month(&pax, 6, 14, 1, CLAMP).unwrap(),
            (8, 1),
        );
    }

    #[test]
    fn add_years_ordinal_rules() {
        let exact = AdditionRuleset::new();
        let leap_last = OrdinalParts::new(2024, 366);
        let err =
            add_years_ordinal(&Gregorian, leap_last, 1, exact).unwrap_err();
        assert!(err.is_ambiguous(), "{err}");
        assert_eq!(
            add_years_ordinal(&Gregorian, leap_last, 1, CLAMP).unwrap(),
            OrdinalParts::new(2026, 1),
        );
        assert_eq!(
            add_years_ordinal(&Gregorian, leap_last, 4, exact).unwrap(),
            OrdinalParts::new(2028, 366),
        );
    }

    #[test]
    fn count_days_inverse() {
        for n in [-1000, -1, 0, 1, 59, 1000] {
            let start = d(2020, 2, 29);
            let end = add_days(&Gregorian, start, n).unwrap();
            assert_eq!(count_days_between(&Gregorian, start, end), n);
        }
    }

    #[test]
    fn count_months_inverse_when_exact() {
        let exact = AdditionRuleset::new();
        let start = d(2020, 5, 31);
        for n in [-26, -12, -2, 0, 2, 12, 26] {
            let Ok(end) = add_months(&Gregorian, start, n, exact) else {
                continue;
            };
            for cutoff in [CountCutoff::Clamp, CountCutoff::Strict] {
                assert_eq!(
                    count_months_between(&Gregorian, start, end, cutoff),
                    n,
                    "{start} + {n} months = {end} ({cutoff:?})",
                );
            }
        }
    }

    #[test]
    fn difference_decomposition_fixtures() {
        // One day short of a full year.
        let span =
            between(&Gregorian, d(3, 4, 5), d(4, 4, 4), CountCutoff::Clamp);
        assert_eq!(span, DateSpan::new(0, 11, 30));
        // A leap day start, crossing its own anniversary.
        let span =
            between(&Gregorian, d(8, 2, 29), d(12, 3, 1), CountCutoff::Clamp);
        assert_eq!(span, DateSpan::new(4, 0, 1));
        // Those two are cutoff-insensitive.
        let span =
            between(&Gregorian, d(3, 4, 5), d(4, 4, 4), CountCutoff::Strict);
        assert_eq!(span, DateSpan::new(0, 11, 30));
        let span =
            between(&Gregorian, d(8, 2, 29), d(12, 3, 1), CountCutoff::Strict);
        assert_eq!(span, DateSpan::new(4, 0, 1));
    }

    #[test]
    fn difference_cutoff_divergence() {
        // The end-of-month boundary where the two cutoffs legitimately
        // disagree: is 0002-03-31 -> 0003-04-30 one year one month, or
        // one year and thirty days?
        let start = d(2, 3, 31);
        let end = d(3, 4, 30);
        assert_eq!(
            between(&Gregorian, start, end, CountCutoff::Clamp),
            DateSpan::new(1, 1, 0),
        );
        assert_eq!(
            between(&Gregorian, start, end, CountCutoff::Strict),
            DateSpan::new(1, 0, 30),
        );
        // Same divergence one level down, at month granularity.
        assert_eq!(
            count_months_between(&Gregorian, d(1, 1, 31), d(1, 2, 28), CountCutoff::Clamp),
            1,
        );
        assert_eq!(
            count_months_between(&Gregorian, d(1, 1, 31), d(1, 2, 28), CountCutoff::Strict),
            0,
        );
    }

    #[test]
    fn difference_negative_direction() {
        // Not the mirror image of the forward span: walking back from
        // 0004-04-04, the final partial stretch crosses 30-day April
        // instead of 31-day March.
        let span =
            between(&Gregorian, d(4, 4, 4), d(3, 4, 5), CountCutoff::Clamp);
        assert_eq!(span, DateSpan::new(0, -11, -29));
        assert_eq!(
            count_years_between(&Gregorian, d(12, 3, 1), d(8, 2, 29), CountCutoff::Clamp),
            -4,
        );
    }

    #[test]
    fn between_reassembles() {
        // `between` + clamped re-addition must land exactly on `end`.
        let cases = [
            (d(2020, 2, 29), d(2021, 2, 28)),
            (d(2020, 1, 31), d(2020, 3, 30)),
            (d(1999, 12, 31), d(2000, 2, 29)),
            (d(2024, 3, 31), d(2024, 2, 29)),
            (d(3, 4, 5), d(4, 4, 4)),
        ];
        for (start, end) in cases {
            for cutoff in [CountCutoff::Clamp, CountCutoff::Strict] {
                let span = between(&Gregorian, start, end, cutoff);
                let mut got =
                    add_years(&Gregorian, start, span.years, CLAMP).unwrap();
                got = add_months(&Gregorian, got, span.months, CLAMP).unwrap();
                got = add_days(&Gregorian, got, span.days).unwrap();
                assert_eq!(got, end, "{start} -> {end} ({cutoff:?}, {span:?})");
            }
        }
    }

    quickcheck::quickcheck! {
        fn prop_add_days_matches_epoch_roundtrip(
            day: i32,
            delta: i16
        ) -> bool {
            let day = i64::from(day) % 3_000_000;
            let delta = i64::from(delta);
            let start = convert::from_epoch_day(&Gregorian, day);
            let got = add_days(&Gregorian, start, delta).unwrap();
            got == convert::from_epoch_day(&Gregorian, day + delta)
        }

        fn prop_add_months_then_back(
            day: i32,
            months: i8
        ) -> quickcheck::TestResult {
            let day = i64::from(day) % 3_000_000;
            let months = i64::from(months);
            let start = convert::from_epoch_day(&Gregorian, day);
            let exact = AdditionRuleset::new();
            let Ok(end) = add_months(&Gregorian, start, months, exact) else {
                return quickcheck::TestResult::discard();
            };
            let Ok(back) = add_months(&Gregorian, end, -months, exact) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(back == start)
        }

        fn prop_count_months_inverse(day: i32, months: i8) -> quickcheck::TestResult {
            let day = i64::from(day) % 3_000_000;
            let months = i64::from(months);
            let start = convert::from_epoch_day(&Gregorian, day);
            let exact = AdditionRuleset::new();
            let Ok(end) = add_months(&Gregorian, start, months, exact) else {
                return quickcheck::TestResult::discard();
            };
            let n = count_months_between(&Gregorian, start, end, CountCutoff::Clamp);
            quickcheck::TestResult::from_bool(n == months)
        }

        fn prop_between_reassembles_pax(day: i32, other: i32) -> bool {
            // Clamped shifts, not `add_*`: a start inside the leap-week
            // month has no `MonthRule` that clamps, so the reassembly law
            // is stated in terms of the clamping probes themselves.
            let schema = Pax::new();
            let day = i64::from(day) % 3_000_000;
            let other = i64::from(other) % 3_000_000;
            let start = convert::from_epoch_day(&schema, day);
            let end = convert::from_epoch_day(&schema, other);
            let span = between(&schema, start, end, CountCutoff::Clamp);
            let mut got = clamped_shift_years(&schema, start, span.years);
            got = clamped_shift_months(&schema, got, span.months);
            got = add_days(&schema, got, span.days).unwrap();
            got == end
        }
    }
}
