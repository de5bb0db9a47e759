/*!
Field validation against a schema.

Everything in [`convert`](crate::convert) and most of
[`math`](crate::math) assumes its date inputs are valid, so this module is
the boundary where raw integers become trustworthy fields. Each check
reports the *first* invalid field by name: a date with a bad year and a
bad day fails on the year, and the day is never inspected (it could not be
judged without a valid month anyway, since every bound here is derived
from the fields before it).
*/

use crate::{
    convert,
    error::Error,
    parts::{DateParts, OrdinalParts},
    schema::Schema,
};

/// The supported range of a schema, in years and in epoch days.
///
/// The year range comes straight from
/// [`Schema::year_bounds`](crate::schema::Schema::year_bounds); the epoch
/// day range is derived from it: the first day of the minimum year through
/// the last day of the maximum year.
///
/// # Example
///
/// ```
/// use calends::{schema::Gregorian, validate::Bounds};
///
/// let bounds = Bounds::new(&Gregorian);
/// assert_eq!(bounds.years(), (-9999, 9999));
/// assert_eq!(bounds.epoch_days(), (-3_652_424, 3_652_059));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    min_year: i32,
    max_year: i32,
    min_epoch_day: i64,
    max_epoch_day: i64,
}

impl Bounds {
    /// Computes the bounds of the given schema.
    pub fn new<S: Schema + ?Sized>(schema: &S) -> Bounds {
        let (min_year, max_year) = schema.year_bounds();
        let min_epoch_day =
            convert::to_epoch_day(schema, DateParts::new(min_year, 1, 1));
        let month = schema.months_in_year(max_year);
        let day = schema.days_in_month(max_year, month);
        let max_epoch_day =
            convert::to_epoch_day(schema, DateParts::new(max_year, month, day));
        Bounds { min_year, max_year, min_epoch_day, max_epoch_day }
    }

    /// Returns the inclusive `(min, max)` supported years.
    #[inline]
    pub fn years(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Returns the inclusive `(min, max)` supported epoch days.
    #[inline]
    pub fn epoch_days(&self) -> (i64, i64) {
        (self.min_epoch_day, self.max_epoch_day)
    }

    /// Returns true when the given epoch day is within bounds.
    #[inline]
    pub fn contains_epoch_day(&self, epoch_day: i64) -> bool {
        self.min_epoch_day <= epoch_day && epoch_day <= self.max_epoch_day
    }
}

/// Checks that a year is within the schema's supported range.
///
/// # Errors
///
/// Returns a range error tagged `"year"` otherwise.
#[inline]
pub fn check_year<S: Schema + ?Sized>(
    schema: &S,
    year: i32,
) -> Result<(), Error> {
    let (min, max) = schema.year_bounds();
    if year < min || max < year {
        return Err(Error::range("year", year, min, max));
    }
    Ok(())
}

/// Checks that a month exists in the given year.
///
/// # Errors
///
/// Returns a range error tagged with the first invalid field, `"year"` or
/// `"month"`.
#[inline]
pub fn check_month<S: Schema + ?Sized>(
    schema: &S,
    year: i32,
    month: i32,
) -> Result<(), Error> {
    check_year(schema, year)?;
    let months = schema.months_in_year(year);
    if month < 1 || months < month {
        return Err(Error::range("month", month, 1, months));
    }
    Ok(())
}

/// Checks that a date names a real day under the schema.
///
/// # Errors
///
/// Returns a range error tagged with the first invalid field, `"year"`,
/// `"month"` or `"day"`.
///
/// # Example
///
/// ```
/// use calends::{schema::Gregorian, validate, DateParts};
///
/// assert!(validate::check_date(&Gregorian, DateParts::new(2024, 2, 29)).is_ok());
///
/// let err = validate::check_date(&Gregorian, DateParts::new(2025, 2, 29))
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "parameter 'day' with value 29 is not in the required range of 1..=28",
/// );
/// ```
#[inline]
pub fn check_date<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
) -> Result<(), Error> {
    check_month(schema, date.year, date.month)?;
    let days = schema.days_in_month(date.year, date.month);
    if date.day < 1 || days < date.day {
        return Err(Error::range("day", date.day, 1, days));
    }
    Ok(())
}

/// Checks that an ordinal date names a real day under the schema.
///
/// # Errors
///
/// Returns a range error tagged with the first invalid field, `"year"` or
/// `"day-of-year"`.
#[inline]
pub fn check_ordinal<S: Schema + ?Sized>(
    schema: &S,
    ordinal: OrdinalParts,
) -> Result<(), Error> {
    check_year(schema, ordinal.year)?;
    let days = schema.days_in_year(ordinal.year);
    if ordinal.day_of_year < 1 || days < ordinal.day_of_year {
        return Err(Error::range("day-of-year", ordinal.day_of_year, 1, days));
    }
    Ok(())
}

/// Checks that an epoch day is within the schema's supported range.
///
/// # Errors
///
/// Returns a range error tagged `"epoch day"` otherwise.
#[inline]
pub fn check_epoch_day<S: Schema + ?Sized>(
    schema: &S,
    epoch_day: i64,
) -> Result<(), Error> {
    let bounds = Bounds::new(schema);
    if !bounds.contains_epoch_day(epoch_day) {
        let (min, max) = bounds.epoch_days();
        return Err(Error::range("epoch day", epoch_day, min, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::schema::{Coptic, Gregorian, Lunisolar, Pax};

    use super::*;

    #[test]
    fn first_invalid_field_wins() {
        // Year out of range trumps the (also bad) month and day.
        let err = check_date(&Gregorian, DateParts::new(10_000, 13, 99))
            .unwrap_err();
        assert!(err.to_string().contains("'year'"), "{err}");
        // Bad month trumps the bad day.
        let err =
            check_date(&Gregorian, DateParts::new(2024, 13, 99)).unwrap_err();
        assert!(err.to_string().contains("'month'"), "{err}");
        let err =
            check_date(&Gregorian, DateParts::new(2024, 12, 32)).unwrap_err();
        assert!(err.to_string().contains("'day'"), "{err}");
    }

    #[test]
    fn leap_day_validity() {
        assert!(check_date(&Gregorian, DateParts::new(2024, 2, 29)).is_ok());
        assert!(check_date(&Gregorian, DateParts::new(2025, 2, 29)).is_err());
        assert!(check_date(&Coptic, DateParts::new(3, 13, 6)).is_ok());
        assert!(check_date(&Coptic, DateParts::new(4, 13, 6)).is_err());
    }

    #[test]
    fn variable_month_count() {
        let pax = Pax::new();
        assert!(check_month(&pax, 6, 14).is_ok());
        assert!(check_month(&pax, 5, 14).is_err());
        let lunisolar = Lunisolar::new();
        assert!(check_month(&lunisolar, 3, 13).is_ok());
        assert!(check_month(&lunisolar, 2, 13).is_err());
    }

    #[test]
    fn ordinal_bounds() {
        assert!(check_ordinal(&Gregorian, OrdinalParts::new(2024, 366)).is_ok());
        let err = check_ordinal(&Gregorian, OrdinalParts::new(2025, 366))
            .unwrap_err();
        assert!(err.is_range());
        assert!(err.to_string().contains("'day-of-year'"), "{err}");
        assert!(check_ordinal(&Gregorian, OrdinalParts::new(2025, 0)).is_err());
    }

    #[test]
    fn epoch_day_bounds() {
        let bounds = Bounds::new(&Gregorian);
        let (min, max) = bounds.epoch_days();
        assert!(check_epoch_day(&Gregorian, min).is_ok());
        assert!(check_epoch_day(&Gregorian, max).is_ok());
        assert!(check_epoch_day(&Gregorian, min - 1).is_err());
        assert!(check_epoch_day(&Gregorian, max + 1).is_err());
    }
}
