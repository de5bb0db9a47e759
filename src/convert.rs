/*!
Conversion between date fields and linear day counts.

Everything here is defined purely in terms of [`Schema`] queries; no
calendar-specific constant appears in this module. The forward direction is
prefix-sum accumulation:

```text
epoch_day = epoch + days_before_year(y) + days_before_month(y, m) + (d - 1)
```

The backward direction estimates the year from the schema's average year
length (the [`year_cycle`](Schema::year_cycle) rational) and corrects by
single-year steps. The estimate is never off by more than the accumulated
jitter of the leap rule within one cycle, so the correction loop runs a
small constant number of times and both directions are O(1).

Inputs are assumed valid for the given schema: callers construct values
through [`validate`](crate::validate) or receive them from this crate's own
arithmetic. Debug builds assert validity; release builds compute garbage
for garbage without panicking.
*/

use crate::{
    parts::{DateParts, OrdinalParts},
    schema::Schema,
};

/// Converts a date to its epoch day number.
///
/// This is the month/day overload; see [`ordinal_to_epoch_day`] for the
/// day-of-year one.
///
/// # Example
///
/// ```
/// use calends::{convert, schema::Gregorian, DateParts};
///
/// // Rata Die: day 1 is 0001-01-01.
/// assert_eq!(convert::to_epoch_day(&Gregorian, DateParts::new(1, 1, 1)), 1);
/// // The Unix epoch.
/// assert_eq!(
///     convert::to_epoch_day(&Gregorian, DateParts::new(1970, 1, 1)),
///     719_163,
/// );
/// ```
#[inline]
pub fn to_epoch_day<S: Schema + ?Sized>(schema: &S, date: DateParts) -> i64 {
    debug_assert!(
        crate::validate::check_date(schema, date).is_ok(),
        "invalid date {date} for {schema:?}",
    );
    schema.epoch()
        + schema.days_before_year(date.year)
        + i64::from(schema.days_before_month(date.year, date.month))
        + i64::from(date.day - 1)
}

/// Converts an epoch day number to a date.
///
/// This is the exact inverse of [`to_epoch_day`] for every epoch day
/// within the schema's supported range.
///
/// # Example
///
/// ```
/// use calends::{convert, schema::{Coptic, Gregorian}, DateParts};
///
/// let date = convert::from_epoch_day(&Gregorian, 719_163);
/// assert_eq!(date, DateParts::new(1970, 1, 1));
///
/// // The same day under a different schema.
/// let date = convert::from_epoch_day(&Coptic, 719_163);
/// assert_eq!(date, DateParts::new(1686, 4, 23));
/// ```
#[inline]
pub fn from_epoch_day<S: Schema + ?Sized>(
    schema: &S,
    epoch_day: i64,
) -> DateParts {
    let ordinal = epoch_day_to_ordinal(schema, epoch_day);
    let (month, day) = schema.month_day(ordinal.year, ordinal.day_of_year);
    DateParts::new(ordinal.year, month, day)
}

/// Converts an ordinal date to its epoch day number.
#[inline]
pub fn ordinal_to_epoch_day<S: Schema + ?Sized>(
    schema: &S,
    ordinal: OrdinalParts,
) -> i64 {
    debug_assert!(
        crate::validate::check_ordinal(schema, ordinal).is_ok(),
        "invalid ordinal date {ordinal} for {schema:?}",
    );
    schema.epoch()
        + schema.days_before_year(ordinal.year)
        + i64::from(ordinal.day_of_year - 1)
}

/// Converts an epoch day number to an ordinal date.
///
/// This is the exact inverse of [`ordinal_to_epoch_day`] for every epoch
/// day within the schema's supported range.
#[inline]
pub fn epoch_day_to_ordinal<S: Schema + ?Sized>(
    schema: &S,
    epoch_day: i64,
) -> OrdinalParts {
    debug_assert!(
        crate::validate::check_epoch_day(schema, epoch_day).is_ok(),
        "epoch day {epoch_day} out of range for {schema:?}",
    );
    // Days since the schema's 0001-01-01, zero based.
    let days = epoch_day - schema.epoch();

    // Estimate the year from the cycle's exact average year length, then
    // walk the estimate onto the right year. The walk is what makes this
    // exact; the estimate is what makes it cheap. For any in-range epoch
    // day the true year is within the schema's bounds, so the clamp never
    // moves a good estimate.
    let (cycle_days, cycle_years) = schema.year_cycle();
    let (min_year, max_year) = schema.year_bounds();
    let estimate = 1 + (days * cycle_years).div_euclid(cycle_days);
    let mut year =
        estimate.clamp(i64::from(min_year), i64::from(max_year)) as i32;
    loop {
        let before = schema.days_before_year(year);
        if days < before {
            year -= 1;
        } else if days - before >= i64::from(schema.days_in_year(year)) {
            year += 1;
        } else {
            let day_of_year = (days - before) as i32 + 1;
            return OrdinalParts::new(year, day_of_year);
        }
    }
}

/// Converts a date to the ordinal representation of the same day.
#[inline]
pub fn date_to_ordinal<S: Schema + ?Sized>(
    schema: &S,
    date: DateParts,
) -> OrdinalParts {
    OrdinalParts::new(
        date.year,
        schema.day_of_year(date.year, date.month, date.day),
    )
}

/// Converts an ordinal date to the month/day representation of the same
/// day.
#[inline]
pub fn ordinal_to_date<S: Schema + ?Sized>(
    schema: &S,
    ordinal: OrdinalParts,
) -> DateParts {
    let (month, day) = schema.month_day(ordinal.year, ordinal.day_of_year);
    DateParts::new(ordinal.year, month, day)
}

#[cfg(test)]
mod tests {
    use crate::schema::{
        Coptic, Egyptian, FrenchRepublican, Gregorian, InternationalFixed,
        Julian, Lunisolar, Pax, Persian2820, Positivist, Schema,
        TabularIslamic, Tropicalia, Tropicalia3031, Tropicalia3130, World,
    };

    use super::*;

    fn all_schemas() -> std::vec::Vec<alloc::boxed::Box<dyn Schema>> {
        std::vec![
            alloc::boxed::Box::new(Gregorian),
            alloc::boxed::Box::new(Julian),
            alloc::boxed::Box::new(Coptic),
            alloc::boxed::Box::new(Egyptian),
            alloc::boxed::Box::new(FrenchRepublican),
            alloc::boxed::Box::new(Persian2820::new()),
            alloc::boxed::Box::new(TabularIslamic),
            alloc::boxed::Box::new(Lunisolar::new()),
            alloc::boxed::Box::new(Pax::new()),
            alloc::boxed::Box::new(World),
            alloc::boxed::Box::new(InternationalFixed),
            alloc::boxed::Box::new(Positivist),
            alloc::boxed::Box::new(Tropicalia),
            alloc::boxed::Box::new(Tropicalia3031),
            alloc::boxed::Box::new(Tropicalia3130),
        ]
    }

    #[test]
    fn epoch_constants() {
        // Each schema's year 1 day 1 must land on its documented epoch.
        for schema in all_schemas() {
            let schema = &*schema;
            assert_eq!(
                to_epoch_day(schema, DateParts::new(1, 1, 1)),
                schema.epoch(),
                "{schema:?}",
            );
        }
    }

    #[test]
    fn gregorian_known_days() {
        let rd = |y, m, d| to_epoch_day(&Gregorian, DateParts::new(y, m, d));
        assert_eq!(rd(1, 1, 1), 1);
        assert_eq!(rd(0, 12, 31), 0);
        assert_eq!(rd(0, 1, 1), -365);
        assert_eq!(rd(1970, 1, 1), 719_163);
        assert_eq!(rd(2000, 1, 1), 730_120);
        // 9999-12-31 is the largest supported Gregorian date.
        assert_eq!(rd(9999, 12, 31), 3_652_059);
    }

    #[test]
    fn cross_calendar_correspondences() {
        // All of these name the same physical days under two schemas.
        let persian = Persian2820::new();
        let pairs: &[(&dyn Schema, DateParts, &dyn Schema, DateParts)] = &[
            // Julian 0001-01-01 is Gregorian 0000-12-30.
            (&Julian, DateParts::new(1, 1, 1), &Gregorian, DateParts::new(0, 12, 30)),
            // The Coptic epoch in the Julian calendar.
            (&Coptic, DateParts::new(1, 1, 1), &Julian, DateParts::new(284, 8, 29)),
            // A recent Coptic new year.
            (&Coptic, DateParts::new(1741, 1, 1), &Gregorian, DateParts::new(2024, 9, 11)),
            // The Nabonassar epoch in the Julian calendar.
            (&Egyptian, DateParts::new(1, 1, 1), &Julian, DateParts::new(-746, 2, 26)),
            // The Republican epoch.
            (&FrenchRepublican, DateParts::new(1, 1, 1), &Gregorian, DateParts::new(1792, 9, 22)),
            // A recent Persian new year (Nowruz).
            (&persian, DateParts::new(1375, 1, 1), &Gregorian, DateParts::new(1996, 3, 20)),
            // A recent tabular Islamic new year.
            (&TabularIslamic, DateParts::new(1443, 1, 1), &Gregorian, DateParts::new(2021, 8, 10)),
            // The Positivist epoch.
            (&Positivist, DateParts::new(1, 1, 1), &Gregorian, DateParts::new(1789, 1, 1)),
        ];
        for &(s1, d1, s2, d2) in pairs {
            let day = to_epoch_day(s1, d1);
            assert_eq!(day, to_epoch_day(s2, d2), "{d1} vs {d2}");
            assert_eq!(from_epoch_day(s1, day), d1, "{s1:?}");
            assert_eq!(from_epoch_day(s2, day), d2, "{s2:?}");
        }
    }

    #[test]
    fn consecutive_days_cross_boundaries() {
        // Crossing a month or year boundary still increments the day
        // count by exactly one.
        let (pax, lunisolar) = (Pax::new(), Lunisolar::new());
        let cases: &[(&dyn Schema, DateParts, DateParts)] = &[
            (&Gregorian, DateParts::new(3, 2, 28), DateParts::new(3, 3, 1)),
            (&Gregorian, DateParts::new(4, 2, 29), DateParts::new(4, 3, 1)),
            (&Gregorian, DateParts::new(3, 12, 31), DateParts::new(4, 1, 1)),
            (&Coptic, DateParts::new(3, 13, 6), DateParts::new(4, 1, 1)),
            (&Coptic, DateParts::new(4, 13, 5), DateParts::new(5, 1, 1)),
            (&pax, DateParts::new(6, 12, 28), DateParts::new(6, 13, 1)),
            (&pax, DateParts::new(6, 14, 28), DateParts::new(7, 1, 1)),
            (&World, DateParts::new(1, 12, 31), DateParts::new(2, 1, 1)),
            (&lunisolar, DateParts::new(3, 13, 30), DateParts::new(4, 1, 1)),
        ];
        for &(schema, before, after) in cases {
            assert_eq!(
                to_epoch_day(schema, before) + 1,
                to_epoch_day(schema, after),
                "{schema:?}: {before} -> {after}",
            );
        }
    }

    #[test]
    fn roundtrip_all_schemas_near_year_one() {
        // Walk every day of a window straddling year 1 for every schema:
        // date -> epoch day -> date and ordinal -> epoch day -> ordinal.
        for schema in all_schemas() {
            let schema = &*schema;
            let start = to_epoch_day(schema, DateParts::new(-3, 1, 1));
            let end = to_epoch_day(
                schema,
                DateParts::new(3, 1, 1),
            );
            for day in start..=end {
                let date = from_epoch_day(schema, day);
                assert_eq!(
                    to_epoch_day(schema, date),
                    day,
                    "{schema:?}: {date}",
                );
                let ordinal = epoch_day_to_ordinal(schema, day);
                assert_eq!(ordinal_to_epoch_day(schema, ordinal), day);
                assert_eq!(ordinal_to_date(schema, ordinal), date);
                assert_eq!(date_to_ordinal(schema, date), ordinal);
            }
        }
    }

    #[test]
    fn roundtrip_all_schemas_scattered() {
        // Sparse sampling across each schema's whole supported range, so
        // the year-estimate correction gets hit far from the epoch too.
        for schema in all_schemas() {
            let schema = &*schema;
            let (min_year, max_year) = schema.year_bounds();
            let min = to_epoch_day(schema, DateParts::new(min_year, 1, 1));
            let last_month = schema.months_in_year(max_year);
            let max = to_epoch_day(
                schema,
                DateParts::new(
                    max_year,
                    last_month,
                    schema.days_in_month(max_year, last_month),
                ),
            );
            let mut day = min;
            while day <= max {
                let date = from_epoch_day(schema, day);
                assert_eq!(
                    to_epoch_day(schema, date),
                    day,
                    "{schema:?}: {date}",
                );
                // A stride coprime to week and month lengths.
                day += 10_007;
            }
        }
    }

    quickcheck::quickcheck! {
        fn prop_gregorian_roundtrip(day: i32) -> bool {
            // Clamp into the supported epoch day range.
            let day = i64::from(day) % 3_652_059;
            let date = from_epoch_day(&Gregorian, day);
            to_epoch_day(&Gregorian, date) == day
        }

        fn prop_pax_roundtrip(day: i32) -> bool {
            let day = i64::from(day) % 3_652_059;
            let schema = Pax::new();
            let date = from_epoch_day(&schema, day);
            to_epoch_day(&schema, date) == day
        }

        fn prop_lunisolar_roundtrip(day: i32) -> bool {
            // A lunisolar mean year is a hair shorter, so its ±9999-year
            // window is narrower than the solar schemas'.
            let day = i64::from(day) % 3_600_000;
            let schema = Lunisolar::new();
            let date = from_epoch_day(&schema, day);
            to_epoch_day(&schema, date) == day
        }
    }
}
