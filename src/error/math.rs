use crate::error;

/// Structured failures raised by the arithmetic kernel.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    /// An `Exact` addition landed on a day that does not exist in the
    /// target month.
    AmbiguousDay { year: i32, month: i32, day: i32 },
    /// An `Exact` addition landed on a month that does not exist in the
    /// target year. Only schemas with a variable number of months per year
    /// can produce this.
    AmbiguousMonth { year: i32, month: i32 },
    /// An `Exact` addition landed on a day-of-year that does not exist in
    /// the target year.
    AmbiguousOrdinal { year: i32, day_of_year: i32 },
    /// Arithmetic moved the linear day count outside the schema's
    /// supported range. `unit` names the unit that was being added.
    Overflow { unit: &'static str },
    /// Context wrapper for month addition failures.
    FailedAddMonths,
    /// Context wrapper for year addition failures.
    FailedAddYears,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Math(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            AmbiguousDay { year, month, day } => write!(
                f,
                "day {day} does not exist in month {month} of year {year}, \
                 and the `Exact` rule forbids adjusting it",
            ),
            AmbiguousMonth { year, month } => write!(
                f,
                "month {month} does not exist in year {year}, \
                 and the `Exact` rule forbids adjusting it",
            ),
            AmbiguousOrdinal { year, day_of_year } => write!(
                f,
                "day-of-year {day_of_year} does not exist in year {year}, \
                 and the `Exact` rule forbids adjusting it",
            ),
            Overflow { unit } => write!(
                f,
                "adding {unit} moved the day count outside the \
                 schema's supported range",
            ),
            FailedAddMonths => f.write_str("failed to add months to date"),
            FailedAddYears => f.write_str("failed to add years to date"),
        }
    }
}
