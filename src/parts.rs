/*!
Plain date field bundles.

The types here are deliberately inert: a [`DateParts`] or [`OrdinalParts`]
value is just a bag of integers with no notion of validity. Whether
`(1741, 13, 6)` names a real day depends entirely on which
[`Schema`](crate::schema::Schema) it is interpreted against, so validity
checks live in [`validate`](crate::validate) and every operation in
[`convert`](crate::convert) and [`math`](crate::math) takes the schema
alongside the parts.
*/

/// A year, month and day, relative to some calendar schema.
///
/// The fields carry no validity guarantee on their own. Use
/// [`validate::check_date`](crate::validate::check_date) to check a
/// candidate value against a schema.
///
/// Ordering is lexicographic by year, then month, then day, which matches
/// chronological order for any two values interpreted against the same
/// schema.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateParts {
    /// The year. May be zero or negative in proleptic reckoning.
    pub year: i32,
    /// The month of the year, starting at `1`.
    pub month: i32,
    /// The day of the month, starting at `1`.
    pub day: i32,
}

impl DateParts {
    /// Bundles a year, month and day.
    ///
    /// No validation is performed.
    ///
    /// # Example
    ///
    /// ```
    /// use calends::DateParts;
    ///
    /// let d = DateParts::new(2024, 2, 29);
    /// assert_eq!((d.year, d.month, d.day), (2024, 2, 29));
    /// ```
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> DateParts {
        DateParts { year, month, day }
    }
}

impl Default for DateParts {
    /// The first day of year 1.
    fn default() -> DateParts {
        DateParts::new(1, 1, 1)
    }
}

impl core::fmt::Debug for DateParts {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl core::fmt::Display for DateParts {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// A year and day-of-year, relative to some calendar schema.
///
/// The ordinal representation skips the month subdivision entirely:
/// `day_of_year` runs from `1` to
/// [`days_in_year`](crate::schema::Schema::days_in_year). Use
/// [`validate::check_ordinal`](crate::validate::check_ordinal) to check a
/// candidate value against a schema.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrdinalParts {
    /// The year. May be zero or negative in proleptic reckoning.
    pub year: i32,
    /// The day of the year, starting at `1`.
    pub day_of_year: i32,
}

impl OrdinalParts {
    /// Bundles a year and day-of-year.
    ///
    /// No validation is performed.
    #[inline]
    pub const fn new(year: i32, day_of_year: i32) -> OrdinalParts {
        OrdinalParts { year, day_of_year }
    }
}

impl Default for OrdinalParts {
    /// The first day of year 1.
    fn default() -> OrdinalParts {
        OrdinalParts::new(1, 1)
    }
}

impl core::fmt::Debug for OrdinalParts {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04}-{:03}", self.year, self.day_of_year)
    }
}

impl core::fmt::Display for OrdinalParts {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}
