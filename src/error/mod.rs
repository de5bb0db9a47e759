use crate::util::sync::Arc;

pub(crate) mod math;

/// An error that can occur in this crate.
///
/// The two common error categories are *range* errors (a year, month, day
/// or day-of-year field outside the bounds a schema derives for it, or a
/// day count outside a schema's supported epoch day range) and *ambiguity*
/// errors (calendrical addition under the
/// [`DateRule::Exact`](crate::DateRule::Exact) family of rules landing on a
/// day that does not exist in the target month or year).
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the `std`
/// feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides coarse predicates
/// only: [`Error::is_range`], [`Error::is_ambiguous`] and
/// [`Error::is_overflow`]. Everything else about an error is meant for
/// human eyes via its `Display` output.
///
/// # Design
///
/// There is exactly one error type for every fallible operation in this
/// crate. Finer grained error types compose poorly once validation and
/// arithmetic call into one another, and callers overwhelmingly either
/// propagate or print.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// The `Arc` keeps `Error` at one word and makes clones cheap, which
    /// matters because fallible arithmetic sits on hot paths and the `Ok`
    /// branch should pay as little as possible for the error type's size.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from Rust's
    /// standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// from this crate specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use calends::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from a field value being out
    /// of its schema-derived range.
    ///
    /// # Example
    ///
    /// ```
    /// use calends::{schema::Gregorian, validate, DateParts};
    ///
    /// let err = validate::check_date(&Gregorian, DateParts::new(2025, 2, 29))
    ///     .unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Range(_))
    }

    /// Returns true when this error originated from addition under an
    /// `Exact` rule landing on a day, month or day-of-year that does not
    /// exist in the target year.
    ///
    /// # Example
    ///
    /// ```
    /// use calends::{
    ///     math::{self, AdditionRuleset},
    ///     schema::Gregorian,
    ///     DateParts,
    /// };
    ///
    /// let feb29 = DateParts::new(2024, 2, 29);
    /// let err = math::add_years(&Gregorian, feb29, 1, AdditionRuleset::new())
    ///     .unwrap_err();
    /// assert!(err.is_ambiguous());
    /// ```
    pub fn is_ambiguous(&self) -> bool {
        use self::math::Error::*;
        matches!(
            *self.root().kind(),
            ErrorKind::Math(
                AmbiguousDay { .. }
                    | AmbiguousMonth { .. }
                    | AmbiguousOrdinal { .. }
            )
        )
    }

    /// Returns true when this error originated from a day count moving
    /// outside a schema's supported epoch day range.
    pub fn is_overflow(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Math(self::math::Error::Overflow { .. })
        )
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of which field is out
    /// of range (e.g., "month").
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    #[inline]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        // OK because we just created this error, so the Arc has exactly one
        // reference.
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        // OK because `Error::chain` is guaranteed to return a non-empty
        // iterator.
        self.chain().last().unwrap()
    }

    /// Returns a chain of error values, starting with the highest level
    /// context and ending with the root cause. The iterator returned is
    /// guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Math(self::math::Error),
    Range(RangeError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Math(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown calends error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// Everything raised inside this crate goes through a structured kind; this
/// only exists to back the `Error::from_args` public API, which permits
/// users to manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type includes a name describing which
/// input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait exists to make `Error::context` work without public `From`
/// impls for every structured kind, which would otherwise leak internal
/// error representation into the crate's API.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or
/// `Result<T, Error>`. Specifically, in the latter case, it absolves one of
/// the need to call `map_err` everywhere one wants to add context to an
/// error. (A trick borrowed from `anyhow`.)
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.into_error().context(consequent))
    }
}
