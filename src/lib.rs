/*!
A multi-calendar date arithmetic kernel.

This crate answers, for a pluggable set of calendar systems, the questions
that every date library ultimately reduces to: how long is a year, how long
is a month, which years are leap years, how does a `(year, month, day)`
triple map to a linear day count and how does calendrical addition behave
when it lands on a day that does not exist.

The central abstraction is the [`schema::Schema`] trait: a pure, immutable
description of one calendar's shape. Everything else is generic code over
that trait:

* [`convert`] maps between [`DateParts`]/[`OrdinalParts`] and a signed
  *epoch day* count. Day 1 is 0001-01-01 of the proleptic Gregorian
  calendar (the "Rata Die" convention), so epoch days are the one
  representation that different calendars can be compared through.
* [`math`] implements calendrical addition and difference. Results that
  land on a nonexistent day (for example February 29 plus one year) are
  resolved by an explicit [`AdditionRuleset`] rather than by a hard-coded
  policy.
* [`validate`] checks candidate fields against a schema's bounds and
  reports the first invalid field by name.

# Example

Add one month to the last day of January, under both overflow policies:

```
use calends::{
    math::{self, AdditionRuleset, DateRule},
    schema::Gregorian,
    DateParts,
};

let jan31 = DateParts::new(2025, 1, 31);

let clamp = AdditionRuleset::new().date(DateRule::EndOfMonth);
assert_eq!(
    math::add_months(&Gregorian, jan31, 1, clamp)?,
    DateParts::new(2025, 2, 28),
);

let roll = AdditionRuleset::new().date(DateRule::StartOfNextMonth);
assert_eq!(
    math::add_months(&Gregorian, jan31, 1, roll)?,
    DateParts::new(2025, 3, 1),
);

# Ok::<(), calends::Error>(())
```

Convert a date between calendars through the shared epoch day count:

```
use calends::{convert, schema::{Coptic, Gregorian}, DateParts};

let day = convert::to_epoch_day(&Gregorian, DateParts::new(2024, 9, 11));
assert_eq!(convert::from_epoch_day(&Coptic, day), DateParts::new(1741, 1, 1));
```

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for this
  crate's error type. Disabling it makes the crate `no_std` (an allocator
  is still required for error values).
* **logging** - Emits messages via the `log` crate on cold paths, such as
  cycle table construction. There is no logging on arithmetic hot paths.
* **serde** - Implements `serde::Serialize` and `serde::Deserialize` for
  the plain value and configuration types.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Error values carry their message and cause chain on the heap so that
// `Error` stays one word and cheap to clone. There is no non-alloc mode.
extern crate alloc;

pub use crate::{
    error::Error,
    math::{AdditionRuleset, CountCutoff, DateRule, MonthRule, OrdinalRule},
    parts::{DateParts, OrdinalParts},
};

#[macro_use]
mod logging;

pub mod convert;
mod error;
pub mod math;
mod parts;
pub mod schema;
mod util;
pub mod validate;
