#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Immutable date and time values with calendar arithmetic, range
//! snapping, comparison, and formatting.
//!
//! A `Moment` is one point in time, read in a time zone, along with an
//! optional default format pattern and locale. Nothing changes it once
//! it’s built: the methods that look like they change it return new
//! moments instead.
//!
//! # Examples
//!
//! ```
//! use dateflow::{Moment, TimeZone, Unit, FormatPattern, DatePiece};
//!
//! let start = Moment::builder().date("2024-02-10").zone(TimeZone::utc()).build().unwrap();
//! let end   = Moment::builder().date("2024-04-05").zone(TimeZone::utc()).build().unwrap();
//!
//! assert_eq!(end.diff(&start, Unit::Day), 55);
//! assert_eq!(end.diff(&start, Unit::Month), 2);
//!
//! let pattern: FormatPattern = "DD/MM/YYYY".parse().unwrap();
//! assert_eq!(start.add(1, Unit::Week).format_with(pattern), "17/02/2024");
//! assert_eq!(start.start_of(Unit::Month).day(), 1);
//! ```

#[macro_use]
mod logging;

pub mod cal;
pub use crate::cal::{DatePiece, TimePiece, LocalDate, LocalDateTime, LocalTime, Month, Weekday, Year};
pub use crate::cal::zone::TimeZone;

mod clock;
pub use crate::clock::{Clock, FixedClock, SystemClock};

mod error;
pub use crate::error::{ConfigKind, Error};

mod format;
pub use crate::format::{DateLayout, FormatArg, FormatOptions, FormatPattern, LocaleTag, TimeLayout};

mod instant;
pub use crate::instant::{Instant, MAX_MILLIS};

mod moment;
pub use crate::moment::{AsInstant, Builder, DateInput, EqualMode, Moment};

mod system;

mod unit;
pub use crate::unit::Unit;
