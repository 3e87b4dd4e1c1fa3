//! Turning ISO 8601 strings into instants.
//!
//! The rules follow what web browsers do with the same strings, since
//! that is what most callers expect:
//!
//! - a date on its own, such as `2024-02-10`, means midnight **UTC**;
//! - a date-time with `Z` or a numeric offset means exactly that instant;
//! - a date-time with no offset is wall-clock time in the given zone.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Error as DateTimeError};
use crate::cal::zone::TimeZone;
use crate::instant::Instant;


/// Parses the given text as an instant, reading offset-less date-times in
/// the given zone.
pub(crate) fn parse_instant(input: &str, zone: TimeZone) -> Result<Instant, Error> {
    let input = input.trim();

    if input.contains('T') {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date = fields_to_date(fields.date).map_err(Error::Date)?;
        let time = fields_to_time(&fields.time).map_err(Error::Date)?;
        let local = LocalDateTime::new(date, time);

        let instant = if has_offset(input) {
            let offset = (fields.time.tz_offset_hours as i64 * 60 + fields.time.tz_offset_minutes as i64) * 60_000;
            Instant::at_ms(local.to_epoch_ms() - offset)
        }
        else {
            Some(zone.to_instant(local))
        };

        instant.ok_or(Error::Date(DateTimeError::OutOfRange))
    }
    else if is_date_only(input) {
        let fields = iso8601::date(input).map_err(Error::Parse)?;
        let date = fields_to_date(fields).map_err(Error::Date)?;

        let local = LocalDateTime::new(date, LocalTime::midnight());
        Instant::at_ms(local.to_epoch_ms()).ok_or(Error::Date(DateTimeError::OutOfRange))
    }
    else {
        Err(Error::Parse(format!("not an ISO 8601 date or date-time: {:?}", input)))
    }
}

/// Whether the time part of a date-time string carries a `Z` or a numeric
/// offset.
fn has_offset(input: &str) -> bool {
    match input.find('T') {
        Some(pos) => input[pos + 1 ..].contains(|c| c == 'Z' || c == 'z' || c == '+' || c == '-'),
        None      => false,
    }
}

/// Whether the string is shaped like a calendar or ordinal date with
/// nothing after it. The ISO 8601 parser stops at the end of the date and
/// ignores any trailing text, so that has to be ruled out here.
fn is_date_only(input: &str) -> bool {
    let digits = input.trim_start_matches(|c| c == '+' || c == '-');
    !digits.is_empty()
        && digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '-')
}

fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, DateTimeError> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(month as i8)?;
            if day > 31 {
                return Err(DateTimeError::OutOfRange);
            }
            LocalDate::ymd(year as i64, month_variant, day as i8)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        }
        iso8601::Date::Week { .. } => {
            Err(DateTimeError::OutOfRange)
        }
    }
}

fn fields_to_time(fields: &iso8601::Time) -> Result<LocalTime, DateTimeError> {
    if fields.hour > 23 || fields.minute > 59 || fields.second > 59 || fields.millisecond > 999 {
        return Err(DateTimeError::OutOfRange);
    }

    LocalTime::hms_ms(fields.hour as i8, fields.minute as i8, fields.second as i8, fields.millisecond as i16)
}


/// Why a string could not be parsed.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {
    Date(DateTimeError),
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Date(ref error)    => write!(f, "parsing resulted in an invalid date: {}", error),
            Error::Parse(ref string)  => write!(f, "parse error: {}", string),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Date(ref error)  => Some(error),
            Error::Parse(_)         => None,
        }
    }
}
