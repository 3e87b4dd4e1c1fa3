//! The `Moment` type: one fixed point in time, with the defaults used to
//! display it.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::cal::{DatePiece, TimePiece, LocalDateTime, LocalTime, Month, Weekday};
use crate::cal::iso::ISO;
use crate::cal::zone::TimeZone;
use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::format::{locale, manual, FormatArg, FormatPattern, LocaleTag};
use crate::instant::Instant;
use crate::unit::Unit;


/// An immutable point in time, plus an optional default format pattern
/// and locale to display it with, and the time zone its calendar fields
/// are read in.
///
/// Nothing ever changes a `Moment`: the arithmetic and snapping methods
/// all return new values, carrying over the configuration.
///
/// ```rust
/// use dateflow::{Moment, TimeZone, Unit, DatePiece};
///
/// let start = Moment::builder().date("2024-01-31").zone(TimeZone::utc()).build().unwrap();
/// let later = start.add(1, Unit::Month);
///
/// assert_eq!(later.day(), 2);
/// assert_eq!(start.day(), 31);
/// ```
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Moment {
    instant: Instant,
    format: Option<FormatPattern>,
    locale: Option<LocaleTag>,
    zone: TimeZone,
}

/// Anything a `Moment` can be built from.
#[derive(PartialEq, Debug, Clone)]
pub enum DateInput {

    /// The current time, as read from the builder’s clock.
    Now,

    /// An exact instant.
    Instant(Instant),

    /// A number of milliseconds since the Unix epoch.
    Timestamp(i64),

    /// A time from the standard library.
    System(SystemTime),

    /// An ISO 8601 date or date-time string.
    Text(String),
}

impl Default for DateInput {
    fn default() -> Self {
        DateInput::Now
    }
}

impl From<Instant> for DateInput {
    fn from(instant: Instant) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }
}

impl From<SystemTime> for DateInput {
    fn from(time: SystemTime) -> Self {
        DateInput::System(time)
    }
}

impl<'a> From<&'a str> for DateInput {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<Moment> for DateInput {
    fn from(moment: Moment) -> Self {
        DateInput::Instant(moment.instant)
    }
}

impl<'a> From<&'a Moment> for DateInput {
    fn from(moment: &'a Moment) -> Self {
        DateInput::Instant(moment.instant)
    }
}

impl DateInput {

    /// Works out the instant this input refers to, if it refers to a
    /// valid one.
    fn resolve(&self, clock: &dyn Clock, zone: TimeZone) -> Option<Instant> {
        match *self {
            DateInput::Now             => Some(clock.now()),
            DateInput::Instant(i)      => Some(i),
            DateInput::Timestamp(ms)   => Instant::at_ms(ms),
            DateInput::System(time)    => Instant::from_system_time(time),
            DateInput::Text(ref text)  => parse_text(text, zone),
        }
    }

    /// The input as it should appear in an error message.
    fn describe(&self) -> String {
        match *self {
            DateInput::Now             => "now".to_string(),
            DateInput::Instant(i)      => format!("{:?}", i),
            DateInput::Timestamp(ms)   => ms.to_string(),
            DateInput::System(time)    => format!("{:?}", time),
            DateInput::Text(ref text)  => text.clone(),
        }
    }
}

#[cfg(feature = "parse")]
fn parse_text(text: &str, zone: TimeZone) -> Option<Instant> {
    match crate::cal::parse::parse_instant(text, zone) {
        Ok(instant) => Some(instant),
        Err(_e) => {
            debug!("could not parse {:?}: {}", text, _e);
            None
        }
    }
}

#[cfg(not(feature = "parse"))]
fn parse_text(_text: &str, _zone: TimeZone) -> Option<Instant> {
    None
}


static SYSTEM_CLOCK: SystemClock = SystemClock;

/// Gathers the input and configuration for a new `Moment`.
///
/// Everything is optional: with nothing set, the builder produces the
/// current time in the system zone, with no default format or locale.
pub struct Builder<'c> {
    input: DateInput,
    format: Option<FormatPattern>,
    locale: Option<LocaleTag>,
    zone: TimeZone,
    clock: &'c dyn Clock,
}

impl<'c> fmt::Debug for Builder<'c> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Builder")
         .field("input", &self.input)
         .field("format", &self.format)
         .field("locale", &self.locale)
         .field("zone", &self.zone)
         .finish()
    }
}

impl<'c> Builder<'c> {

    /// The date to build from. Without one, the clock is asked for the
    /// current time.
    pub fn date<I: Into<DateInput>>(mut self, input: I) -> Self {
        self.input = input.into();
        self
    }

    /// The pattern `format()` uses when it isn’t given one.
    pub fn format(mut self, pattern: FormatPattern) -> Self {
        self.format = Some(pattern);
        self
    }

    /// The locale `format()` uses when it isn’t given one. Setting a
    /// locale also makes hour, minute, second, and millisecond steps keep
    /// the wall-clock time across daylight-saving changes.
    pub fn locale(mut self, locale: LocaleTag) -> Self {
        self.locale = Some(locale);
        self
    }

    /// The zone the calendar fields are read in. Also used to read
    /// date-time strings that have no offset of their own.
    pub fn zone(mut self, zone: TimeZone) -> Self {
        self.zone = zone;
        self
    }

    /// The clock that supplies the current time.
    pub fn clock<'d>(self, clock: &'d dyn Clock) -> Builder<'d> where 'c: 'd {
        Builder {
            input:  self.input,
            format: self.format,
            locale: self.locale,
            zone:   self.zone,
            clock,
        }
    }

    /// Resolves the input, failing with `Error::InvalidDate` if it
    /// doesn’t name a valid instant.
    pub fn build(self) -> Result<Moment, Error> {
        match self.input.resolve(self.clock, self.zone) {
            Some(instant) => Ok(Moment {
                instant,
                format: self.format,
                locale: self.locale,
                zone:   self.zone,
            }),
            None => {
                let input = self.input.describe();
                debug!("rejected date input {:?}", input);
                Err(Error::InvalidDate { input })
            }
        }
    }
}


/// How `Moment::equal` compares two moments.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum EqualMode {

    /// The same instant, to the millisecond.
    Strict,

    /// The same calendar day, ignoring the time of day.
    Short,
}

impl Default for EqualMode {
    fn default() -> Self {
        EqualMode::Strict
    }
}


/// Values that can be compared against a `Moment`.
///
/// Raw values may not name a valid instant, in which case there’s nothing
/// to compare and every comparison is false.
pub trait AsInstant {

    /// The instant this value refers to, if any.
    fn as_instant(&self) -> Option<Instant>;
}

impl AsInstant for Moment {
    fn as_instant(&self) -> Option<Instant> {
        Some(self.instant)
    }
}

impl AsInstant for Instant {
    fn as_instant(&self) -> Option<Instant> {
        Some(*self)
    }
}

impl AsInstant for SystemTime {
    fn as_instant(&self) -> Option<Instant> {
        Instant::from_system_time(*self)
    }
}

impl AsInstant for i64 {
    fn as_instant(&self) -> Option<Instant> {
        Instant::at_ms(*self)
    }
}

impl<'a, T: AsInstant + ?Sized> AsInstant for &'a T {
    fn as_instant(&self) -> Option<Instant> {
        (**self).as_instant()
    }
}


impl Moment {

    /// The current time, in the system zone.
    pub fn now() -> Self {
        Self::at(SYSTEM_CLOCK.now(), TimeZone::System)
    }

    /// Builds a moment from the given input, in the system zone, with no
    /// default format or locale.
    ///
    /// ```rust
    /// use dateflow::{Moment, Error};
    ///
    /// assert_eq!(Moment::new(0_i64).unwrap().value_of(), 0);
    /// assert!(matches!(Moment::new("not-a-date"), Err(Error::InvalidDate { .. })));
    /// ```
    pub fn new<I: Into<DateInput>>(input: I) -> Result<Self, Error> {
        Self::builder().date(input).build()
    }

    /// Starts building a moment.
    pub fn builder() -> Builder<'static> {
        Builder {
            input:  DateInput::Now,
            format: None,
            locale: None,
            zone:   TimeZone::System,
            clock:  &SYSTEM_CLOCK,
        }
    }

    fn at(instant: Instant, zone: TimeZone) -> Self {
        Self { instant, format: None, locale: None, zone }
    }

    fn with_instant(&self, instant: Instant) -> Self {
        Self { instant, ..*self }
    }

    fn local(&self) -> LocalDateTime {
        self.zone.to_local(self.instant)
    }


    // ---- arithmetic ----

    /// Returns a new moment the given amount of the unit later.
    ///
    /// Years, months, weeks, and days move the calendar fields in the
    /// moment’s zone, keeping the wall-clock time and rolling over when a
    /// day doesn’t exist in the target month. The other units add real
    /// elapsed time.
    ///
    /// When the moment has a default locale and an elapsed-time step
    /// crosses a change in its zone’s offset, the result is moved back by
    /// the change, so that the wall-clock time stays the same.
    pub fn add(&self, amount: i64, unit: Unit) -> Self {
        match (unit, unit.millis()) {
            (Unit::Year, _)         => self.add_calendar(amount, 0, 0),
            (Unit::Month, _)        => self.add_calendar(0, amount, 0),
            (Unit::Week, _)         => self.add_calendar(0, 0, amount.saturating_mul(7)),
            (Unit::Day, _)          => self.add_calendar(0, 0, amount),
            (_, Some(length))       => self.add_elapsed(amount.saturating_mul(length)),
            (_, None)               => *self,
        }
    }

    fn add_calendar(&self, years: i64, months: i64, days: i64) -> Self {
        let l = self.local();
        let target = LocalDateTime::from_fields(
            l.year().saturating_add(years),
            (l.month().months_from_january() as i64).saturating_add(months),
            (l.day() as i64).saturating_add(days),
            l.hour() as i64, l.minute() as i64, l.second() as i64, l.millisecond() as i64,
        );

        self.with_instant(self.zone.to_instant(target))
    }

    fn add_elapsed(&self, millis: i64) -> Self {
        let offset = self.zone.offset_at(self.instant);
        let mut instant = self.instant.shift(millis);

        if self.locale.is_some() {
            let new_offset = self.zone.offset_at(instant);
            if new_offset != offset {
                trace!("offset changed from {}s to {}s, correcting {:?}", offset, new_offset, instant);
                instant = instant.shift(-(new_offset - offset) * 1000);
            }
        }

        self.with_instant(instant)
    }

    /// Returns a new moment the given amount of the unit earlier. The same
    /// as adding the negated amount.
    pub fn subtract(&self, amount: i64, unit: Unit) -> Self {
        self.add(amount.saturating_neg(), unit)
    }


    // ---- snapping ----

    /// Returns the first millisecond of the unit this moment falls in.
    /// Weeks begin on Sunday.
    pub fn start_of(&self, unit: Unit) -> Self {
        let l = self.local();
        let (y, m, d) = (l.year(), l.month().months_from_january() as i64, l.day() as i64);
        let (h, mi, s) = (l.hour() as i64, l.minute() as i64, l.second() as i64);

        let start = match unit {
            Unit::Year         => LocalDateTime::from_fields(y, 0, 1, 0, 0, 0, 0),
            Unit::Month        => LocalDateTime::from_fields(y, m, 1, 0, 0, 0, 0),
            Unit::Week         => LocalDateTime::from_fields(y, m, d - l.weekday().days_from_sunday(), 0, 0, 0, 0),
            Unit::Day          => LocalDateTime::from_fields(y, m, d, 0, 0, 0, 0),
            Unit::Hour         => LocalDateTime::from_fields(y, m, d, h, 0, 0, 0),
            Unit::Minute       => LocalDateTime::from_fields(y, m, d, h, mi, 0, 0),
            Unit::Second       => LocalDateTime::from_fields(y, m, d, h, mi, s, 0),
            Unit::Millisecond  => return *self,
        };

        self.with_instant(self.zone.to_instant(start))
    }

    /// Returns the last millisecond of the unit this moment falls in.
    /// Weeks end on Saturday.
    pub fn end_of(&self, unit: Unit) -> Self {
        let l = self.local();
        let (y, m, d) = (l.year(), l.month().months_from_january() as i64, l.day() as i64);
        let (h, mi, s) = (l.hour() as i64, l.minute() as i64, l.second() as i64);

        let end = match unit {
            Unit::Year         => LocalDateTime::from_fields(y, 11, 31, 23, 59, 59, 999),
            Unit::Month        => LocalDateTime::from_fields(y, m + 1, 0, 23, 59, 59, 999),
            Unit::Week         => LocalDateTime::from_fields(y, m, d + 6 - l.weekday().days_from_sunday(), 23, 59, 59, 999),
            Unit::Day          => LocalDateTime::new(l.date(), LocalTime::last_millisecond()),
            Unit::Hour         => LocalDateTime::from_fields(y, m, d, h, 59, 59, 999),
            Unit::Minute       => LocalDateTime::from_fields(y, m, d, h, mi, 59, 999),
            Unit::Second       => LocalDateTime::from_fields(y, m, d, h, mi, s, 999),
            Unit::Millisecond  => return *self,
        };

        self.with_instant(self.zone.to_instant_later(end))
    }


    // ---- comparison ----

    /// Whether this moment comes strictly before the other.
    pub fn is_before<T: AsInstant>(&self, other: T) -> bool {
        other.as_instant().map_or(false, |o| self.instant < o)
    }

    /// Whether this moment comes strictly after the other.
    pub fn is_after<T: AsInstant>(&self, other: T) -> bool {
        other.as_instant().map_or(false, |o| self.instant > o)
    }

    /// Whether this moment and the other are the same instant, or, with
    /// `EqualMode::Short`, fall on the same day in this moment’s zone.
    pub fn equal<T: AsInstant>(&self, other: T, mode: EqualMode) -> bool {
        let other = match other.as_instant() {
            Some(o) => o,
            None    => return false,
        };

        match mode {
            EqualMode::Strict => self.instant == other,
            EqualMode::Short  => self.local().date() == self.zone.to_local(other).date(),
        }
    }

    /// How many of the unit this moment lies after the other, rounded
    /// towards the past.
    ///
    /// Months and years are counted on the calendar, ignoring the day and
    /// time entirely, so January 31st to February 1st is one month.
    pub fn diff(&self, other: &Moment, unit: Unit) -> i64 {
        match unit.millis() {
            Some(length) => (self.instant.millis() - other.instant.millis()).div_euclid(length),
            None => {
                let (this, that) = (self.local(), other.local());
                let years = this.year() - that.year();

                if unit == Unit::Year {
                    years
                }
                else {
                    years * 12 + this.month().months_from_january() as i64
                               - that.month().months_from_january() as i64
                }
            }
        }
    }


    // ---- formatting ----

    /// Formats this moment with its default pattern and locale.
    pub fn format(&self) -> String {
        self.format_with(FormatArg::Default)
    }

    /// Formats this moment, with the given pattern or locale taking
    /// precedence over the defaults.
    ///
    /// ```rust
    /// use dateflow::{Moment, FormatPattern, TimeZone};
    ///
    /// let moment = Moment::builder().date("2024-12-25").zone(TimeZone::utc()).build().unwrap();
    /// let pattern: FormatPattern = "DD/MM/YYYY".parse().unwrap();
    /// assert_eq!(moment.format_with(pattern), "25/12/2024");
    /// assert_eq!(moment.format(), "2024-12-25T00:00:00.000Z");
    /// ```
    pub fn format_with<A: Into<FormatArg>>(&self, arg: A) -> String {
        match arg.into().resolve(self.format, self.locale) {
            (pattern, Some(tag))   => locale::render(self.instant, tag, pattern),
            (Some(pattern), None)  => manual::substitute(pattern.as_str(), &self.local()),
            (None, None)           => self.to_iso_string(),
        }
    }

    /// The instant in ISO 8601 form in UTC, such as
    /// `2024-02-10T00:00:00.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.instant.iso().to_string()
    }


    // ---- configuration ----

    /// Milliseconds since the Unix epoch.
    pub fn value_of(&self) -> i64 {
        self.instant.millis()
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn default_format(&self) -> Option<FormatPattern> {
        self.format
    }

    pub fn default_locale(&self) -> Option<LocaleTag> {
        self.locale
    }

    pub fn zone(&self) -> TimeZone {
        self.zone
    }

    /// The same instant with a different default pattern.
    pub fn with_format(&self, format: Option<FormatPattern>) -> Self {
        Self { format, ..*self }
    }

    /// The same instant with a different default locale.
    pub fn with_locale(&self, locale: Option<LocaleTag>) -> Self {
        Self { locale, ..*self }
    }

    /// The same instant, read in a different zone.
    pub fn with_zone(&self, zone: TimeZone) -> Self {
        Self { zone, ..*self }
    }
}

impl DatePiece for Moment {
    fn year(&self) -> i64 { self.local().year() }
    fn month(&self) -> Month { self.local().month() }
    fn day(&self) -> i8 { self.local().day() }
    fn yearday(&self) -> i16 { self.local().yearday() }
    fn weekday(&self) -> Weekday { self.local().weekday() }
}

impl TimePiece for Moment {
    fn hour(&self) -> i8 { self.local().hour() }
    fn minute(&self) -> i8 { self.local().minute() }
    fn second(&self) -> i8 { self.local().second() }
    fn millisecond(&self) -> i16 { self.local().millisecond() }
}

impl From<Instant> for Moment {
    fn from(instant: Instant) -> Self {
        Self::at(instant, TimeZone::System)
    }
}

impl FromStr for Moment {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for Moment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Moment({}", self.to_iso_string())?;
        if let Some(format) = self.format {
            write!(f, ", {}", format)?;
        }
        if let Some(locale) = self.locale {
            write!(f, ", {}", locale)?;
        }
        write!(f, ", {:?})", self.zone)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::FixedClock;

    fn utc(millis: i64) -> Moment {
        Moment::builder().date(millis).zone(TimeZone::utc()).build().unwrap()
    }

    #[test]
    fn clock_supplies_now() {
        let clock = FixedClock(Instant::at_ms(42).unwrap());
        let moment = Moment::builder().clock(&clock).build().unwrap();
        assert_eq!(moment.value_of(), 42);
    }

    #[test]
    fn timestamp_out_of_range() {
        let result = Moment::new(crate::instant::MAX_MILLIS + 1);
        assert_eq!(result, Err(Error::InvalidDate { input: "8640000000000001".to_string() }));
    }

    #[test]
    fn from_other_moment() {
        let original = utc(1234);
        assert_eq!(Moment::new(&original).unwrap().value_of(), 1234);
    }

    #[test]
    fn weeks_are_seven_days() {
        assert_eq!(utc(0).add(2, Unit::Week).value_of(), 14 * 86_400_000);
    }

    #[test]
    fn fixed_units_floor() {
        assert_eq!(utc(-1).diff(&utc(0), Unit::Second), -1);
        assert_eq!(utc(1999).diff(&utc(0), Unit::Second), 1);
    }

    #[test]
    fn huge_amounts_saturate() {
        let far = utc(0).add(i64::max_value(), Unit::Year);
        assert_eq!(far.value_of(), crate::instant::MAX_MILLIS);

        let past = utc(0).subtract(i64::max_value(), Unit::Millisecond);
        assert_eq!(past.value_of(), -crate::instant::MAX_MILLIS);
    }

    #[test]
    fn invalid_raw_values_never_compare() {
        let moment = utc(0);
        assert!(!moment.is_before(i64::max_value()));
        assert!(!moment.is_after(i64::min_value()));
        assert!(!moment.equal(i64::max_value(), EqualMode::Short));
    }

    #[test]
    fn debug_lists_configuration() {
        let moment = utc(0).with_locale(Some(LocaleTag::ItIt));
        assert_eq!(format!("{:?}", moment), "Moment(1970-01-01T00:00:00.000Z, it-IT, TimeZone(+0s))");
    }
}
