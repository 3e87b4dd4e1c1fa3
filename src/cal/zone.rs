//! Time zones: the rules that turn instants into wall-clock date-times
//! and back again.
//!
//! A zone here is either the operating system’s local zone, a fixed
//! offset from UTC, or one of a small table of named zones described by
//! their current daylight-saving rules. There is no time zone database:
//! named zones apply today’s rules to every year.

use std::fmt;

use crate::cal::{DatePiece, LocalDate, LocalDateTime, Month};
use crate::cal::datetime::MILLIS_IN_DAY;
use crate::error::{ConfigKind, Error};
use crate::instant::Instant;
use crate::system::sys_offset;


/// A **time zone**, which maps every instant to an offset from UTC.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum TimeZone {

    /// Whatever the operating system considers local time.
    System,

    /// A fixed number of seconds east of UTC.
    Fixed(i32),

    /// One of the zones in `ZONES`.
    Named(&'static ZoneRule),
}

impl TimeZone {

    /// The operating system’s local zone.
    pub fn system() -> Self {
        TimeZone::System
    }

    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        TimeZone::Fixed(0)
    }

    /// A zone that is always the given number of seconds east of UTC.
    /// Offsets of a whole day or more are rejected.
    pub fn fixed(seconds: i32) -> Result<Self, Error> {
        if seconds > -86400 && seconds < 86400 {
            Ok(TimeZone::Fixed(seconds))
        }
        else {
            Err(Error::InvalidConfig { kind: ConfigKind::Zone, value: seconds.to_string() })
        }
    }

    /// Looks up a zone by its zoneinfo name, such as “Europe/Rome”.
    pub fn named(name: &str) -> Result<Self, Error> {
        ZONES.iter()
             .find(|rule| rule.name == name)
             .map(TimeZone::Named)
             .ok_or_else(|| Error::InvalidConfig { kind: ConfigKind::Zone, value: name.to_string() })
    }

    /// Returns this zone’s name in the zoneinfo database, if it has one.
    pub fn zone_name(&self) -> Option<&'static str> {
        match *self {
            TimeZone::Named(rule) => Some(rule.name),
            TimeZone::Fixed(0)    => Some("UTC"),
            _                     => None,
        }
    }

    /// Returns the total offset from UTC, in seconds, that this time zone
    /// has at the given instant.
    pub fn offset_at(&self, instant: Instant) -> i64 {
        match *self {
            TimeZone::System       => sys_offset(instant.seconds()),
            TimeZone::Fixed(s)     => s as i64,
            TimeZone::Named(rule)  => rule.offset(instant.seconds()),
        }
    }

    /// Returns the wall-clock date-time in this zone at the given instant.
    pub fn to_local(&self, instant: Instant) -> LocalDateTime {
        LocalDateTime::from_epoch_ms(instant.millis() + self.offset_at(instant) * 1000)
    }

    /// Finds the instant at which the wall clock in this zone shows the
    /// given date-time.
    ///
    /// Some wall-clock times happen twice, when the clocks go back; this
    /// picks the earlier one. Others never happen at all, when the clocks
    /// go forward; these are read using the offset from before the
    /// transition, which lands them just after it.
    pub fn to_instant(&self, local: LocalDateTime) -> Instant {
        self.resolve(local, false)
    }

    /// Like `to_instant`, but picks the later of two instants when the
    /// wall-clock time happens twice.
    pub fn to_instant_later(&self, local: LocalDateTime) -> Instant {
        self.resolve(local, true)
    }

    fn resolve(&self, local: LocalDateTime, later: bool) -> Instant {
        let wall = local.to_epoch_ms();

        if let TimeZone::Fixed(s) = *self {
            return Instant::saturating(wall - s as i64 * 1000);
        }

        let at = |offset: i64| Instant::saturating(wall - offset * 1000);
        let fits = |offset: i64| self.offset_at(at(offset)) == offset;

        let before = self.offset_at(Instant::saturating(wall - MILLIS_IN_DAY));
        let after  = self.offset_at(Instant::saturating(wall + MILLIS_IN_DAY));

        match (fits(before), fits(after)) {
            (true, true) if later  => at(before.min(after)),
            (true, true)    => at(before.max(after)),
            (true, false)   => at(before),
            (false, true)   => at(after),
            (false, false)  => at(before),
        }
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        TimeZone::System
    }
}

impl fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TimeZone::System       => write!(f, "TimeZone(system)"),
            TimeZone::Fixed(s)     => write!(f, "TimeZone({:+}s)", s),
            TimeZone::Named(rule)  => write!(f, "TimeZone({})", rule.name),
        }
    }
}


/// The rules of a named zone: a standard offset, and optionally a
/// daylight-saving period every year.
#[derive(PartialEq, Eq, Debug)]
pub struct ZoneRule {

    /// This zone’s name in the zoneinfo database, such as “America/New_York”.
    pub name: &'static str,

    /// The offset from UTC outside of daylight-saving time, in seconds.
    pub standard: i64,

    /// When daylight-saving time applies, if ever.
    pub daylight: Option<DaylightRule>,
}

/// A yearly daylight-saving period.
#[derive(PartialEq, Eq, Debug)]
pub struct DaylightRule {

    /// The extra offset in effect during the period, in seconds.
    pub save: i64,

    /// When the period begins each year.
    pub start: Transition,

    /// When the period ends each year.
    pub end: Transition,
}

/// A yearly changeover, given as “the *n*th Sunday of a month, at a time
/// of day”.
#[derive(PartialEq, Eq, Debug)]
pub struct Transition {
    pub month: Month,
    pub sunday: WhichSunday,

    /// Seconds after midnight, in the clock given by `time_type`.
    pub time: i64,
    pub time_type: TimeType,
}

/// Which Sunday of the month a transition falls on.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum WhichSunday {
    First,
    Second,
    Last,
}

/// The “type” of time that a transition is specified in.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum TimeType {

    /// Wall-clock time: the local time in effect just before the
    /// transition, including any daylight-saving offset.
    Wall,

    /// Standard Time: the local time without any daylight-saving offset.
    Standard,

    /// UTC: the transition happens at this time of day in UTC.
    UTC,
}

impl ZoneRule {
    fn offset(&self, seconds: i64) -> i64 {
        match self.daylight {
            Some(ref dst) if dst.contains(seconds, self.standard) => self.standard + dst.save,
            _                                                     => self.standard,
        }
    }
}

impl DaylightRule {

    /// Whether the given number of seconds since the epoch falls within
    /// this year’s daylight-saving period.
    fn contains(&self, seconds: i64, standard: i64) -> bool {
        let year = LocalDateTime::from_epoch_ms((seconds + standard) * 1000).year();

        let start = self.start.utc_seconds(year, standard, standard);
        let end   = self.end.utc_seconds(year, standard, standard + self.save);

        if start < end {
            seconds >= start && seconds < end
        }
        else {
            // Southern hemisphere: the period spans the new year.
            seconds >= start || seconds < end
        }
    }
}

impl Transition {

    /// The date of this transition in the given year.
    fn date(&self, year: i64) -> LocalDate {
        let month = self.month.months_from_january() as i64;

        match self.sunday {
            WhichSunday::First | WhichSunday::Second => {
                let first = LocalDate::rolling(year, month, 1);
                let skip = (7 - first.weekday().days_from_sunday()) % 7;
                let weeks = if self.sunday == WhichSunday::Second { 7 } else { 0 };
                first.add_days(skip + weeks)
            }
            WhichSunday::Last => {
                let last = LocalDate::rolling(year, month + 1, 0);
                last.add_days(-last.weekday().days_from_sunday())
            }
        }
    }

    /// The instant of this transition in the given year, as seconds since
    /// the epoch, given the standard offset and the offset in effect just
    /// before it.
    fn utc_seconds(&self, year: i64, standard: i64, before: i64) -> i64 {
        let local = self.date(year).days_since_epoch() * 86400 + self.time;

        match self.time_type {
            TimeType::Wall      => local - before,
            TimeType::Standard  => local - standard,
            TimeType::UTC       => local,
        }
    }
}


/// The European Union rule: last Sunday of March to last Sunday of
/// October, at 01:00 UTC.
const EU: DaylightRule = DaylightRule {
    save: 3600,
    start: Transition { month: Month::March,   sunday: WhichSunday::Last, time: 3600, time_type: TimeType::UTC },
    end:   Transition { month: Month::October, sunday: WhichSunday::Last, time: 3600, time_type: TimeType::UTC },
};

/// The United States rule since 2007: second Sunday of March to first
/// Sunday of November, at 02:00 local time.
const US: DaylightRule = DaylightRule {
    save: 3600,
    start: Transition { month: Month::March,    sunday: WhichSunday::Second, time: 7200, time_type: TimeType::Wall },
    end:   Transition { month: Month::November, sunday: WhichSunday::First,  time: 7200, time_type: TimeType::Wall },
};

/// Every named zone this crate knows about.
pub static ZONES: &[ZoneRule] = &[
    ZoneRule { name: "UTC",               standard:      0, daylight: None },
    ZoneRule { name: "Europe/Rome",       standard:   3600, daylight: Some(EU) },
    ZoneRule { name: "Europe/Paris",      standard:   3600, daylight: Some(EU) },
    ZoneRule { name: "Europe/Madrid",     standard:   3600, daylight: Some(EU) },
    ZoneRule { name: "Europe/Berlin",     standard:   3600, daylight: Some(EU) },
    ZoneRule { name: "Europe/London",     standard:      0, daylight: Some(EU) },
    ZoneRule { name: "Europe/Moscow",     standard:  10800, daylight: None },
    ZoneRule { name: "America/Sao_Paulo", standard: -10800, daylight: None },
    ZoneRule { name: "America/New_York",  standard: -18000, daylight: Some(US) },
    ZoneRule { name: "Asia/Tokyo",        standard:  32400, daylight: None },
    ZoneRule { name: "Asia/Shanghai",     standard:  28800, daylight: None },
];
