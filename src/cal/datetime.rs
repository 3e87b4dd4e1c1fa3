//! Civil dates, times, datetimes, months, and weekdays on the proleptic
//! Gregorian calendar.

use std::cmp::{Ordering, PartialOrd};
use std::error::Error as ErrorTrait;
use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::iso::ISO;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateflow::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// Returns the number of days in this year.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_2000.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of milliseconds in a day. Leap seconds are ignored, the same
/// way the Unix clock ignores them.
pub(crate) const MILLIS_IN_DAY: i64 = 86_400_000;

/// Years beyond this distance from zero are clamped before any day counts
/// get computed, so that field arithmetic can never overflow. Instants
/// only reach about 275,000 years anyway.
const YEAR_LIMIT: i64 = 1_000_000;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap day, at
/// the start of a 400-year Gregorian cycle, reduces the day-to-date
/// calculation to a handful of divisions.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// The number of days elapsed at the end of each month, counting from the
/// start of March and going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

/// A **local date-time** is a date and a time of day, *without a time
/// zone*. Time zones turn these into instants and back.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ```rust
    /// use dateflow::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        if year.abs() > YEAR_LIMIT {
            return Err(Error::OutOfRange);
        }

        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values, checking that the day exists in that year.
    ///
    /// ```rust
    /// use dateflow::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2016, 268).unwrap();
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 24);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        if year.abs() > YEAR_LIMIT || yearday < 1 || yearday > Year(year).day_count() as i64 {
            return Err(Error::OutOfRange);
        }

        Ok(Self::from_days(days_before_month(year, January) + yearday - 1))
    }

    /// Computes a date from a year, a zero-based month, and a day of the
    /// month, letting out-of-range values roll over the way a wall
    /// calendar would: month 12 is January of the next year, and the 31st
    /// of February is early March.
    ///
    /// ```rust
    /// use dateflow::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::rolling(2023, 1, 31);
    /// assert_eq!(date.month(), Month::March);
    /// assert_eq!(date.day(), 3);
    /// ```
    pub fn rolling(year: i64, month_from_zero: i64, day: i64) -> Self {
        Self::from_days(rolling_days(year, month_from_zero, day))
    }

    /// Computes the date that lies the given number of days after the Unix
    /// epoch, the 1st of January 1970. Day counts past about a million
    /// years either way are clamped.
    pub fn from_days(days_since_1970: i64) -> Self {
        let days = days_since_1970.max(-YEAR_LIMIT * 366).min(YEAR_LIMIT * 366);
        Self::from_days_since_2000(days - EPOCH_DIFFERENCE)
    }

    /// Returns the number of days between the Unix epoch and this date.
    pub fn days_since_epoch(&self) -> i64 {
        days_before_month(self.ymd.year, self.ymd.month) + (self.ymd.day - 1) as i64
    }

    /// Returns the date the given number of days later (or earlier, for a
    /// negative count).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.days_since_epoch().saturating_add(days))
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the 1st of March
    /// 2000.
    fn from_days_since_2000(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after. Peel off the 400-year, 100-year, and
        // 4-year cycles, leaving the days into the current year.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // The last day of a 400-year cycle is a leap day that belongs to
        // the fourth century, not a fifth one.
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;

        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // The 306 is the number of days in a year excluding January and
        // February, which come at the *end* of a March-based year.
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;
        }

        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Scan the triangle for the month with the right number of days
        // elapsed at its end (it goes backwards, hence “11 - index”).
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // The cycle starts in March.
        month += 2;

        if month >= 12 {
            years += 1;
            month -= 12;
        }

        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Computes the time of day from a number of milliseconds since
    /// midnight, wrapping around at the end of the day.
    pub fn from_millis_since_midnight(millis: i64) -> Self {
        let millis = millis.rem_euclid(MILLIS_IN_DAY);
        let seconds = millis / 1000;

        Self {
            hour:   (seconds / 3600) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            millisecond: (millis % 1000) as i16,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Returns the last representable millisecond of the day, 23:59:59.999.
    pub fn last_millisecond() -> Self {
        Self { hour: 23, minute: 59, second: 59, millisecond: 999 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields, and zero milliseconds.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if (0..24).contains(&hour) && (0..60).contains(&minute)
        && (0..60).contains(&second) && (0..1000).contains(&millisecond)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the number of milliseconds since midnight.
    pub fn to_millis(self) -> i64 {
        (self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64) * 1000
            + self.millisecond as i64
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}


impl LocalDateTime {

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Computes the date-time a number of milliseconds after midnight on
    /// the 1st of January 1970, with no time zone involved.
    pub fn from_epoch_ms(millis: i64) -> Self {
        Self {
            date: LocalDate::from_days(millis.div_euclid(MILLIS_IN_DAY)),
            time: LocalTime::from_millis_since_midnight(millis.rem_euclid(MILLIS_IN_DAY)),
        }
    }

    /// Computes a date-time from raw field values, every one of which may
    /// be out of range and rolls over into the next larger field: 25:00 is
    /// one in the morning of the following day, month −1 is December of
    /// the previous year.
    pub fn from_fields(year: i64, month_from_zero: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        Self::from_epoch_ms(Self::epoch_ms_from_fields(year, month_from_zero, day, hour, minute, second, millisecond))
    }

    /// The millisecond count behind `from_fields`, without building the
    /// date-time. Values too large to represent saturate instead of
    /// overflowing.
    pub fn epoch_ms_from_fields(year: i64, month_from_zero: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> i64 {
        let time = hour.saturating_mul(3_600_000)
            .saturating_add(minute.saturating_mul(60_000))
            .saturating_add(second.saturating_mul(1000))
            .saturating_add(millisecond);

        let days = rolling_days(year, month_from_zero, day);
        days.saturating_mul(MILLIS_IN_DAY).saturating_add(time)
    }

    /// Returns the number of milliseconds between midnight on the 1st of
    /// January 1970 and this date-time, as though both were in UTC.
    pub fn to_epoch_ms(&self) -> i64 {
        self.date.days_since_epoch() * MILLIS_IN_DAY + self.time.to_millis()
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}


/// A **YMD** is an implementation detail of `LocalDate`: a year, month,
/// and day that have not been checked against each other yet.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, if this date exists.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if !self.is_valid() {
            return Err(Error::OutOfRange);
        }

        Ok(days_before_month(self.year, self.month) + (self.day - 1) as i64)
    }

    /// Returns whether the day is in the range allowed by the month.
    fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(Year(self.year).is_leap_year())
    }
}

/// Returns the number of days between the 1st of January 1970 and the
/// first day of the given month.
fn days_before_month(year: i64, month: Month) -> i64 {
    let (leap_days_elapsed, is_leap_year) = Year(year).leap_year_calculations();

    (year - 2000) * 365

        // The days between the start of 1970 and the start of 2000...
        + 10958

        // the leap years between the start of 2000 and this year...
        + leap_days_elapsed

        // the months leading up to this one...
        + month.days_before_start() as i64

        // and this year’s leap day, if it has already happened.
        + if is_leap_year && month >= March { 1 } else { 0 }
}

/// The day count behind `LocalDate::rolling`.
fn rolling_days(year: i64, month_from_zero: i64, day: i64) -> i64 {
    let year = year.saturating_add(month_from_zero.div_euclid(12));
    let year = year.max(-YEAR_LIMIT).min(YEAR_LIMIT);
    let month = MONTHS[month_from_zero.rem_euclid(12) as usize];

    days_before_month(year, month).saturating_add(day.saturating_sub(1))
}

/// Computes the weekday, given the number of days that have passed
/// since the 1st of March 2000.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}

/// Split a number of periods into a number of cycles, and the number left
/// over that don’t fit into a cycle, wrapping negative remainders around
/// to be positive.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


/// A field of a date or time was out of range.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the number of months between January and this month, so
    /// January is 0 and December is 11.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use dateflow::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if (1..=12).contains(&month) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}


/// A named day of the week.
///
/// Sunday is Day 0, which is also where this crate’s weeks begin.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

static WEEKDAYS: [Weekday; 7] = [
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {

    /// Returns the number of days since the Sunday that starts this week.
    pub fn days_from_sunday(self) -> i64 {
        self as i64
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{LocalDateTime, LocalDate, LocalTime, Month, Weekday};
    use crate::cal::{DatePiece, TimePiece};


    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(LocalDate::ymd(*year, Month::February, 29).is_ok());
            assert!(LocalDate::ymd(*year + 1, Month::February, 29).is_err());
        }
        assert!(LocalDate::ymd(1600, Month::February, 29).is_ok());
        assert!(LocalDate::ymd(1601, Month::February, 29).is_err());
        assert!(LocalDate::ymd(1900, Month::February, 29).is_err());
    }

    #[test]
    fn to_from_days_since_epoch() {
        for date in vec![
            LocalDate::ymd(1970, Month::January, 1).unwrap(),
            LocalDate::ymd(   1, Month::January, 1).unwrap(),
            LocalDate::ymd(1969, Month::December, 31).unwrap(),
            LocalDate::ymd(1989, Month::November, 10).unwrap(),
            LocalDate::ymd(2000, Month::February, 29).unwrap(),
            LocalDate::ymd(2400, Month::February, 29).unwrap(),
            LocalDate::ymd(2014, Month::July, 13).unwrap(),
            LocalDate::ymd(-753, Month::April, 21).unwrap(),
        ] {
            assert_eq!(date, LocalDate::from_days(date.days_since_epoch()));
        }
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(LocalDate::ymd(1970, Month::January, 1).unwrap().days_since_epoch(), 0);
        assert_eq!(LocalDate::from_days(-1), LocalDate::ymd(1969, Month::December, 31).unwrap());
    }

    #[test]
    fn weekdays() {
        assert_eq!(LocalDate::ymd(1970, Month::January, 1).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(LocalDate::ymd(2024, Month::January, 17).unwrap().weekday(), Weekday::Wednesday);
        assert_eq!(LocalDate::ymd(1969, Month::December, 28).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn rolling_months() {
        assert_eq!(LocalDate::rolling(2024, 12, 1), LocalDate::ymd(2025, Month::January, 1).unwrap());
        assert_eq!(LocalDate::rolling(2024, -1, 15), LocalDate::ymd(2023, Month::December, 15).unwrap());
        assert_eq!(LocalDate::rolling(2024, 0, 0), LocalDate::ymd(2023, Month::December, 31).unwrap());
    }

    #[test]
    fn rolling_days_past_month_end() {
        assert_eq!(LocalDate::rolling(2024, 1, 31), LocalDate::ymd(2024, Month::March, 2).unwrap());
        assert_eq!(LocalDate::rolling(2023, 1, 31), LocalDate::ymd(2023, Month::March, 3).unwrap());
        assert_eq!(LocalDate::rolling(2025, 1, 29), LocalDate::ymd(2025, Month::March, 1).unwrap());
    }

    #[test]
    fn yearday() {
        assert_eq!(LocalDate::ymd(2024, Month::December, 31).unwrap().yearday(), 366);
        assert_eq!(LocalDate::yd(2015, 256).unwrap(), LocalDate::ymd(2015, Month::September, 13).unwrap());
        assert!(LocalDate::yd(2015, 366).is_err());
        assert!(LocalDate::yd(2015, 0).is_err());
    }

    #[test]
    fn fields_roll_over() {
        let dt = LocalDateTime::from_fields(2024, 11, 31, 25, 0, 0, 0);
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.month(), Month::January);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 1);
    }

    #[test]
    fn epoch_ms_before_1970() {
        let dt = LocalDateTime::from_epoch_ms(-1);
        assert_eq!(dt.date(), LocalDate::ymd(1969, Month::December, 31).unwrap());
        assert_eq!(dt.time(), LocalTime::last_millisecond());
        assert_eq!(dt.to_epoch_ms(), -1);
    }

    #[test]
    fn time_validation() {
        assert!(LocalTime::hms(24, 0, 0).is_err());
        assert!(LocalTime::hms_ms(23, 59, 59, 1000).is_err());
        assert_eq!(LocalTime::hms(1, 2, 3).unwrap().to_millis(), 3_723_000);
    }

    mod debug {
        use super::*;

        #[test]
        fn recently() {
            let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(1600-02-28)");
        }

        #[test]
        fn just_then() {
            let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(-0753-12-01)");
        }

        #[test]
        fn far_far_future() {
            let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
            assert_eq!(format!("{:?}", date), "LocalDate(+10601-01-31)");
        }

        #[test]
        fn ascending() {
            let then = LocalDateTime::new(
                        LocalDate::ymd(2009, Month::February, 13).unwrap(),
                        LocalTime::hms(23, 31, 30).unwrap());
            assert_eq!(format!("{:?}", then), "LocalDateTime(2009-02-13T23:31:30.000)");
        }
    }
}
