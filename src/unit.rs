//! The units that arithmetic, snapping, and differences work in.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;


/// A unit of calendar or clock time.
///
/// Years, months, weeks, and days are calendar units: adding one moves
/// the calendar fields, so a month can be 28 to 31 days long. The rest
/// are fixed lengths of real time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Every unit, coarsest first, with its name.
static UNITS: &[(Unit, &str)] = &[
    (Unit::Year,        "year"),
    (Unit::Month,       "month"),
    (Unit::Week,        "week"),
    (Unit::Day,         "day"),
    (Unit::Hour,        "hour"),
    (Unit::Minute,      "minute"),
    (Unit::Second,      "second"),
    (Unit::Millisecond, "millisecond"),
];

impl Unit {

    /// All eight units, coarsest first.
    pub fn all() -> impl Iterator<Item = Unit> {
        UNITS.iter().map(|&(unit, _)| unit)
    }

    /// The lowercase name of this unit, such as `"week"`.
    pub fn name(self) -> &'static str {
        UNITS[self as usize].1
    }

    /// The length of this unit in milliseconds, for the units that have a
    /// fixed one. Days and weeks count as 24 and 168 hours here; months
    /// and years have no fixed length.
    pub fn millis(self) -> Option<i64> {
        match self {
            Unit::Year | Unit::Month  => None,
            Unit::Week                => Some(604_800_000),
            Unit::Day                 => Some(86_400_000),
            Unit::Hour                => Some(3_600_000),
            Unit::Minute              => Some(60_000),
            Unit::Second              => Some(1000),
            Unit::Millisecond         => Some(1),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        UNITS.iter()
             .find(|&&(_, name)| name == input)
             .map(|&(unit, _)| unit)
             .ok_or_else(|| Error::InvalidUnit(input.to_string()))
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for unit in Unit::all() {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }
        assert_eq!(Unit::all().count(), 8);
    }

    #[test]
    fn unknown_name() {
        assert_eq!("fortnight".parse::<Unit>(), Err(Error::InvalidUnit("fortnight".to_string())));
        assert!("Day".parse::<Unit>().is_err());
    }

    #[test]
    fn lengths() {
        assert_eq!(Unit::Week.millis(), Some(7 * 24 * 60 * 60 * 1000));
        assert_eq!(Unit::Month.millis(), None);
    }
}
