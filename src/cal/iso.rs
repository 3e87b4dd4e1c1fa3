//! ISO 8601 rendering of civil values and UTC instants.

use std::fmt;

use crate::cal::{DatePiece, TimePiece, LocalDate, LocalTime, LocalDateTime};
use crate::instant::Instant;


/// Values that have an ISO 8601 textual form.
pub trait ISO: Sized {

    /// Returns a displayable wrapper that renders this value in its ISO
    /// 8601 form.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes the ISO 8601 form of this value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// The displayable ISO 8601 form of a value.
#[derive(Debug)]
pub struct ISOString<'a, T>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ISO::fmt(self.0, f)
    }
}

impl ISO for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl ISO for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}", self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl ISO for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}

/// An instant is rendered as its UTC date-time with a `Z` suffix. Years
/// outside 0 to 9999 use the six-digit signed form, `+275760-09-13`.
impl ISO for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let utc = LocalDateTime::from_epoch_ms(self.millis());
        let year = utc.year();

        if (0..=9999).contains(&year) {
            write!(f, "{:04}", year)?;
        }
        else {
            write!(f, "{:+07}", year)?;
        }

        write!(f, "-{:02}-{:02}T{}Z", utc.month() as usize, utc.day(), utc.time().iso())
    }
}


#[cfg(test)]
mod test {
    use super::ISO;
    use crate::cal::{LocalDate, LocalTime, Month};
    use crate::instant::{Instant, MAX_MILLIS};

    #[test]
    fn date() {
        let date = LocalDate::ymd(2024, Month::March, 5).unwrap();
        assert_eq!(date.iso().to_string(), "2024-03-05");
    }

    #[test]
    fn time() {
        let time = LocalTime::hms_ms(7, 8, 9, 10).unwrap();
        assert_eq!(time.iso().to_string(), "07:08:09.010");
    }

    #[test]
    fn epoch() {
        assert_eq!(Instant::at_epoch().iso().to_string(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn before_epoch() {
        let instant = Instant::at_ms(-1).unwrap();
        assert_eq!(instant.iso().to_string(), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn extended_years() {
        let latest = Instant::at_ms(MAX_MILLIS).unwrap();
        assert_eq!(latest.iso().to_string(), "+275760-09-13T00:00:00.000Z");

        let earliest = Instant::at_ms(-MAX_MILLIS).unwrap();
        assert_eq!(earliest.iso().to_string(), "-271821-04-20T00:00:00.000Z");
    }
}
