//! The errors this crate can return.

use std::error::Error as ErrorTrait;
use std::fmt;


/// Everything that can go wrong when building values in this crate.
///
/// Construction of a `Moment` is the only fallible operation on the value
/// itself; the other variants come from parsing the string forms of
/// units, patterns, locales, and zones.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Error {

    /// The input could not be resolved to an instant in range. Carries the
    /// original input, rendered as text.
    InvalidDate { input: String },

    /// The name is not one of the supported units.
    InvalidUnit(String),

    /// A configuration value is not one of the supported ones.
    InvalidConfig { kind: ConfigKind, value: String },
}

/// Which kind of configuration value was rejected.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ConfigKind {
    Pattern,
    Locale,
    Zone,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigKind::Pattern  => write!(f, "format pattern"),
            ConfigKind::Locale   => write!(f, "locale"),
            ConfigKind::Zone     => write!(f, "time zone"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDate { ref input }               => write!(f, "invalid date: {:?}", input),
            Error::InvalidUnit(ref name)                   => write!(f, "invalid unit: {:?}", name),
            Error::InvalidConfig { kind, ref value }       => write!(f, "unsupported {}: {:?}", kind, value),
        }
    }
}

impl ErrorTrait for Error {
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let error = Error::InvalidDate { input: "not-a-date".to_string() };
        assert_eq!(error.to_string(), "invalid date: \"not-a-date\"");

        let error = Error::InvalidConfig { kind: ConfigKind::Locale, value: "xx-XX".to_string() };
        assert_eq!(error.to_string(), "unsupported locale: \"xx-XX\"");
    }
}
