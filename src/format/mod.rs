//! Turning moments into strings.
//!
//! There are two ways a moment gets formatted, depending on whether a
//! locale is involved:
//!
//! - with a locale, the moment is shown the way that locale writes dates,
//!   in the locale’s own time zone, and the pattern only hints at which
//!   fields to include;
//! - without one, the pattern’s tokens are replaced with the moment’s
//!   fields in its own zone, and everything else is copied through.
//!
//! With neither a pattern nor a locale, the result is the ISO 8601 UTC
//! form.

pub(crate) mod locale;
pub(crate) mod manual;

use std::fmt;
use std::str::FromStr;

use pad::{PadStr, Alignment};

use crate::error::{ConfigKind, Error};

pub use self::locale::LocaleTag;


/// How the date part of a pattern is laid out.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum DateLayout {
    /// `YYYY-MM-DD`
    YearMonthDayDash,
    /// `YYYY/MM/DD`
    YearMonthDaySlash,
    /// `DD/MM/YYYY`
    DayMonthYearSlash,
    /// `DD-MM-YYYY`
    DayMonthYearDash,
}

/// Which time fields follow the date in a pattern.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TimeLayout {
    /// Nothing
    Omitted,
    /// ` HH`
    Hour,
    /// ` HH:mm`
    HourMinute,
    /// ` HH:mm:ss`
    HourMinuteSecond,
}

/// One of the sixteen supported format patterns: a date layout, optionally
/// followed by a time.
///
/// ```rust
/// use dateflow::{FormatPattern, DateLayout, TimeLayout};
///
/// let pattern: FormatPattern = "DD/MM/YYYY HH:mm".parse().unwrap();
/// assert_eq!(pattern, FormatPattern::new(DateLayout::DayMonthYearSlash, TimeLayout::HourMinute));
/// assert_eq!(pattern.as_str(), "DD/MM/YYYY HH:mm");
/// ```
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct FormatPattern {
    pub date: DateLayout,
    pub time: TimeLayout,
}

static PATTERNS: &[(DateLayout, TimeLayout, &str)] = &[
    (DateLayout::YearMonthDayDash,  TimeLayout::Omitted,          "YYYY-MM-DD"),
    (DateLayout::YearMonthDayDash,  TimeLayout::Hour,             "YYYY-MM-DD HH"),
    (DateLayout::YearMonthDayDash,  TimeLayout::HourMinute,       "YYYY-MM-DD HH:mm"),
    (DateLayout::YearMonthDayDash,  TimeLayout::HourMinuteSecond, "YYYY-MM-DD HH:mm:ss"),
    (DateLayout::YearMonthDaySlash, TimeLayout::Omitted,          "YYYY/MM/DD"),
    (DateLayout::YearMonthDaySlash, TimeLayout::Hour,             "YYYY/MM/DD HH"),
    (DateLayout::YearMonthDaySlash, TimeLayout::HourMinute,       "YYYY/MM/DD HH:mm"),
    (DateLayout::YearMonthDaySlash, TimeLayout::HourMinuteSecond, "YYYY/MM/DD HH:mm:ss"),
    (DateLayout::DayMonthYearSlash, TimeLayout::Omitted,          "DD/MM/YYYY"),
    (DateLayout::DayMonthYearSlash, TimeLayout::Hour,             "DD/MM/YYYY HH"),
    (DateLayout::DayMonthYearSlash, TimeLayout::HourMinute,       "DD/MM/YYYY HH:mm"),
    (DateLayout::DayMonthYearSlash, TimeLayout::HourMinuteSecond, "DD/MM/YYYY HH:mm:ss"),
    (DateLayout::DayMonthYearDash,  TimeLayout::Omitted,          "DD-MM-YYYY"),
    (DateLayout::DayMonthYearDash,  TimeLayout::Hour,             "DD-MM-YYYY HH"),
    (DateLayout::DayMonthYearDash,  TimeLayout::HourMinute,       "DD-MM-YYYY HH:mm"),
    (DateLayout::DayMonthYearDash,  TimeLayout::HourMinuteSecond, "DD-MM-YYYY HH:mm:ss"),
];

impl FormatPattern {

    /// Pairs a date layout with a time layout.
    pub fn new(date: DateLayout, time: TimeLayout) -> Self {
        Self { date, time }
    }

    /// Every supported pattern.
    pub fn all() -> impl Iterator<Item = FormatPattern> {
        PATTERNS.iter().map(|&(date, time, _)| FormatPattern { date, time })
    }

    /// The pattern as text, such as `"YYYY-MM-DD HH:mm"`.
    pub fn as_str(self) -> &'static str {
        PATTERNS.iter()
                .find(|&&(date, time, _)| date == self.date && time == self.time)
                .map(|&(_, _, text)| text)
                .unwrap_or("YYYY-MM-DD")
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatPattern {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        PATTERNS.iter()
                .find(|&&(_, _, text)| text == input)
                .map(|&(date, time, _)| FormatPattern { date, time })
                .ok_or_else(|| Error::InvalidConfig { kind: ConfigKind::Pattern, value: input.to_string() })
    }
}


/// The options a format call can override: a pattern, a locale, or both.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub format: Option<FormatPattern>,
    pub locale: Option<LocaleTag>,
}

/// What to pass to `Moment::format_with`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FormatArg {

    /// Use the moment’s own defaults.
    Default,

    /// Use this pattern, and the moment’s default locale.
    Pattern(FormatPattern),

    /// Override whichever of the pattern and locale are given.
    Options(FormatOptions),
}

impl Default for FormatArg {
    fn default() -> Self {
        FormatArg::Default
    }
}

impl From<FormatPattern> for FormatArg {
    fn from(pattern: FormatPattern) -> Self {
        FormatArg::Pattern(pattern)
    }
}

impl From<FormatOptions> for FormatArg {
    fn from(options: FormatOptions) -> Self {
        FormatArg::Options(options)
    }
}

impl From<LocaleTag> for FormatArg {
    fn from(locale: LocaleTag) -> Self {
        FormatArg::Options(FormatOptions { format: None, locale: Some(locale) })
    }
}

impl FormatArg {

    /// Works out the pattern and locale to use, with anything given here
    /// taking precedence over the defaults.
    pub(crate) fn resolve(self, format: Option<FormatPattern>, locale: Option<LocaleTag>) -> (Option<FormatPattern>, Option<LocaleTag>) {
        match self {
            FormatArg::Default          => (format, locale),
            FormatArg::Pattern(p)       => (Some(p), locale),
            FormatArg::Options(options) => (options.format.or(format), options.locale.or(locale)),
        }
    }
}


/// Writes a number with at least `width` digits, padding with zeroes
/// after any minus sign.
pub(crate) fn zero_pad(number: i64, width: usize) -> String {
    let digits = number.abs().to_string().pad(width, '0', Alignment::Right, false);
    if number < 0 { format!("-{}", digits) } else { digits }
}
