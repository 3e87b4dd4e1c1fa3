//! Locale-aware rendering.
//!
//! Each supported locale has a fixed layout, read from the `LOCALES`
//! table, and a time zone it is displayed in. A pattern, if one is given,
//! is only a hint: its date separator chooses between two-digit and
//! numeric days and months, and its time part chooses which time fields
//! to show.

use std::fmt;
use std::str::FromStr;

use crate::cal::{DatePiece, TimePiece, LocalDateTime};
use crate::cal::zone::{TimeZone, ZONES};
use crate::error::{ConfigKind, Error};
use crate::format::{zero_pad, DateLayout, FormatPattern, TimeLayout};
use crate::instant::Instant;


/// One of the ten supported locales.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum LocaleTag {
    ItIt,
    FrFr,
    EsEs,
    DeDe,
    PtBr,
    JaJp,
    ZhCn,
    RuRu,
    EnEn,
    EnUs,
}

/// The order that a locale writes the three date fields in.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// How a locale lays out a date and time.
#[derive(Debug)]
struct Layout {
    order: FieldOrder,

    /// Between the date fields.
    separator: &'static str,

    /// Between the date and the time.
    joiner: &'static str,

    /// Whether days and months get two digits even when a numeric width
    /// was asked for.
    always_padded: bool,

    /// Written after the hour when it is the only time field.
    hour_suffix: &'static str,
}

#[derive(Debug)]
struct LocaleInfo {
    tag: LocaleTag,
    code: &'static str,
    zone: &'static str,
    layout: Layout,
}

static LOCALES: &[LocaleInfo] = &[
    LocaleInfo { tag: LocaleTag::ItIt, code: "it-IT", zone: "Europe/Rome",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: "/", joiner: ", ", always_padded: false, hour_suffix: "" } },
    LocaleInfo { tag: LocaleTag::FrFr, code: "fr-FR", zone: "Europe/Paris",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: "/", joiner: " ",  always_padded: true,  hour_suffix: " h" } },
    LocaleInfo { tag: LocaleTag::EsEs, code: "es-ES", zone: "Europe/Madrid",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: "/", joiner: ", ", always_padded: false, hour_suffix: "" } },
    LocaleInfo { tag: LocaleTag::DeDe, code: "de-DE", zone: "Europe/Berlin",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: ".", joiner: ", ", always_padded: false, hour_suffix: " Uhr" } },
    LocaleInfo { tag: LocaleTag::PtBr, code: "pt-BR", zone: "America/Sao_Paulo",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: "/", joiner: ", ", always_padded: true,  hour_suffix: "" } },
    LocaleInfo { tag: LocaleTag::JaJp, code: "ja-JP", zone: "Asia/Tokyo",
                 layout: Layout { order: FieldOrder::YearMonthDay, separator: "/", joiner: " ",  always_padded: false, hour_suffix: "時" } },
    LocaleInfo { tag: LocaleTag::ZhCn, code: "zh-CN", zone: "Asia/Shanghai",
                 layout: Layout { order: FieldOrder::YearMonthDay, separator: "/", joiner: " ",  always_padded: false, hour_suffix: "时" } },
    LocaleInfo { tag: LocaleTag::RuRu, code: "ru-RU", zone: "Europe/Moscow",
                 layout: Layout { order: FieldOrder::DayMonthYear, separator: ".", joiner: ", ", always_padded: true,  hour_suffix: "" } },
    LocaleInfo { tag: LocaleTag::EnEn, code: "en-EN", zone: "Europe/London",
                 layout: Layout { order: FieldOrder::MonthDayYear, separator: "/", joiner: ", ", always_padded: false, hour_suffix: "" } },
    LocaleInfo { tag: LocaleTag::EnUs, code: "en-US", zone: "America/New_York",
                 layout: Layout { order: FieldOrder::MonthDayYear, separator: "/", joiner: ", ", always_padded: false, hour_suffix: "" } },
];

/// How wide days and months should be.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Width {
    TwoDigit,
    Numeric,
}

/// Which width each pattern separator asks for.
static SEPARATOR_WIDTHS: &[(char, Width)] = &[
    ('-', Width::TwoDigit),
    ('/', Width::Numeric),
];

/// Which time fields each pattern suffix asks for.
static TIME_SHAPES: &[(TimeLayout, &str)] = &[
    (TimeLayout::HourMinuteSecond, "HH:mm:ss"),
    (TimeLayout::HourMinute,       "HH:mm"),
    (TimeLayout::Hour,             "HH"),
];

impl LocaleTag {

    fn info(self) -> &'static LocaleInfo {
        &LOCALES[self as usize]
    }

    /// Every supported locale.
    pub fn all() -> impl Iterator<Item = LocaleTag> {
        LOCALES.iter().map(|info| info.tag)
    }

    /// The BCP 47 tag, such as `"pt-BR"`.
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// The zone that dates in this locale are shown in.
    pub fn time_zone(self) -> TimeZone {
        let name = self.info().zone;
        ZONES.iter()
             .find(|rule| rule.name == name)
             .map(TimeZone::Named)
             .unwrap_or_else(TimeZone::utc)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleTag {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        LOCALES.iter()
               .find(|info| info.code == input)
               .map(|info| info.tag)
               .ok_or_else(|| Error::InvalidConfig { kind: ConfigKind::Locale, value: input.to_string() })
    }
}


impl DateLayout {
    fn separator(self) -> char {
        match self {
            DateLayout::YearMonthDayDash  | DateLayout::DayMonthYearDash   => '-',
            DateLayout::YearMonthDaySlash | DateLayout::DayMonthYearSlash  => '/',
        }
    }
}

/// Renders the instant the way the locale writes dates, in the locale’s
/// own zone.
pub(crate) fn render(instant: Instant, tag: LocaleTag, pattern: Option<FormatPattern>) -> String {
    let local = tag.time_zone().to_local(instant);
    let layout = &tag.info().layout;

    let (width, time) = match pattern {
        Some(p) => {
            let width = SEPARATOR_WIDTHS.iter()
                                        .find(|&&(c, _)| c == p.date.separator())
                                        .map_or(Width::TwoDigit, |&(_, w)| w);
            (width, p.time)
        }
        None => (Width::TwoDigit, TimeLayout::HourMinuteSecond),
    };

    let mut output = render_date(&local, layout, width);

    if let Some(&(_, shape)) = TIME_SHAPES.iter().find(|&&(t, _)| t == time) {
        output.push_str(layout.joiner);
        output.push_str(&render_time(&local, layout, shape));
    }

    output
}

fn render_date(local: &LocalDateTime, layout: &Layout, width: Width) -> String {
    let digits = if width == Width::TwoDigit || layout.always_padded { 2 } else { 1 };

    let year  = local.year().to_string();
    let month = zero_pad(local.month().months_from_january() as i64 + 1, digits);
    let day   = zero_pad(local.day() as i64, digits);

    let fields = match layout.order {
        FieldOrder::DayMonthYear => [day, month, year],
        FieldOrder::MonthDayYear => [month, day, year],
        FieldOrder::YearMonthDay => [year, month, day],
    };

    fields.join(layout.separator)
}

fn render_time(local: &LocalDateTime, layout: &Layout, shape: &str) -> String {
    let hour = zero_pad(local.hour() as i64, 2);

    match shape.matches(':').count() {
        0 => format!("{}{}", hour, layout.hour_suffix),
        1 => format!("{}:{}", hour, zero_pad(local.minute() as i64, 2)),
        _ => format!("{}:{}:{}", hour, zero_pad(local.minute() as i64, 2), zero_pad(local.second() as i64, 2)),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    // 2024-12-25T13:05:09Z
    fn christmas() -> Instant {
        Instant::at_ms(1_735_131_909_000).unwrap()
    }

    fn pattern(text: &str) -> Option<FormatPattern> {
        Some(text.parse().unwrap())
    }

    #[test]
    fn table_is_in_tag_order() {
        for (index, tag) in LocaleTag::all().enumerate() {
            assert_eq!(tag as usize, index);
            assert_eq!(tag.code().parse::<LocaleTag>(), Ok(tag));
        }
    }

    #[test]
    fn every_locale_has_a_named_zone() {
        for tag in LocaleTag::all() {
            assert_eq!(tag.time_zone().zone_name(), Some(tag.info().zone));
        }
    }

    #[test]
    fn unsupported_locale() {
        assert_eq!("en-GB".parse::<LocaleTag>(),
                   Err(Error::InvalidConfig { kind: ConfigKind::Locale, value: "en-GB".to_string() }));
    }

    #[test]
    fn italian_default() {
        assert_eq!(render(christmas(), LocaleTag::ItIt, None), "25/12/2024, 14:05:09");
    }

    #[test]
    fn american_numeric() {
        let jan = Instant::at_ms(1_704_456_000_000).unwrap();  // 2024-01-05T12:00:00Z
        assert_eq!(render(jan, LocaleTag::EnUs, pattern("YYYY/MM/DD")), "1/5/2024");
        assert_eq!(render(jan, LocaleTag::EnUs, pattern("YYYY-MM-DD")), "01/05/2024");
    }

    #[test]
    fn always_padded_locales_ignore_numeric() {
        let jan = Instant::at_ms(1_704_456_000_000).unwrap();
        assert_eq!(render(jan, LocaleTag::RuRu, pattern("DD/MM/YYYY")), "05.01.2024");
    }

    #[test]
    fn hour_suffixes() {
        assert_eq!(render(christmas(), LocaleTag::DeDe, pattern("DD-MM-YYYY HH")), "25.12.2024, 14 Uhr");
        assert_eq!(render(christmas(), LocaleTag::JaJp, pattern("YYYY-MM-DD HH")), "2024/12/25 22時");
    }

    #[test]
    fn minutes_without_seconds() {
        assert_eq!(render(christmas(), LocaleTag::FrFr, pattern("DD/MM/YYYY HH:mm")), "25/12/2024 14:05");
    }

    #[test]
    fn date_crosses_midnight_in_locale_zone() {
        // 2024-12-25T20:00:00Z is already the 26th in Shanghai.
        let evening = Instant::at_ms(1_735_156_800_000).unwrap();
        assert_eq!(render(evening, LocaleTag::ZhCn, pattern("YYYY-MM-DD")), "2024/12/26");
    }
}
