extern crate dateflow;
use dateflow::{Moment, TimeZone, Unit, Error, LocaleTag, Weekday, DatePiece, TimePiece};


fn utc(text: &str) -> Moment {
    Moment::builder().date(text).zone(TimeZone::utc()).build().unwrap()
}


#[test]
fn difference_in_days_and_months() {
    let start = utc("2024-02-10");
    let end = utc("2024-04-05");

    assert_eq!(end.diff(&start, Unit::Day), 55);
    assert_eq!(end.diff(&start, Unit::Month), 2);
}

#[test]
fn manual_format() {
    let moment = Moment::builder().date("2024-12-25")
                                  .format("DD/MM/YYYY".parse().unwrap())
                                  .zone(TimeZone::utc())
                                  .build()
                                  .unwrap();
    assert_eq!(moment.format(), "25/12/2024");
}

#[test]
fn invalid_input() {
    match Moment::builder().date("not-a-date").build() {
        Err(Error::InvalidDate { input }) => assert_eq!(input, "not-a-date"),
        other => panic!("expected an invalid date, got {:?}", other),
    }
}

#[test]
fn start_of_week_from_wednesday() {
    let wednesday = utc("2024-07-17T16:42:05.123Z");
    assert_eq!(wednesday.weekday(), Weekday::Wednesday);

    let sunday = wednesday.start_of(Unit::Week);
    assert_eq!(sunday.weekday(), Weekday::Sunday);
    assert_eq!((sunday.day(), sunday.hour(), sunday.minute(), sunday.second(), sunday.millisecond()), (14, 0, 0, 0, 0));
}

#[test]
fn month_across_daylight_saving_with_a_locale() {
    let new_york = TimeZone::named("America/New_York").unwrap();
    let moment = Moment::builder().date("2024-02-20T09:30:00")
                                  .zone(new_york)
                                  .locale(LocaleTag::EnUs)
                                  .build()
                                  .unwrap();

    let later = moment.add(1, Unit::Month);
    assert_eq!((later.month() as i8, later.day()), (3, 20));
    assert_eq!((later.hour(), later.minute()), (9, 30));
    assert_eq!(later.format(), "03/20/2024, 09:30:00");
}
