extern crate dateflow;
use dateflow::{Moment, TimeZone, Unit, Weekday, DatePiece, TimePiece};


fn utc(text: &str) -> Moment {
    Moment::builder().date(text).zone(TimeZone::utc()).build().unwrap()
}


#[test]
fn week_starts_on_sunday() {
    let wednesday = utc("2024-07-17T09:15:30.250Z");
    assert_eq!(wednesday.weekday(), Weekday::Wednesday);

    let start = wednesday.start_of(Unit::Week);
    assert_eq!(start.to_iso_string(), "2024-07-14T00:00:00.000Z");
    assert_eq!(start.weekday(), Weekday::Sunday);
}

#[test]
fn week_ends_on_saturday() {
    let end = utc("2024-07-17T09:15:30.250Z").end_of(Unit::Week);
    assert_eq!(end.to_iso_string(), "2024-07-20T23:59:59.999Z");
    assert_eq!(end.weekday(), Weekday::Saturday);
}

#[test]
fn sunday_is_its_own_week_start() {
    let sunday = utc("2024-07-14T12:00:00Z");
    assert_eq!(sunday.start_of(Unit::Week).to_iso_string(), "2024-07-14T00:00:00.000Z");
}

#[test]
fn weeks_can_span_months() {
    let friday = utc("2024-03-01");
    assert_eq!(friday.start_of(Unit::Week).to_iso_string(), "2024-02-25T00:00:00.000Z");
    assert_eq!(friday.end_of(Unit::Week).to_iso_string(), "2024-03-02T23:59:59.999Z");
}

#[test]
fn every_unit() {
    let moment = utc("2024-02-10T13:45:30.500Z");

    let starts = [
        (Unit::Year,        "2024-01-01T00:00:00.000Z"),
        (Unit::Month,       "2024-02-01T00:00:00.000Z"),
        (Unit::Day,         "2024-02-10T00:00:00.000Z"),
        (Unit::Hour,        "2024-02-10T13:00:00.000Z"),
        (Unit::Minute,      "2024-02-10T13:45:00.000Z"),
        (Unit::Second,      "2024-02-10T13:45:30.000Z"),
        (Unit::Millisecond, "2024-02-10T13:45:30.500Z"),
    ];

    let ends = [
        (Unit::Year,        "2024-12-31T23:59:59.999Z"),
        (Unit::Month,       "2024-02-29T23:59:59.999Z"),
        (Unit::Day,         "2024-02-10T23:59:59.999Z"),
        (Unit::Hour,        "2024-02-10T13:59:59.999Z"),
        (Unit::Minute,      "2024-02-10T13:45:59.999Z"),
        (Unit::Second,      "2024-02-10T13:45:30.999Z"),
        (Unit::Millisecond, "2024-02-10T13:45:30.500Z"),
    ];

    for &(unit, expected) in &starts {
        assert_eq!(moment.start_of(unit).to_iso_string(), expected, "start of {}", unit);
    }

    for &(unit, expected) in &ends {
        assert_eq!(moment.end_of(unit).to_iso_string(), expected, "end of {}", unit);
    }
}

#[test]
fn brackets_the_moment() {
    let moments = [
        utc("2024-02-10T13:45:30.500Z"),
        utc("1969-12-31T23:59:59.999Z"),
        utc("2000-02-29"),
        utc("2023-12-31T23:59:59.999Z"),
    ];

    for moment in &moments {
        for unit in Unit::all() {
            assert!(moment.start_of(unit).value_of() <= moment.value_of());
            assert!(moment.value_of() <= moment.end_of(unit).value_of());
        }
    }
}

#[test]
fn snapping_follows_the_zone() {
    let tokyo = TimeZone::named("Asia/Tokyo").unwrap();
    let moment = Moment::builder().date("2024-02-10T20:00:00Z").zone(tokyo).build().unwrap();

    let start = moment.start_of(Unit::Day);
    assert_eq!(start.day(), 11);
    assert_eq!(start.hour(), 0);
    assert_eq!(start.to_iso_string(), "2024-02-10T15:00:00.000Z");
}

#[test]
fn repeated_hour_is_still_bracketed() {
    let rome = TimeZone::named("Europe/Rome").unwrap();

    // 02:30 happens twice in Rome on this night; this is the second time.
    let moment = Moment::builder().date("2024-10-27T01:30:00Z").zone(rome).build().unwrap();
    assert_eq!(moment.hour(), 2);

    let start = moment.start_of(Unit::Hour);
    let end = moment.end_of(Unit::Hour);

    assert!(start.value_of() <= moment.value_of());
    assert!(moment.value_of() <= end.value_of());
    assert_eq!(end.to_iso_string(), "2024-10-27T01:59:59.999Z");
}

#[test]
fn day_containing_a_gap() {
    let rome = TimeZone::named("Europe/Rome").unwrap();
    let moment = Moment::builder().date("2024-03-31T12:00:00Z").zone(rome).build().unwrap();

    assert_eq!(moment.start_of(Unit::Day).to_iso_string(), "2024-03-30T23:00:00.000Z");
    assert_eq!(moment.end_of(Unit::Day).to_iso_string(), "2024-03-31T21:59:59.999Z");
}
