extern crate dateflow;
use dateflow::{Moment, TimeZone, Unit};


fn utc(text: &str) -> Moment {
    Moment::builder().date(text).zone(TimeZone::utc()).build().unwrap()
}


#[test]
fn days_and_months() {
    let start = utc("2024-02-10");
    let end = utc("2024-04-05");

    assert_eq!(end.diff(&start, Unit::Day), 55);
    assert_eq!(end.diff(&start, Unit::Month), 2);
    assert_eq!(end.diff(&start, Unit::Week), 7);
}

#[test]
fn negative_differences_round_towards_the_past() {
    let start = utc("2024-02-10");
    let end = utc("2024-04-05");

    assert_eq!(start.diff(&end, Unit::Day), -55);
    assert_eq!(start.diff(&end, Unit::Week), -8);
    assert_eq!(start.diff(&end, Unit::Month), -2);
}

#[test]
fn months_ignore_the_day() {
    assert_eq!(utc("2024-02-29").diff(&utc("2024-01-31"), Unit::Month), 1);
    assert_eq!(utc("2024-02-01").diff(&utc("2024-01-31"), Unit::Month), 1);
    assert_eq!(utc("2024-01-31").diff(&utc("2024-01-01"), Unit::Month), 0);
}

#[test]
fn years_ignore_the_month() {
    assert_eq!(utc("2024-01-01").diff(&utc("2023-12-31"), Unit::Year), 1);
    assert_eq!(utc("2024-12-31").diff(&utc("2024-01-01"), Unit::Year), 0);
    assert_eq!(utc("2020-06-15").diff(&utc("2024-06-15"), Unit::Year), -4);
}

#[test]
fn months_across_years() {
    assert_eq!(utc("2025-01-15").diff(&utc("2023-11-15"), Unit::Month), 14);
}

#[test]
fn clock_units() {
    let start = utc("2024-01-01T00:00:00Z");
    let end = utc("2024-01-01T01:30:45.250Z");

    assert_eq!(end.diff(&start, Unit::Hour), 1);
    assert_eq!(end.diff(&start, Unit::Minute), 90);
    assert_eq!(end.diff(&start, Unit::Second), 5445);
    assert_eq!(end.diff(&start, Unit::Millisecond), 5_445_250);
    assert_eq!(start.diff(&end, Unit::Hour), -2);
}

#[test]
fn each_side_uses_its_own_zone() {
    let tokyo = TimeZone::named("Asia/Tokyo").unwrap();
    let new_year = Moment::builder().date("2023-12-31T16:00:00Z").zone(tokyo).build().unwrap();
    let same_instant = new_year.with_zone(TimeZone::utc());

    assert_eq!(new_year.diff(&same_instant, Unit::Year), 1);
    assert_eq!(new_year.diff(&same_instant, Unit::Day), 0);
}
