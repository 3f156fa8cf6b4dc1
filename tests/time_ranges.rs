use active_time::{ActiveTimeError, Granularity, TimeArg, TimeRange};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn whole_years() {
    for year in [1970, 2000, 2008, 2024, 2100] {
        let range = TimeRange::new(&[year.into()]).expect("year");
        assert_eq!(range.granularity(), Granularity::Year);
        assert_eq!(range.starting().year(), year);
        assert_eq!(range.ending().year(), year);
        assert_eq!(range.starting(), utc(year, 1, 1, 0, 0, 0));
        assert_eq!(range.ending(), utc(year, 12, 31, 23, 59, 59));
    }
}

#[test]
fn whole_months() {
    let lengths = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (month, length) in (1..=12).zip(lengths) {
        let range = TimeRange::new(&[2008.into(), (month as i32).into()]).expect("month");
        assert_eq!(range.granularity(), Granularity::Month);
        assert_eq!(range.starting(), utc(2008, month, 1, 0, 0, 0));
        assert_eq!(range.ending(), utc(2008, month, length, 23, 59, 59));
    }
}

#[test]
fn whole_days() {
    let range = TimeRange::new(&[2008.into(), 11.into(), 14.into()]).expect("day");
    assert_eq!(range.granularity(), Granularity::Day);
    assert_eq!(range.starting(), utc(2008, 11, 14, 0, 0, 0));
    assert_eq!(range.ending(), utc(2008, 11, 14, 23, 59, 59));
    let leap = TimeRange::day(2008, 2, 29).expect("leap day");
    assert_eq!(leap.ending(), utc(2008, 2, 29, 23, 59, 59));
}

#[test]
fn explicit_instants_are_kept() {
    let starting = utc(2008, 11, 14, 14, 18, 22);
    let ending = starting + Duration::milliseconds(61_500);
    let range = TimeRange::new(&[starting.into(), ending.into()]).expect("custom");
    assert_eq!(range.granularity(), Granularity::Custom);
    assert_eq!(range.starting(), starting);
    assert_eq!(range.ending(), ending);
    assert_eq!(range.time(), starting);
}

#[test]
fn malformed_arguments() {
    let now = Utc::now();
    let shapes: Vec<Vec<TimeArg>> = vec![
        vec![],
        vec![now.into()],
        vec![now.into(), 2008.into()],
        vec![now.into(), now.into(), now.into()],
        vec![2008.into(), 11.into(), 14.into(), 1.into()],
    ];
    for args in shapes {
        assert!(
            matches!(TimeRange::new(&args), Err(ActiveTimeError::InvalidArgument(_))),
            "expected {args:?} to be rejected"
        );
    }
    assert!(matches!(TimeRange::from_calendar(&[]), Err(ActiveTimeError::InvalidArgument(_))));
}

#[test]
fn reversed_instants_are_rejected() {
    let now = Utc::now();
    let earlier = now - Duration::minutes(1);
    assert!(matches!(TimeRange::between(now, earlier), Err(ActiveTimeError::InvalidArgument(_))));
    assert!(TimeRange::between(now, now).is_ok());
}

#[test]
fn descriptions() {
    assert_eq!(TimeRange::year(2008).unwrap().description(), "in 2008");
    assert_eq!(TimeRange::month(2008, 11).unwrap().description(), "in November 2008");
    assert_eq!(TimeRange::day(2008, 11, 14).unwrap().description(), "on November 14, 2008");
    assert_eq!(TimeRange::day(2009, 1, 1).unwrap().to_string(), "on January 01, 2009");
    let custom = TimeRange::between(utc(2008, 11, 18, 14, 18, 22), utc(2008, 11, 18, 14, 19, 23)).unwrap();
    assert_eq!(
        custom.description(),
        "between November 18 2008 14:18:22 and November 18 2008 14:19:23"
    );
}

#[test]
fn containment_is_inclusive() {
    let range = TimeRange::month(2008, 11).unwrap();
    assert!(range.contains(utc(2008, 11, 1, 0, 0, 0)));
    assert!(range.contains(utc(2008, 11, 30, 23, 59, 59)));
    assert!(!range.contains(utc(2008, 12, 1, 0, 0, 0)));
    assert!(!range.contains(utc(2008, 10, 31, 23, 59, 59)));
}
