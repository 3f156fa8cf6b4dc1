//! Whole calendar units.
//!
//! [`Year`], [`Month`] and [`Day`] wrap a [`TimeRange`] and differ from it only
//! in how they are constructed. Besides explicit components they accept any
//! single instant, from which the enclosing unit is inferred:
//!
//! ```
//! use active_time::Month;
//! use chrono::{TimeZone, Utc};
//! let from_time = Month::containing(Utc.with_ymd_and_hms(2008, 11, 14, 7, 0, 0).unwrap()).unwrap();
//! let from_parts = Month::of(2008, 11).unwrap();
//! assert_eq!(from_time, from_parts);
//! assert_eq!(from_time.ending(), Utc.with_ymd_and_hms(2008, 11, 30, 23, 59, 59).unwrap());
//! ```
//!
//! Everything a [`TimeRange`] offers is reachable through `Deref`, so
//! `Day::of(2008, 11, 14)?.description()` is `"on November 14, 2008"`.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use std::ops;

use crate::error::{ActiveTimeError, Result};
use crate::range::{TimeArg, TimeRange};

// Generates the read-only plumbing shared by every calendar unit.
macro_rules! calendar_unit {
    ($unit:ident) => {
        #[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
        pub struct $unit(TimeRange);

        impl ops::Deref for $unit {
            type Target = TimeRange;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
        impl AsRef<TimeRange> for $unit {
            fn as_ref(&self) -> &TimeRange {
                &self.0
            }
        }
        impl From<$unit> for TimeRange {
            fn from(unit: $unit) -> TimeRange {
                unit.0
            }
        }
        impl fmt::Display for $unit {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

calendar_unit!(Year);
calendar_unit!(Month);
calendar_unit!(Day);

impl Year {
    /// Accepts `(year)` or a single instant.
    pub fn new(args: &[TimeArg]) -> Result<Self> {
        match args {
            [] => Err(ActiveTimeError::invalid(
                "arguments must either be (a time) or (year)",
            )),
            [TimeArg::Instant(instant)] => Self::containing(*instant),
            [year] => Self::of(year.component()?),
            _ => Err(ActiveTimeError::invalid(format!(
                "a year takes one argument, got {}",
                args.len()
            ))),
        }
    }
    pub fn of(year: i32) -> Result<Self> {
        TimeRange::from_calendar(&[year]).map(Self)
    }
    pub fn containing(instant: DateTime<Utc>) -> Result<Self> {
        Self::of(instant.year())
    }
}

impl Month {
    /// Accepts `(year, month)` or a single instant.
    pub fn new(args: &[TimeArg]) -> Result<Self> {
        match args {
            [] => Err(ActiveTimeError::invalid(
                "arguments must either be (a time) or (year, month)",
            )),
            [TimeArg::Instant(instant)] => Self::containing(*instant),
            [year, month] => Self::of(year.component()?, month.component()?),
            _ => Err(ActiveTimeError::invalid(format!(
                "a month takes a time or a year and a month, got {} arguments",
                args.len()
            ))),
        }
    }
    pub fn of(year: i32, month: i32) -> Result<Self> {
        TimeRange::from_calendar(&[year, month]).map(Self)
    }
    pub fn containing(instant: DateTime<Utc>) -> Result<Self> {
        Self::of(instant.year(), instant.month() as i32)
    }
}

impl Day {
    /// Accepts `(year, month, day)` or a single instant.
    pub fn new(args: &[TimeArg]) -> Result<Self> {
        match args {
            [] => Err(ActiveTimeError::invalid(
                "arguments must either be (a time) or (year, month, day)",
            )),
            [TimeArg::Instant(instant)] => Self::containing(*instant),
            [year, month, day] => Self::of(year.component()?, month.component()?, day.component()?),
            _ => Err(ActiveTimeError::invalid(format!(
                "a day takes a time or a year, a month and a day, got {} arguments",
                args.len()
            ))),
        }
    }
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self> {
        TimeRange::from_calendar(&[year, month, day]).map(Self)
    }
    pub fn containing(instant: DateTime<Utc>) -> Result<Self> {
        Self::of(instant.year(), instant.month() as i32, instant.day() as i32)
    }
}
