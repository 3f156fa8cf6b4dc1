// used for the bounds of every range
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

// used to print out readable forms of a range
use std::fmt;

use crate::error::{ActiveTimeError, Result};

const CUSTOM_FORMAT: &str = "%B %d %Y %H:%M:%S";

// ------------- Granularity -------------
/// The calendar unit a [`TimeRange`] spans, or `Custom` when it was built
/// from two explicit instants.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Granularity {
    Year,
    Month,
    Day,
    Custom,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Day => "day",
            Granularity::Custom => "custom",
        }
    }
}
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- TimeArg -------------
/// A single constructor argument. Ranges may be built from calendar
/// components (integers, or text holding an integer) or from instants.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TimeArg {
    Int(i32),
    Text(String),
    Instant(DateTime<Utc>),
}

impl TimeArg {
    pub(crate) fn component(&self) -> Result<i32> {
        match self {
            TimeArg::Int(value) => Ok(*value),
            TimeArg::Text(text) => text.trim().parse::<i32>().map_err(|_| {
                ActiveTimeError::invalid(format!("'{text}' is not a calendar component"))
            }),
            TimeArg::Instant(_) => Err(ActiveTimeError::invalid(
                "times cannot be mixed with year, month and day components",
            )),
        }
    }
}
impl From<i32> for TimeArg {
    fn from(value: i32) -> Self {
        TimeArg::Int(value)
    }
}
impl From<&str> for TimeArg {
    fn from(value: &str) -> Self {
        TimeArg::Text(value.to_string())
    }
}
impl From<String> for TimeArg {
    fn from(value: String) -> Self {
        TimeArg::Text(value)
    }
}
impl From<DateTime<Utc>> for TimeArg {
    fn from(value: DateTime<Utc>) -> Self {
        TimeArg::Instant(value)
    }
}

// ------------- TimeRange -------------
/// A period of time with an inclusive starting and ending instant.
///
/// A range is created either for a whole calendar unit:
///
/// ```
/// use active_time::{Granularity, TimeRange};
/// let november = TimeRange::month(2008, 11).unwrap();
/// assert_eq!(november.granularity(), Granularity::Month);
/// assert_eq!(november.description(), "in November 2008");
/// ```
///
/// or between any two instants, in which case the granularity is
/// [`Granularity::Custom`] and the instants are kept exactly as given.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TimeRange {
    starting: DateTime<Utc>,
    ending: DateTime<Utc>,
    granularity: Granularity,
}

impl TimeRange {
    /// Builds a range from loosely shaped arguments: either
    /// `(starting, ending)` instants or `(year[, month[, day]])`.
    pub fn new(args: &[TimeArg]) -> Result<Self> {
        match args.first() {
            Some(TimeArg::Int(_)) | Some(TimeArg::Text(_)) => {
                if args.len() > 3 {
                    return Err(ActiveTimeError::invalid(
                        "too many arguments - only year, month and day are supported",
                    ));
                }
                let components = args
                    .iter()
                    .map(TimeArg::component)
                    .collect::<Result<Vec<i32>>>()?;
                Self::from_calendar(&components)
            }
            Some(TimeArg::Instant(starting)) => match args {
                [_, TimeArg::Instant(ending)] => Self::between(*starting, *ending),
                _ => Err(ActiveTimeError::invalid(
                    "both a starting and ending time must be supplied",
                )),
            },
            None => Err(ActiveTimeError::invalid(
                "arguments must either be (starting_time, ending_time) or (year,[month,[day]])",
            )),
        }
    }

    pub fn between(starting: DateTime<Utc>, ending: DateTime<Utc>) -> Result<Self> {
        if starting > ending {
            return Err(ActiveTimeError::invalid(format!(
                "starting time {starting} is after ending time {ending}"
            )));
        }
        Ok(Self {
            starting,
            ending,
            granularity: Granularity::Custom,
        })
    }

    pub fn year(year: i32) -> Result<Self> {
        Self::calendar(Granularity::Year, year, 1, 1)
    }

    pub fn month(year: i32, month: i32) -> Result<Self> {
        Self::calendar(Granularity::Month, year, month, 1)
    }

    pub fn day(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::calendar(Granularity::Day, year, month, day)
    }

    /// One to three components select a year, a month or a day.
    pub fn from_calendar(components: &[i32]) -> Result<Self> {
        match *components {
            [year] => Self::year(year),
            [year, month] => Self::month(year, month),
            [year, month, day] => Self::day(year, month, day),
            [] => Err(ActiveTimeError::invalid("a year must be supplied")),
            _ => Err(ActiveTimeError::invalid(
                "too many arguments - only year, month and day are supported",
            )),
        }
    }

    // The first instant of the unit through its last whole second.
    fn calendar(granularity: Granularity, year: i32, month: i32, day: i32) -> Result<Self> {
        let first = date(year, month, day)?;
        let last = match granularity {
            Granularity::Year => NaiveDate::from_ymd_opt(year, 12, 31),
            // December ends with the year
            Granularity::Month if month == 12 => NaiveDate::from_ymd_opt(year, 12, 31),
            Granularity::Month => first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt()),
            Granularity::Day | Granularity::Custom => Some(first),
        }
        .ok_or_else(|| {
            ActiveTimeError::invalid(format!("the {granularity} starting {first} has no end"))
        })?;
        Ok(Self {
            starting: at(first, 0, 0, 0)?,
            ending: at(last, 23, 59, 59)?,
            granularity,
        })
    }

    pub fn starting(&self) -> DateTime<Utc> {
        self.starting
    }
    pub fn ending(&self) -> DateTime<Utc> {
        self.ending
    }
    /// Same as [`TimeRange::starting`].
    pub fn time(&self) -> DateTime<Utc> {
        self.starting
    }
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.starting <= instant && instant <= self.ending
    }

    /// A human friendly description of the range, such as `"in 2008"`,
    /// `"in November 2008"` or `"on November 14, 2008"`.
    pub fn description(&self) -> String {
        match self.granularity {
            Granularity::Year => format!("in {}", self.starting.year()),
            Granularity::Month => format!("in {}", self.starting.format("%B %Y")),
            Granularity::Day => format!("on {}", self.starting.format("%B %d, %Y")),
            Granularity::Custom => format!(
                "between {} and {}",
                self.starting.format(CUSTOM_FORMAT),
                self.ending.format(CUSTOM_FORMAT)
            ),
        }
    }
}
impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

fn date(year: i32, month: i32, day: i32) -> Result<NaiveDate> {
    let invalid = || ActiveTimeError::invalid(format!("{year}-{month}-{day} is not a valid date"));
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn at(date: NaiveDate, hour: u32, minute: u32, second: u32) -> Result<DateTime<Utc>> {
    date.and_hms_opt(hour, minute, second)
        .map(|moment| moment.and_utc())
        .ok_or_else(|| ActiveTimeError::invalid(format!("{date} has no {hour}:{minute}:{second}")))
}
