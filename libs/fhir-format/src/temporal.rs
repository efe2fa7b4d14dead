//! FHIR `date`, `dateTime`, `instant` and `time`.
//!
//! Values keep the precision and timezone they were written with, so
//! `Display` reproduces the input exactly. Use `to_chrono()` for arithmetic
//! and comparisons.

use crate::primitive::{PrimitiveError, PrimitiveValue};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone as _};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})(?:-([0-9]{2})(?:-([0-9]{2}))?)?$").expect("date pattern")
});

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]+))?$").expect("time pattern")
});

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4}(?:-[0-9]{2}(?:-[0-9]{2})?)?)",
        r"(?:T([0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?)(Z|[+-][0-9]{2}:[0-9]{2}))?$",
    ))
    .expect("dateTime pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("'{input}' is not a valid FHIR {kind}")]
    Format { input: String, kind: &'static str },
    #[error("'{0}' is not a calendar date")]
    Calendar(String),
    #[error("'{0}' has a component out of range")]
    Range(String),
}

fn format_error(input: &str, kind: &'static str) -> TemporalError {
    TemporalError::Format {
        input: input.to_owned(),
        kind,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// A FHIR `date`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FhirDate {
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
}

impl FhirDate {
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, TemporalError> {
        let date = Self {
            year,
            month: Some(month),
            day: Some(day),
        };
        date.validate()?;
        Ok(date)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::Month,
            _ => DatePrecision::Year,
        }
    }

    /// The calendar date, available at day precision only.
    pub fn to_chrono(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month?), u32::from(self.day?))
    }

    fn validate(&self) -> Result<(), TemporalError> {
        if self.year == 0 {
            return Err(TemporalError::Range(self.to_string()));
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(TemporalError::Range(self.to_string()));
            }
        }
        if self.day.is_some() && self.to_chrono().is_none() {
            return Err(TemporalError::Calendar(self.to_string()));
        }
        Ok(())
    }
}

impl FromStr for FhirDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_RE.captures(s).ok_or_else(|| format_error(s, "date"))?;
        let component = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u8>().ok());
        let date = Self {
            year: caps[1].parse().map_err(|_| format_error(s, "date"))?,
            month: component(2),
            day: component(3),
        };
        date.validate()?;
        Ok(date)
    }
}

impl fmt::Display for FhirDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
        }
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        Ok(())
    }
}

/// A FHIR `time`: `hh:mm:ss` with optional fractional seconds, no timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirTime {
    hour: u8,
    minute: u8,
    second: u8,
    /// Fraction digits as written, without the dot.
    fraction: Option<String>,
}

impl FhirTime {
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, TemporalError> {
        let time = Self {
            hour,
            minute,
            second,
            fraction: None,
        };
        time.validate()?;
        Ok(time)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Leap seconds map onto chrono's leap representation; fractions beyond
    /// nanoseconds are truncated.
    pub fn to_chrono(&self) -> Option<NaiveTime> {
        let mut nanos = match &self.fraction {
            Some(digits) => {
                let mut padded: String = digits.chars().take(9).collect();
                while padded.len() < 9 {
                    padded.push('0');
                }
                padded.parse::<u32>().ok()?
            }
            None => 0,
        };
        let mut second = u32::from(self.second);
        if second == 60 {
            second = 59;
            nanos += 1_000_000_000;
        }
        NaiveTime::from_hms_nano_opt(u32::from(self.hour), u32::from(self.minute), second, nanos)
    }

    fn validate(&self) -> Result<(), TemporalError> {
        if self.hour > 23 || self.minute > 59 || self.second > 60 {
            return Err(TemporalError::Range(self.to_string()));
        }
        Ok(())
    }
}

impl FromStr for FhirTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_RE.captures(s).ok_or_else(|| format_error(s, "time"))?;
        let component = |i: usize| caps[i].parse::<u8>().map_err(|_| format_error(s, "time"));
        let time = Self {
            hour: component(1)?,
            minute: component(2)?,
            second: component(3)?,
            fraction: caps.get(4).map(|m| m.as_str().to_owned()),
        };
        time.validate()?;
        Ok(time)
    }
}

impl fmt::Display for FhirTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

/// Timezone of a `dateTime` or `instant`. `Z` and `+00:00` stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirTimeZone {
    Utc,
    Offset {
        negative: bool,
        hours: u8,
        minutes: u8,
    },
}

impl FhirTimeZone {
    pub fn to_fixed_offset(&self) -> Option<FixedOffset> {
        match *self {
            FhirTimeZone::Utc => FixedOffset::east_opt(0),
            FhirTimeZone::Offset {
                negative,
                hours,
                minutes,
            } => {
                let seconds = (i32::from(hours) * 60 + i32::from(minutes)) * 60;
                FixedOffset::east_opt(if negative { -seconds } else { seconds })
            }
        }
    }
}

impl FromStr for FhirTimeZone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Z" {
            return Ok(FhirTimeZone::Utc);
        }
        let invalid = || format_error(s, "timezone");
        let (negative, rest) = if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            return Err(invalid());
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let hours: u8 = hours.parse().map_err(|_| invalid())?;
        let minutes: u8 = minutes.parse().map_err(|_| invalid())?;
        if hours > 14 || minutes > 59 || (hours == 14 && minutes != 0) {
            return Err(TemporalError::Range(s.to_owned()));
        }
        Ok(FhirTimeZone::Offset {
            negative,
            hours,
            minutes,
        })
    }
}

impl fmt::Display for FhirTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FhirTimeZone::Utc => f.write_str("Z"),
            FhirTimeZone::Offset {
                negative,
                hours,
                minutes,
            } => write!(
                f,
                "{}{hours:02}:{minutes:02}",
                if *negative { '-' } else { '+' }
            ),
        }
    }
}

/// A FHIR `dateTime`: a partial date, or a full date with time and timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirDateTime {
    date: FhirDate,
    time: Option<(FhirTime, FhirTimeZone)>,
}

impl FhirDateTime {
    pub fn from_date(date: FhirDate) -> Self {
        Self { date, time: None }
    }

    pub fn new(date: FhirDate, time: FhirTime, zone: FhirTimeZone) -> Result<Self, TemporalError> {
        if date.precision() != DatePrecision::Day {
            return Err(TemporalError::Range(format!("{date}T{time}{zone}")));
        }
        Ok(Self {
            date,
            time: Some((time, zone)),
        })
    }

    pub fn date(&self) -> &FhirDate {
        &self.date
    }

    pub fn time(&self) -> Option<&FhirTime> {
        self.time.as_ref().map(|(time, _)| time)
    }

    pub fn timezone(&self) -> Option<FhirTimeZone> {
        self.time.as_ref().map(|(_, zone)| *zone)
    }

    /// The instant in time, available when a time of day is present.
    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        let (time, zone) = self.time.as_ref()?;
        let local = self.date.to_chrono()?.and_time(time.to_chrono()?);
        zone.to_fixed_offset()?.from_local_datetime(&local).single()
    }
}

impl From<FhirDate> for FhirDateTime {
    fn from(date: FhirDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for FhirDateTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_TIME_RE
            .captures(s)
            .ok_or_else(|| format_error(s, "dateTime"))?;
        let date: FhirDate = caps[1].parse()?;
        match (caps.get(2), caps.get(3)) {
            (Some(time), Some(zone)) => {
                Self::new(date, time.as_str().parse()?, zone.as_str().parse()?)
            }
            _ => Ok(Self::from_date(date)),
        }
    }
}

impl fmt::Display for FhirDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.date.fmt(f)?;
        if let Some((time, zone)) = &self.time {
            write!(f, "T{time}{zone}")?;
        }
        Ok(())
    }
}

/// A FHIR `instant`: a `dateTime` that always carries seconds and a timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FhirInstant(FhirDateTime);

impl FhirInstant {
    pub fn date_time(&self) -> &FhirDateTime {
        &self.0
    }

    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        self.0.to_chrono()
    }
}

impl FromStr for FhirInstant {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date_time: FhirDateTime = s.parse()?;
        if date_time.time.is_none() {
            return Err(format_error(s, "instant"));
        }
        Ok(Self(date_time))
    }
}

impl fmt::Display for FhirInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! temporal_primitive {
    ($ty:ty, $name:literal) => {
        impl PrimitiveValue for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
                match value {
                    Value::String(s) => s
                        .parse()
                        .map_err(|err: TemporalError| PrimitiveError::malformed(err.to_string())),
                    other => Err(PrimitiveError::unexpected("a string", other)),
                }
            }

            fn to_json(&self) -> Value {
                Value::String(self.to_string())
            }
        }
    };
}

temporal_primitive!(FhirDate, "date");
temporal_primitive!(FhirDateTime, "dateTime");
temporal_primitive!(FhirInstant, "instant");
temporal_primitive!(FhirTime, "time");
