// File: crates/scatter-core/src/record.rs
// Summary: Ride record model, "MM:SS" clock parsing, and the doping category split.
// Notes:
// - `RawRideRecord` mirrors the published JSON/CSV field names.
// - Conversion to `RideRecord` happens once; the result is never mutated.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::Deserialize;

use crate::error::TimeParseError;
use crate::types::{CAPTION_ALLEGATION, CAPTION_NO_ALLEGATION};

/// Comparable time-of-day anchored at the Unix epoch date.
/// Only the minute and second fields are set from the parsed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockValue(DateTime<Utc>);

impl ClockValue {
    /// Build 1970-01-01T00:MM:SSZ. Both components must be in `0..60`.
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        let total = i64::from(minutes) * 60 + i64::from(seconds);
        DateTime::from_timestamp(total, 0).map(Self)
    }

    /// Parse an elapsed time written as "MM:SS".
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let parts: Vec<&str> = input.trim().split(':').collect();
        if parts.len() != 2 {
            return Err(TimeParseError::WrongShape { input: input.to_string(), parts: parts.len() });
        }
        let numeric = |component: &str| -> Result<u32, TimeParseError> {
            let component = component.trim();
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimeParseError::NotNumeric {
                    input: input.to_string(),
                    component: component.to_string(),
                });
            }
            component.parse::<u32>().map_err(|_| TimeParseError::Overflow { input: input.to_string() })
        };
        let minutes = numeric(parts[0])?;
        let seconds = numeric(parts[1])?;
        let out_of_range = |component| TimeParseError::OutOfRange { input: input.to_string(), component };
        if minutes >= 60 {
            return Err(out_of_range("minutes"));
        }
        if seconds >= 60 {
            return Err(out_of_range("seconds"));
        }
        Self::from_minutes_seconds(minutes, seconds)
            .ok_or_else(|| TimeParseError::Overflow { input: input.to_string() })
    }

    pub fn minute(&self) -> u32 { self.0.minute() }

    pub fn second(&self) -> u32 { self.0.second() }

    /// Milliseconds since the epoch; the scale domain unit.
    pub fn timestamp_millis(&self) -> i64 { self.0.timestamp_millis() }

    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Tick/tooltip rendering, "%M:%S".
    pub fn format_mm_ss(&self) -> String {
        self.0.format("%M:%S").to_string()
    }

    /// Attribute rendering, e.g. `1970-01-01T00:36:50Z`.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl FromStr for ClockValue {
    type Err = TimeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_mm_ss())
    }
}

/// One entry of the published cyclist dataset, as decoded.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRideRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Place")]
    pub place: u32,
    #[serde(rename = "Seconds")]
    pub seconds: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Doping")]
    pub doping: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// A ride record with its elapsed time parsed into a [`ClockValue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RideRecord {
    pub time: ClockValue,
    pub raw_time: String,
    pub place: u32,
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    pub doping: String,
    pub url: String,
}

impl RideRecord {
    pub fn has_allegation(&self) -> bool { !self.doping.is_empty() }

    pub fn category(&self) -> DopingCategory {
        DopingCategory::from_key(self.has_allegation())
    }
}

impl TryFrom<RawRideRecord> for RideRecord {
    type Error = TimeParseError;

    fn try_from(raw: RawRideRecord) -> Result<Self, Self::Error> {
        let time = ClockValue::parse(&raw.time)?;
        Ok(Self {
            time,
            raw_time: raw.time,
            place: raw.place,
            seconds: raw.seconds,
            name: raw.name,
            year: raw.year,
            nationality: raw.nationality,
            doping: raw.doping,
            url: raw.url,
        })
    }
}

/// Legend/palette key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DopingCategory {
    NoAllegation,
    Allegation,
}

impl DopingCategory {
    /// Palette domain order when no record has been seen.
    pub const ALL: [DopingCategory; 2] = [DopingCategory::NoAllegation, DopingCategory::Allegation];

    pub const fn from_key(key: bool) -> Self {
        if key { Self::Allegation } else { Self::NoAllegation }
    }

    pub const fn key(self) -> bool { matches!(self, Self::Allegation) }

    pub const fn caption(self) -> &'static str {
        match self {
            Self::NoAllegation => CAPTION_NO_ALLEGATION,
            Self::Allegation => CAPTION_ALLEGATION,
        }
    }
}
