use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hourly cells on the reference axis.
pub const HOURS_PER_DAY: u8 = 24;

/// Errors from building timezone records or hour values.
#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u8),
    #[error("invalid timezone roster: {0}")]
    Roster(#[from] serde_json::Error),
}

/// An hour of the UTC day, always in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UtcHour(u8);

impl UtcHour {
    pub fn new(hour: u8) -> Result<Self, TimezoneError> {
        if hour < HOURS_PER_DAY {
            Ok(Self(hour))
        } else {
            Err(TimezoneError::HourOutOfRange(hour))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every hour of the axis, midnight first.
    pub fn all() -> impl Iterator<Item = UtcHour> {
        (0..HOURS_PER_DAY).map(UtcHour)
    }
}

impl TryFrom<u8> for UtcHour {
    type Error = TimezoneError;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

impl From<UtcHour> for u8 {
    fn from(hour: UtcHour) -> u8 {
        hour.0
    }
}

impl fmt::Display for UtcHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Inclusive hour range; `start > end` wraps past midnight.
fn hour_in_range(hour: u8, start: u8, end: u8) -> bool {
    if start <= end {
        (start..=end).contains(&hour)
    } else {
        hour >= start || hour <= end
    }
}

/// Local hours a participant is treated as active, bounds inclusive.
///
/// Serialized as a two-element array, e.g. `[6, 22]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct AwakeWindow {
    pub(crate) start: u8,
    pub(crate) end: u8,
}

impl AwakeWindow {
    pub fn new(start: u8, end: u8) -> Result<Self, TimezoneError> {
        for hour in [start, end] {
            if hour >= HOURS_PER_DAY {
                return Err(TimezoneError::HourOutOfRange(hour));
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn contains(&self, local_hour: u8) -> bool {
        hour_in_range(local_hour, self.start, self.end)
    }
}

impl TryFrom<(u8, u8)> for AwakeWindow {
    type Error = TimezoneError;

    fn try_from((start, end): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<AwakeWindow> for (u8, u8) {
    fn from(window: AwakeWindow) -> (u8, u8) {
        (window.start, window.end)
    }
}

/// The UTC hours flagged as ideal for synchronous sessions ("golden time").
///
/// This is configured, not derived: a participant may well be asleep inside it.
/// See [`mutual_awake_hours`] for the computed intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    pub start: UtcHour,
    pub end: UtcHour,
}

impl OverlapWindow {
    /// 13:00 - 15:00 UTC.
    pub const DEFAULT: OverlapWindow = OverlapWindow {
        start: UtcHour(13),
        end: UtcHour(15),
    };

    pub fn new(start: UtcHour, end: UtcHour) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: UtcHour) -> bool {
        hour_in_range(hour.0, self.start.0, self.end.0)
    }

    pub fn hours(&self) -> impl Iterator<Item = UtcHour> + '_ {
        UtcHour::all().filter(move |h| self.contains(*h))
    }
}

impl Default for OverlapWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for OverlapWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} UTC", self.start, self.end)
    }
}

/// Display class of one (timezone, UTC hour) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourClassification {
    Asleep,
    Awake,
    Overlap,
}

/// Both properties of a cell, kept apart so callers never have to infer
/// wakefulness from the overlap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourCell {
    pub utc_hour: UtcHour,
    pub local_hour: u8,
    pub awake: bool,
    pub overlap: bool,
}

impl HourCell {
    /// Overlap wins over the awake state when both apply.
    pub fn classification(&self) -> HourClassification {
        if self.overlap {
            HourClassification::Overlap
        } else if self.awake {
            HourClassification::Awake
        } else {
            HourClassification::Asleep
        }
    }
}

/// A participant's location as seen by the overlap finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    pub city: String,
    pub utc_offset_hours: i8,
    pub awake: AwakeWindow,
}

impl Timezone {
    pub fn new(city: impl Into<String>, utc_offset_hours: i8, awake: AwakeWindow) -> Self {
        Self {
            city: city.into(),
            utc_offset_hours,
            awake,
        }
    }

    /// Local wall-clock hour at the given UTC hour.
    pub fn local_hour(&self, hour: UtcHour) -> u8 {
        (i16::from(hour.0) + i16::from(self.utc_offset_hours)).rem_euclid(i16::from(HOURS_PER_DAY))
            as u8
    }

    pub fn is_awake(&self, hour: UtcHour) -> bool {
        self.awake.contains(self.local_hour(hour))
    }

    pub fn hour_cell(&self, hour: UtcHour, window: &OverlapWindow) -> HourCell {
        HourCell {
            utc_hour: hour,
            local_hour: self.local_hour(hour),
            awake: self.is_awake(hour),
            overlap: window.contains(hour),
        }
    }

    pub fn classify(&self, hour: UtcHour, window: &OverlapWindow) -> HourClassification {
        self.hour_cell(hour, window).classification()
    }

    /// One cell per UTC hour, midnight first.
    pub fn day_row(&self, window: &OverlapWindow) -> Vec<HourCell> {
        UtcHour::all().map(|h| self.hour_cell(h, window)).collect()
    }
}

/// UTC hours in which every listed participant is awake.
///
/// An empty roster constrains nothing, so every hour qualifies.
pub fn mutual_awake_hours(timezones: &[Timezone]) -> Vec<UtcHour> {
    UtcHour::all()
        .filter(|h| timezones.iter().all(|tz| tz.is_awake(*h)))
        .collect()
}

/// Parse a JSON roster: `[{"city": "Cairo", "utc_offset_hours": 2, "awake": [6, 22]}]`.
pub fn parse_roster(json: &str) -> Result<Vec<Timezone>, TimezoneError> {
    Ok(serde_json::from_str(json)?)
}
