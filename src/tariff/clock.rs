//! Clock times and weekday codes used by tariff windows
//!
//! Times are whole minutes since midnight. 1440 is representable so that a
//! window can run to the end of the day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 1440;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("time '{0}' is not in HH:MM format")]
    Format(String),
    #[error("time '{0}' is out of range (00:00-24:00)")]
    OutOfRange(String),
    #[error("unknown day code '{0}' (expected MON..SUN)")]
    UnknownDay(String),
}

/// Minute of the day, 0..=1440
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour == 24 && minute == 0 {
            return Some(Self::END_OF_DAY);
        }
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Slot index to clock time, clamped to end of day
    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot.min(MINUTES_PER_DAY as usize) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

/// Accepts "H:MM" or "HH:MM". "24:00" is the only value past 23:59.
impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ClockTimeError::Format(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(format_err)?;
        let digits_ok = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits_ok(hour, 2) || minute.len() != 2 || !digits_ok(minute, 2) {
            return Err(format_err());
        }

        let hour: u16 = hour.parse().map_err(|_| format_err())?;
        let minute: u16 = minute.parse().map_err(|_| format_err())?;

        Self::from_hm(hour, minute).ok_or_else(|| ClockTimeError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Weekday code as stored in plan data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayCode {
    /// Monday-first, matching report order
    pub const ALL: [DayCode; 7] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
        DayCode::Sun,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            DayCode::Mon => "MON",
            DayCode::Tue => "TUE",
            DayCode::Wed => "WED",
            DayCode::Thu => "THU",
            DayCode::Fri => "FRI",
            DayCode::Sat => "SAT",
            DayCode::Sun => "SUN",
        }
    }
}

impl FromStr for DayCode {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayCode::ALL
            .into_iter()
            .find(|day| day.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClockTimeError::UnknownDay(s.to_string()))
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<chrono::Weekday> for DayCode {
    fn from(weekday: chrono::Weekday) -> Self {
        DayCode::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<DayCode> for chrono::Weekday {
    fn from(day: DayCode) -> Self {
        match day {
            DayCode::Mon => chrono::Weekday::Mon,
            DayCode::Tue => chrono::Weekday::Tue,
            DayCode::Wed => chrono::Weekday::Wed,
            DayCode::Thu => chrono::Weekday::Thu,
            DayCode::Fri => chrono::Weekday::Fri,
            DayCode::Sat => chrono::Weekday::Sat,
            DayCode::Sun => chrono::Weekday::Sun,
        }
    }
}



/// Kani formal verification proofs
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn from_hm_bounded() {
        let hour: u16 = kani::any();
        let minute: u16 = kani::any();
        if let Some(time) = ClockTime::from_hm(hour, minute) {
            kani::assert(time.minutes() <= MINUTES_PER_DAY, "minute of day must be <= 1440");
        }
    }

    #[kani::proof]
    fn from_minutes_round_trip() {
        let minutes: u16 = kani::any();
        kani::assume(minutes <= MINUTES_PER_DAY);
        let time = ClockTime::from_minutes(minutes).unwrap();
        kani::assert(
            ClockTime::from_hm(time.hour(), time.minute()) == Some(time),
            "hour/minute split must round-trip",
        );
    }
}
