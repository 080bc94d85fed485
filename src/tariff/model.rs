use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::clock::{ClockTime, DayCode, MINUTES_PER_DAY};

/// Days plus a clock range during which a tariff period's rate applies.
///
/// A window never crosses midnight. An end time of "00:00" means the window
/// runs to the end of the day, so overnight pricing is written as two windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub days: Vec<DayCode>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl TimeWindow {
    pub fn new(days: &[DayCode], start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            days: days.to_vec(),
            start_time,
            end_time,
        }
    }

    /// Effective half-open minute range. Empty when start is after end.
    pub fn minute_range(&self) -> Range<usize> {
        let start = self.start_time.minutes() as usize;
        let end = if self.end_time == ClockTime::MIDNIGHT {
            MINUTES_PER_DAY as usize
        } else {
            self.end_time.minutes() as usize
        };
        start..end.max(start)
    }

    pub fn applies_to(&self, day: DayCode) -> bool {
        self.days.contains(&day)
    }
}

/// One pricing rule of a plan: a single rate and the windows it applies in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub rate: f64,
    #[serde(default)]
    pub time_windows: Vec<TimeWindow>,
}

impl TariffPeriod {
    pub fn new(rate: f64, time_windows: Vec<TimeWindow>) -> Self {
        Self {
            name: None,
            rate,
            time_windows,
        }
    }

    pub fn named(name: impl Into<String>, rate: f64, time_windows: Vec<TimeWindow>) -> Self {
        Self {
            name: Some(name.into()),
            rate,
            time_windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_minute_range_end_of_day_sentinel() {
        let window = TimeWindow::new(&[DayCode::Mon], t("12:00"), t("00:00"));
        assert_eq!(window.minute_range(), 720..1440);

        let window = TimeWindow::new(&[DayCode::Mon], t("12:00"), t("24:00"));
        assert_eq!(window.minute_range(), 720..1440);
    }

    #[test]
    fn test_minute_range_full_day_from_midnight() {
        let window = TimeWindow::new(&[DayCode::Mon], t("00:00"), t("00:00"));
        assert_eq!(window.minute_range(), 0..1440);
    }

    #[test]
    fn test_minute_range_reversed_is_empty() {
        // No wraparound: 22:00-06:00 covers nothing
        let window = TimeWindow::new(&[DayCode::Fri], t("22:00"), t("06:00"));
        assert!(window.minute_range().is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "Peak",
            "rate": 0.42,
            "timeWindows": [
                {"days": ["MON", "TUE"], "startTime": "15:00", "endTime": "21:00"}
            ]
        }"#;
        let period: TariffPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.name.as_deref(), Some("Peak"));
        assert_eq!(period.rate, 0.42);
        assert_eq!(period.time_windows.len(), 1);
        assert!(period.time_windows[0].applies_to(DayCode::Tue));
        assert!(!period.time_windows[0].applies_to(DayCode::Wed));
        assert_eq!(period.time_windows[0].minute_range(), 900..1260);
    }

    #[test]
    fn test_deserialize_missing_windows_is_empty() {
        let period: TariffPeriod = serde_json::from_str(r#"{"rate": 0.1}"#).unwrap();
        assert!(period.time_windows.is_empty());
        assert!(period.name.is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let json = r#"{"rate": 0.1, "timeWindows": [
            {"days": ["MON"], "startTime": "7am", "endTime": "09:00"}
        ]}"#;
        assert!(serde_json::from_str::<TariffPeriod>(json).is_err());
    }
}
