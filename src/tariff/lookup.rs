//! Which rates apply at a given point in the week

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::clock::{DayCode, MINUTES_PER_DAY};
use super::model::TariffPeriod;

/// Distinct rates covering `minute` (0..1440) on `day`, in period order.
///
/// Uses the same effective ranges as coverage validation. Empty means the
/// minute falls in a gap. Equal rates collapse, so use [`slot_entries`] to
/// tell whether the minute is inside an overlap.
pub fn rates_at(periods: &[TariffPeriod], day: DayCode, minute: u16) -> Vec<f64> {
    let mut rates = Vec::new();
    if minute >= MINUTES_PER_DAY {
        return rates;
    }

    let minute = minute as usize;
    for period in periods {
        let applies = period
            .time_windows
            .iter()
            .any(|window| window.applies_to(day) && window.minute_range().contains(&minute));
        if applies && !rates.contains(&period.rate) {
            rates.push(period.rate);
        }
    }
    rates
}

/// Number of window-day hits covering `minute` on `day`.
///
/// Counts the way coverage validation fills its tracks: every matching window
/// and every listing of `day` in it adds one entry, even when the rate values
/// are equal. Zero is a gap, more than one is an overlap.
pub fn slot_entries(periods: &[TariffPeriod], day: DayCode, minute: u16) -> usize {
    if minute >= MINUTES_PER_DAY {
        return 0;
    }

    let minute = minute as usize;
    periods
        .iter()
        .flat_map(|period| &period.time_windows)
        .filter(|window| window.minute_range().contains(&minute))
        .map(|window| window.days.iter().filter(|&&d| d == day).count())
        .sum()
}

/// Rates applying at a local wall-clock time. Seconds are truncated.
pub fn rates_at_datetime(periods: &[TariffPeriod], at: NaiveDateTime) -> Vec<f64> {
    let day = DayCode::from(at.weekday());
    let minute = (at.hour() * 60 + at.minute()) as u16;
    rates_at(periods, day, minute)
}
