//! 24x7 coverage check for a plan's tariff periods
//!
//! Each weekday is discretized into 1440 one-minute slots. Every window of
//! every period pushes its rate into the slots it covers, then each day is
//! scanned for runs of empty slots (gaps) and runs of slots holding more than
//! one rate (overlaps).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::{ClockTime, DayCode, MINUTES_PER_DAY};
use super::model::TariffPeriod;

/// Contiguous range of a day with no applicable rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGap {
    pub day: DayCode,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl CoverageGap {
    pub fn minutes(&self) -> u16 {
        self.end_time.minutes() - self.start_time.minutes()
    }
}

/// Contiguous range of a day where more than one rate applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageOverlap {
    pub day: DayCode,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Distinct rate values seen in the range. Periods sharing a rate value
    /// show up once.
    pub rates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    /// True when there are no gaps. Overlapping minutes still count as covered.
    pub fully_covered: bool,
    pub gaps: Vec<CoverageGap>,
    pub overlaps: Vec<CoverageOverlap>,
}

impl CoverageResult {
    /// Total uncovered minutes across the week
    pub fn uncovered_minutes(&self) -> u32 {
        self.gaps.iter().map(|gap| u32::from(gap.minutes())).sum()
    }

    pub fn has_overlaps(&self) -> bool {
        !self.overlaps.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Uncovered,
    Single,
    Overlapping,
}

fn slot_state(slot: &[f64]) -> SlotState {
    match slot.len() {
        0 => SlotState::Uncovered,
        1 => SlotState::Single,
        _ => SlotState::Overlapping,
    }
}

/// Check that every minute of the week is covered by exactly one rate.
///
/// Gaps and overlaps come back in Monday-first day order, then time order.
/// Windows whose start is after their end cover nothing.
pub fn validate_coverage(periods: &[TariffPeriod]) -> CoverageResult {
    let slots_per_day = MINUTES_PER_DAY as usize;
    let mut tracks: [Vec<Vec<f64>>; 7] = std::array::from_fn(|_| vec![Vec::new(); slots_per_day]);

    for period in periods {
        for window in &period.time_windows {
            let range = window.minute_range();
            for day in &window.days {
                for slot in &mut tracks[day.index()][range.clone()] {
                    slot.push(period.rate);
                }
            }
        }
    }

    let mut gaps = Vec::new();
    let mut overlaps = Vec::new();
    for day in DayCode::ALL {
        scan_day(day, &tracks[day.index()], &mut gaps, &mut overlaps);
    }

    debug!(
        "Coverage check: {} periods, {} gaps, {} overlaps",
        periods.len(),
        gaps.len(),
        overlaps.len()
    );

    CoverageResult {
        fully_covered: gaps.is_empty(),
        gaps,
        overlaps,
    }
}

fn scan_day(
    day: DayCode,
    track: &[Vec<f64>],
    gaps: &mut Vec<CoverageGap>,
    overlaps: &mut Vec<CoverageOverlap>,
) {
    let mut start = 0;
    while start < track.len() {
        let state = slot_state(&track[start]);
        let end = track[start..]
            .iter()
            .position(|slot| slot_state(slot) != state)
            .map_or(track.len(), |offset| start + offset);

        match state {
            SlotState::Uncovered => gaps.push(CoverageGap {
                day,
                start_time: ClockTime::from_slot(start),
                end_time: ClockTime::from_slot(end),
            }),
            SlotState::Overlapping => {
                let mut rates: Vec<f64> = Vec::new();
                for &rate in track[start..end].iter().flatten() {
                    if !rates.contains(&rate) {
                        rates.push(rate);
                    }
                }
                overlaps.push(CoverageOverlap {
                    day,
                    start_time: ClockTime::from_slot(start),
                    end_time: ClockTime::from_slot(end),
                    rates,
                });
            }
            SlotState::Single => {}
        }

        start = end;
    }
}
