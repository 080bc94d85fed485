/// Coverage report rendering
/// Plain text for terminals and logs, pretty JSON for tooling

use std::fmt::Write;

use crate::tariff::{ClockTime, CoverageResult, DayCode};

/// Exit status when the plan is covered (and overlap-free under strict mode)
pub const EXIT_OK: u8 = 0;
/// Exit status for gaps, strict-mode overlaps, or a lookup landing in a gap
pub const EXIT_NOT_COVERED: u8 = 1;
/// Exit status when the plan or configuration could not be loaded
pub const EXIT_LOAD_FAILED: u8 = 2;

/// Format a minute count for display: "1h 30m", "45m"
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

fn format_rates(rates: &[f64]) -> String {
    rates
        .iter()
        .map(|rate| rate.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a coverage result as a human-readable summary
pub fn render_text(plan_name: &str, result: &CoverageResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Plan: {}", plan_name);

    if result.fully_covered {
        let _ = writeln!(out, "Status: COVERED");
    } else {
        let _ = writeln!(
            out,
            "Status: NOT COVERED ({} uncovered)",
            format_minutes(result.uncovered_minutes())
        );
    }

    for gap in &result.gaps {
        let _ = writeln!(out, "GAP      {} {}-{}", gap.day, gap.start_time, gap.end_time);
    }

    for overlap in &result.overlaps {
        let _ = writeln!(
            out,
            "OVERLAP  {} {}-{} rates: {}",
            overlap.day,
            overlap.start_time,
            overlap.end_time,
            format_rates(&overlap.rates)
        );
    }

    if result.fully_covered && !result.has_overlaps() {
        let _ = writeln!(out, "Every minute of the week has exactly one rate.");
    }

    out
}

pub fn render_json(result: &CoverageResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Exit status for a validation run. Gaps always fail, overlaps only in strict mode.
pub fn exit_status(result: &CoverageResult, strict: bool) -> u8 {
    if !result.fully_covered || (strict && result.has_overlaps()) {
        EXIT_NOT_COVERED
    } else {
        EXIT_OK
    }
}

/// One-line answer for a rate lookup.
///
/// `entries` is the window-day hit count from `slot_entries`; `rates` only
/// lists the distinct values, so equal rates can still be an overlap.
pub fn render_lookup(day: DayCode, time: ClockTime, rates: &[f64], entries: usize) -> String {
    match (entries, rates) {
        (0, _) | (_, []) => format!("{} {}: no rate (coverage gap)", day, time),
        (1, [rate]) => format!("{} {}: {}", day, time, rate),
        _ => format!("{} {}: {} (overlap)", day, time, format_rates(rates)),
    }
}

/// Exit status for a rate lookup: only a gap fails
pub fn lookup_status(entries: usize) -> u8 {
    if entries == 0 {
        EXIT_NOT_COVERED
    } else {
        EXIT_OK
    }
}
