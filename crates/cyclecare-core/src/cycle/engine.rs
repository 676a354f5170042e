//! Phase classification and cycle-start projection.
//!
//! Every function here is a pure function of its arguments: no I/O, no
//! shared state, safe to call from any number of threads at once. Dates
//! are handled as [`NaiveDate`] so that comparisons are exact at day
//! granularity and time-of-day never leaks into the day count.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::phase::CyclePhase;
use super::profile::CycleProfile;
use crate::error::CycleError;

/// Date format used for every user-supplied or stored date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Derived, per-day view of the cycle. Recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInfo {
    /// 1-indexed, always within `1..=cycle_length_days`.
    pub day_of_cycle: u32,
    pub phase: CyclePhase,
    pub is_fertile: bool,
}

/// Classify `date` against `profile`.
///
/// Dates before the cycle start wrap into the previous equivalent cycle, so
/// the day before the start is the last day of a cycle.
pub fn classify(date: NaiveDate, profile: &CycleProfile) -> CycleInfo {
    let cycle_length = i64::from(profile.cycle_length_days());
    let raw_offset = date
        .signed_duration_since(profile.cycle_start_date())
        .num_days();
    let days_since_start = raw_offset.rem_euclid(cycle_length);
    let day_of_cycle = days_since_start + 1;

    let window = profile.fertile_window();
    let (phase, is_fertile) = if day_of_cycle <= i64::from(profile.period_duration_days()) {
        (CyclePhase::Menstrual, false)
    } else if window.contains(day_of_cycle) {
        (CyclePhase::Ovulation, true)
    } else if day_of_cycle < window.start {
        (CyclePhase::Follicular, false)
    } else {
        (CyclePhase::Luteal, false)
    };

    tracing::trace!(%date, raw_offset, day_of_cycle, %phase, "classified day");

    CycleInfo {
        // In 1..=cycle_length, which came from a u32.
        day_of_cycle: day_of_cycle as u32,
        phase,
        is_fertile,
    }
}

/// Classify the calendar day an instant falls on, in the instant's own
/// time zone.
pub fn classify_at<Tz: TimeZone>(instant: &DateTime<Tz>, profile: &CycleProfile) -> CycleInfo {
    classify(instant.date_naive(), profile)
}

/// Classify the current local day.
pub fn classify_today(profile: &CycleProfile) -> CycleInfo {
    classify(today(), profile)
}

/// First projected cycle start strictly after `after`.
///
/// Walks forward from the recorded start one cycle at a time. When the
/// recorded start itself lies more than a cycle beyond `after`, the walk
/// continues backward so the result is always the earliest projected start
/// after `after`.
///
/// # Errors
///
/// Returns [`CycleError::InvalidDate`] if the projection leaves chrono's
/// supported date range.
pub fn next_occurrence(profile: &CycleProfile, after: NaiveDate) -> Result<NaiveDate, CycleError> {
    let step = Days::new(u64::from(profile.cycle_length_days()));
    let mut candidate = profile.cycle_start_date();

    while candidate <= after {
        candidate = candidate.checked_add_days(step).ok_or_else(|| {
            CycleError::date(after.to_string(), "next cycle start is beyond the supported date range")
        })?;
    }
    while let Some(previous) = candidate.checked_sub_days(step) {
        if previous <= after {
            break;
        }
        candidate = previous;
    }

    tracing::debug!(%after, next = %candidate, "projected next cycle start");
    Ok(candidate)
}

/// [`next_occurrence`] relative to the current local day.
///
/// # Errors
///
/// See [`next_occurrence`].
pub fn next_occurrence_from_today(profile: &CycleProfile) -> Result<NaiveDate, CycleError> {
    next_occurrence(profile, today())
}

/// Whole days from `today` until the next projected cycle start (always >= 1).
///
/// # Errors
///
/// See [`next_occurrence`].
pub fn days_until_next(profile: &CycleProfile, today: NaiveDate) -> Result<i64, CycleError> {
    let next = next_occurrence(profile, today)?;
    Ok(next.signed_duration_since(today).num_days())
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CycleError::InvalidDate`] for empty or unparseable input.
pub fn parse_date(input: &str) -> Result<NaiveDate, CycleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CycleError::date(input, "date is empty"));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| CycleError::date(input, format!("expected YYYY-MM-DD ({e})")))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
