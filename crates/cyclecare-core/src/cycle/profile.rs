//! The user's cycle parameters.
//!
//! A [`CycleProfile`] can only be obtained through a validating
//! constructor, so every value that reaches the engine already satisfies
//! `cycle_length_days >= 1` and `period_duration_days <= cycle_length_days`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::parse_date;
use crate::error::CycleError;

/// Length of the luteal phase. Fixed by convention, not configurable.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Days on either side of ovulation that count as fertile.
pub const FERTILE_WINDOW_RADIUS: i64 = 2;

/// Cycle length used by the "regular" preset.
pub const REGULAR_CYCLE_LENGTH: u32 = 28;

/// Period duration used by the "regular" preset.
pub const REGULAR_PERIOD_DURATION: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CycleProfileRecord")]
pub struct CycleProfile {
    cycle_start_date: NaiveDate,
    cycle_length_days: u32,
    period_duration_days: u32,
}

/// Unvalidated shape of a stored profile.
#[derive(Debug, Deserialize)]
struct CycleProfileRecord {
    cycle_start_date: NaiveDate,
    cycle_length_days: i64,
    period_duration_days: i64,
}

impl TryFrom<CycleProfileRecord> for CycleProfile {
    type Error = CycleError;

    fn try_from(record: CycleProfileRecord) -> Result<Self, Self::Error> {
        CycleProfile::new(
            record.cycle_start_date,
            record.cycle_length_days,
            record.period_duration_days,
        )
    }
}

/// Closed interval of fertile days, in day-of-cycle units.
///
/// Bounds may be zero or negative when the cycle is shorter than the
/// luteal phase; such days simply never occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertileWindow {
    pub start: i64,
    pub end: i64,
}

impl FertileWindow {
    pub fn contains(&self, day_of_cycle: i64) -> bool {
        (self.start..=self.end).contains(&day_of_cycle)
    }
}

impl CycleProfile {
    /// Validate and build a profile.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidProfile`] if the cycle length is not
    /// positive, the period duration is negative, or the period is longer
    /// than the cycle. Values are never clamped.
    pub fn new(
        cycle_start_date: NaiveDate,
        cycle_length_days: i64,
        period_duration_days: i64,
    ) -> Result<Self, CycleError> {
        if cycle_length_days <= 0 {
            return Err(CycleError::profile(
                "cycle_length_days",
                format!("must be at least 1 (got {cycle_length_days})"),
            ));
        }
        let cycle_length_days = u32::try_from(cycle_length_days).map_err(|_| {
            CycleError::profile(
                "cycle_length_days",
                format!("is too large (got {cycle_length_days})"),
            )
        })?;
        if period_duration_days < 0 {
            return Err(CycleError::profile(
                "period_duration_days",
                format!("must not be negative (got {period_duration_days})"),
            ));
        }
        if period_duration_days > i64::from(cycle_length_days) {
            return Err(CycleError::profile(
                "period_duration_days",
                format!(
                    "must not exceed cycle_length_days ({period_duration_days} > {cycle_length_days})"
                ),
            ));
        }

        Ok(Self {
            cycle_start_date,
            cycle_length_days,
            // Bounded by cycle_length_days above.
            period_duration_days: period_duration_days as u32,
        })
    }

    /// The "regular" preset: 28-day cycle with a 5-day period.
    pub fn regular(cycle_start_date: NaiveDate) -> Self {
        Self {
            cycle_start_date,
            cycle_length_days: REGULAR_CYCLE_LENGTH,
            period_duration_days: REGULAR_PERIOD_DURATION,
        }
    }

    /// Build a profile from a `YYYY-MM-DD` start date string.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidDate`] for an unparseable start date and
    /// [`CycleError::InvalidProfile`] for invalid lengths.
    pub fn from_strs(
        cycle_start_date: &str,
        cycle_length_days: i64,
        period_duration_days: i64,
    ) -> Result<Self, CycleError> {
        let start = parse_date(cycle_start_date)?;
        Self::new(start, cycle_length_days, period_duration_days)
    }

    /// Record a new period start, keeping the averages.
    pub fn with_cycle_start(&self, cycle_start_date: NaiveDate) -> Self {
        Self {
            cycle_start_date,
            ..*self
        }
    }

    pub fn cycle_start_date(&self) -> NaiveDate {
        self.cycle_start_date
    }

    pub fn cycle_length_days(&self) -> u32 {
        self.cycle_length_days
    }

    pub fn period_duration_days(&self) -> u32 {
        self.period_duration_days
    }

    /// Day of the cycle on which ovulation is expected.
    pub fn ovulation_day(&self) -> i64 {
        i64::from(self.cycle_length_days) - LUTEAL_PHASE_DAYS
    }

    pub fn fertile_window(&self) -> FertileWindow {
        let ovulation = self.ovulation_day();
        FertileWindow {
            start: ovulation - FERTILE_WINDOW_RADIUS,
            end: ovulation + FERTILE_WINDOW_RADIUS,
        }
    }
}
