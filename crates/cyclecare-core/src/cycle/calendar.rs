//! Month grid of classified days for calendar rendering.
//!
//! The grid spans whole weeks: from the start of the week containing the
//! first of the month to the end of the week containing its last day.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::Serialize;

use super::engine::{classify, CycleInfo};
use super::phase::CyclePhase;
use super::profile::CycleProfile;
use crate::error::CycleError;

/// One calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    #[serde(flatten)]
    pub info: CycleInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Classify every cell of the grid for `year`/`month`.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::InvalidDate`] for a month outside 1..=12 or a
    /// grid that would leave chrono's date range.
    pub fn build(
        year: i32,
        month: u32,
        today: NaiveDate,
        profile: &CycleProfile,
        week_start: Weekday,
    ) -> Result<Self, CycleError> {
        let label = format!("{year:04}-{month:02}");
        let out_of_range = || CycleError::date(label.clone(), "month is outside the supported range");

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or_else(out_of_range)?;

        let lead = days_into_week(first.weekday(), week_start);
        let trail = 6 - days_into_week(last.weekday(), week_start);
        let grid_start = first
            .checked_sub_days(chrono::Days::new(lead))
            .ok_or_else(out_of_range)?;
        let grid_end = last
            .checked_add_days(chrono::Days::new(trail))
            .ok_or_else(out_of_range)?;

        let mut cells = Vec::with_capacity(42);
        let mut day = grid_start;
        loop {
            cells.push(DayCell {
                date: day,
                is_current_month: day.month() == month && day.year() == year,
                is_today: day == today,
                info: classify(day, profile),
            });
            if day >= grid_end {
                break;
            }
            day = day.succ_opt().ok_or_else(out_of_range)?;
        }

        tracing::debug!(month = %label, cells = cells.len(), "built month grid");

        Ok(Self {
            year,
            month,
            week_start,
            cells,
        })
    }

    /// Rows of seven cells, first row starting on `week_start`.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// In-month days classified as menstrual.
    pub fn period_days(&self) -> impl Iterator<Item = &DayCell> {
        self.in_month()
            .filter(|cell| cell.info.phase == CyclePhase::Menstrual)
    }

    /// In-month days inside the fertile window.
    pub fn fertile_days(&self) -> impl Iterator<Item = &DayCell> {
        self.in_month().filter(|cell| cell.info.is_fertile)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    fn in_month(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| cell.is_current_month)
    }
}

/// Position of `day` in a week that begins on `week_start` (0..=6).
fn days_into_week(day: Weekday, week_start: Weekday) -> u64 {
    let day = u64::from(day.num_days_from_monday());
    let start = u64::from(week_start.num_days_from_monday());
    (day + 7 - start) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> CycleProfile {
        CycleProfile::regular(date(2024, 1, 1))
    }

    #[test]
    fn january_2024_sunday_grid() {
        // Jan 1 2024 is a Monday, Jan 31 a Wednesday.
        let grid = MonthGrid::build(2024, 1, date(2024, 1, 12), &profile(), Weekday::Sun).unwrap();
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.cells[0].date, date(2023, 12, 31));
        assert!(!grid.cells[0].is_current_month);
        assert_eq!(grid.cells[0].info.day_of_cycle, 28);
        assert_eq!(grid.cells.last().unwrap().date, date(2024, 2, 3));
        assert!(grid.weeks().all(|w| w.len() == 7));
        assert!(grid.weeks().all(|w| w[0].date.weekday() == Weekday::Sun));
    }

    #[test]
    fn monday_start_shifts_grid() {
        let grid = MonthGrid::build(2024, 1, date(2024, 1, 12), &profile(), Weekday::Mon).unwrap();
        assert_eq!(grid.cells[0].date, date(2024, 1, 1));
        assert_eq!(grid.cells.last().unwrap().date, date(2024, 2, 4));
    }

    #[test]
    fn six_week_month() {
        // Mar 2024 starts on a Friday and has 31 days.
        let grid = MonthGrid::build(2024, 3, date(2024, 1, 1), &profile(), Weekday::Sun).unwrap();
        assert_eq!(grid.cells.len(), 42);
    }

    #[test]
    fn four_week_february() {
        // Feb 2015 starts on a Sunday and has 28 days.
        let grid = MonthGrid::build(2015, 2, date(2015, 2, 1), &profile(), Weekday::Sun).unwrap();
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(|c| c.is_current_month));
    }

    #[test]
    fn marks_today_and_phase_days() {
        let grid = MonthGrid::build(2024, 1, date(2024, 1, 12), &profile(), Weekday::Sun).unwrap();
        let today = grid.today().unwrap();
        assert_eq!(today.date, date(2024, 1, 12));
        assert!(today.info.is_fertile);

        // Cycles start Jan 1 and Jan 29: days 1-5 and 29-31 are menstrual.
        let period: Vec<u32> = grid.period_days().map(|c| c.date.day()).collect();
        assert_eq!(period, vec![1, 2, 3, 4, 5, 29, 30, 31]);
        let fertile: Vec<u32> = grid.fertile_days().map(|c| c.date.day()).collect();
        assert_eq!(fertile, vec![12, 13, 14, 15, 16]);
    }

    #[test]
    fn rejects_invalid_month() {
        let err = MonthGrid::build(2024, 13, date(2024, 1, 1), &profile(), Weekday::Sun).unwrap_err();
        assert!(matches!(err, CycleError::InvalidDate { .. }));
    }

    #[test]
    fn serializes_flat_cells() {
        let grid = MonthGrid::build(2024, 1, date(2024, 1, 12), &profile(), Weekday::Sun).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        let cell = &json["cells"][1];
        assert_eq!(cell["date"], "2024-01-01");
        assert_eq!(cell["dayOfCycle"], 1);
        assert_eq!(cell["phase"], "Menstrual");
        assert_eq!(cell["isCurrentMonth"], true);
    }
}
