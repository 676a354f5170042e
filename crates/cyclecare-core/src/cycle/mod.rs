//! Cycle projection and phase classification.

pub mod calendar;
pub mod engine;
pub mod phase;
pub mod profile;

pub use calendar::{DayCell, MonthGrid};
pub use engine::{
    classify, classify_at, classify_today, days_until_next, next_occurrence,
    next_occurrence_from_today, parse_date, CycleInfo, DATE_FORMAT,
};
pub use phase::CyclePhase;
pub use profile::{CycleProfile, FertileWindow, LUTEAL_PHASE_DAYS};
