//! # CycleCare Core Library
//!
//! This library provides the core logic for CycleCare, a personal cycle
//! tracker. Given a recorded cycle start and the user's average cycle and
//! period lengths, it classifies any calendar day into a phase and projects
//! upcoming cycle starts. The CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Cycle Engine**: Pure, deterministic functions over a validated
//!   [`CycleProfile`]; no I/O and no shared state
//! - **Calendar**: Month grids of classified days
//! - **Suggestions**: Phase-paired partner suggestions and insight prompts
//! - **Storage**: TOML-based configuration holding the stored profile
//!
//! ## Key Components
//!
//! - [`classify`]: Phase, fertility and day-of-cycle for a date
//! - [`next_occurrence`]: Next projected cycle start after a date
//! - [`MonthGrid`]: Calendar view for one month
//! - [`Config`]: Application configuration management

pub mod cycle;
pub mod error;
pub mod storage;
pub mod suggestions;

pub use cycle::{
    classify, classify_at, classify_today, days_until_next, next_occurrence,
    next_occurrence_from_today, parse_date, CycleInfo, CyclePhase, CycleProfile, DayCell,
    FertileWindow, MonthGrid,
};
pub use error::{ConfigError, CoreError, CycleError};
pub use storage::{Config, WeekStart};
pub use suggestions::{suggestions_for, InsightPrompt, Suggestion};
