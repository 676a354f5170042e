pub mod calendar;
pub mod config;
pub mod next;
pub mod profile;
pub mod status;
pub mod suggest;

use chrono::{Local, NaiveDate};
use clap::Args;
use cyclecare_core::cycle::profile::{REGULAR_CYCLE_LENGTH, REGULAR_PERIOD_DURATION};
use cyclecare_core::{parse_date, Config, CycleInfo, CycleProfile};

/// Profile overrides shared by every subcommand.
///
/// Without `--start` the stored profile is used; `--length` and `--period`
/// then override its averages for this invocation only.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Cycle start date to use instead of the stored profile (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub start: Option<String>,
    /// Average cycle length in days
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub length: Option<i64>,
    /// Period duration in days
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub period: Option<i64>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Build the profile for this invocation.
    pub fn profile(&self) -> Result<CycleProfile, Box<dyn std::error::Error>> {
        let profile = match &self.start {
            Some(start) => CycleProfile::from_strs(
                start,
                self.length.unwrap_or(i64::from(REGULAR_CYCLE_LENGTH)),
                self.period.unwrap_or(i64::from(REGULAR_PERIOD_DURATION)),
            )?,
            None => {
                let stored = Config::load()?.cycle_profile().map_err(|_| {
                    "no cycle profile stored; run 'profile set --start YYYY-MM-DD' or pass --start"
                })?;
                CycleProfile::new(
                    stored.cycle_start_date(),
                    self.length.unwrap_or(i64::from(stored.cycle_length_days())),
                    self.period.unwrap_or(i64::from(stored.period_duration_days())),
                )?
            }
        };
        tracing::debug!(?profile, "resolved profile");
        Ok(profile)
    }
}

/// Parse an optional date argument, defaulting to today.
pub fn date_or_today(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(d) => Ok(parse_date(d)?),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line human summary of a classified day.
pub fn describe(info: &CycleInfo, cycle_length: u32) -> String {
    let fertile = if info.is_fertile { ", fertile window" } else { "" };
    format!(
        "Day {} of {} ({} phase{})",
        info.day_of_cycle, cycle_length, info.phase, fertile
    )
}
