//! Stored cycle profile commands.
//!
//! The profile lives in the `[profile]` table of the config file. Use the
//! global `--start`, `--length` and `--period` flags with `set`.

use clap::Subcommand;
use chrono::NaiveDate;
use cyclecare_core::{next_occurrence, Config, CycleProfile};
use serde::Serialize;

use super::{date_or_today, print_json, GlobalArgs};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Store a profile built from --start/--length/--period
    Set {
        /// Use the regular preset (28-day cycle, 5-day period)
        #[arg(long)]
        regular: bool,
    },
    /// Record that a new period started, keeping the stored averages
    LogPeriod {
        /// Start date of the new period (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove the stored profile
    Clear,
}

pub fn run(global: &GlobalArgs, action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => {
            let profile = Config::load()?.cycle_profile()?;
            show(global, &profile)?;
        }
        ProfileAction::Set { regular } => {
            let profile = if regular {
                if global.length.is_some() || global.period.is_some() {
                    return Err(
                        "--regular sets a 28-day cycle with a 5-day period; drop --length/--period or drop --regular"
                            .into(),
                    );
                }
                let start = match &global.start {
                    Some(start) => cyclecare_core::parse_date(start)?,
                    None => global.profile()?.cycle_start_date(),
                };
                CycleProfile::regular(start)
            } else {
                global.profile()?
            };
            store(Some(profile))?;
            show(global, &profile)?;
        }
        ProfileAction::LogPeriod { date } => {
            let start = date_or_today(date.as_deref())?;
            let stored = Config::load()?.cycle_profile()?;
            let profile = stored.with_cycle_start(start);
            store(Some(profile))?;
            tracing::info!(%start, "logged period start");
            show(global, &profile)?;
        }
        ProfileAction::Clear => {
            store(None)?;
            println!("profile cleared");
        }
    }
    Ok(())
}

/// JSON view of a profile, keyed like the other CLI payloads.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileView {
    cycle_start_date: NaiveDate,
    cycle_length_days: u32,
    period_duration_days: u32,
    fertile_window_start: i64,
    fertile_window_end: i64,
}

impl From<&CycleProfile> for ProfileView {
    fn from(profile: &CycleProfile) -> Self {
        let window = profile.fertile_window();
        Self {
            cycle_start_date: profile.cycle_start_date(),
            cycle_length_days: profile.cycle_length_days(),
            period_duration_days: profile.period_duration_days(),
            fertile_window_start: window.start,
            fertile_window_end: window.end,
        }
    }
}

fn store(profile: Option<CycleProfile>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    config.profile = profile;
    config.save()?;
    Ok(())
}

fn show(global: &GlobalArgs, profile: &CycleProfile) -> Result<(), Box<dyn std::error::Error>> {
    if global.json {
        return print_json(&ProfileView::from(profile));
    }
    let window = profile.fertile_window();
    println!("Cycle start:     {}", profile.cycle_start_date());
    println!("Cycle length:    {} days", profile.cycle_length_days());
    println!("Period duration: {} days", profile.period_duration_days());
    println!("Fertile window:  days {}-{}", window.start, window.end);
    let today = date_or_today(None)?;
    println!("Next period:     {}", next_occurrence(profile, today)?);
    Ok(())
}
