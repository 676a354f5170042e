use chrono::{Days, NaiveDate};
use cyclecare_core::next_occurrence;

use super::{date_or_today, print_json, GlobalArgs};

pub fn run(
    global: &GlobalArgs,
    after: Option<&str>,
    count: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = global.profile()?;
    let after = date_or_today(after)?;

    let first = next_occurrence(&profile, after)?;
    let step = Days::new(u64::from(profile.cycle_length_days()));
    let mut upcoming: Vec<NaiveDate> = vec![first];
    for _ in 1..count {
        let Some(last) = upcoming.last() else { break };
        let next = last
            .checked_add_days(step)
            .ok_or("projection is beyond the supported date range")?;
        upcoming.push(next);
    }

    if global.json {
        return print_json(&upcoming);
    }
    for date in upcoming {
        let days = date.signed_duration_since(after).num_days();
        println!("{date} (+{days}d)");
    }
    Ok(())
}
