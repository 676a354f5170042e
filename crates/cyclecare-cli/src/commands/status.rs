use chrono::NaiveDate;
use cyclecare_core::{classify, next_occurrence, parse_date, CycleInfo};
use serde::Serialize;

use super::{date_or_today, describe, print_json, GlobalArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    date: NaiveDate,
    #[serde(flatten)]
    info: CycleInfo,
    description: &'static str,
    next_cycle_start: NaiveDate,
    days_until_next: i64,
}

#[derive(Serialize)]
struct Classified {
    date: NaiveDate,
    #[serde(flatten)]
    info: CycleInfo,
}

pub fn run(global: &GlobalArgs, date: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let profile = global.profile()?;
    let date = date_or_today(date)?;
    let info = classify(date, &profile);
    let next_cycle_start = next_occurrence(&profile, date)?;

    let report = StatusReport {
        date,
        info,
        description: info.phase.description(),
        next_cycle_start,
        days_until_next: next_cycle_start.signed_duration_since(date).num_days(),
    };

    if global.json {
        return print_json(&report);
    }

    println!("{}: {}", report.date, describe(&info, profile.cycle_length_days()));
    println!("  {}", report.description);
    println!(
        "  Next period expected {} (in {} day{})",
        report.next_cycle_start,
        report.days_until_next,
        if report.days_until_next == 1 { "" } else { "s" }
    );
    Ok(())
}

pub fn classify_date(global: &GlobalArgs, date: &str) -> Result<(), Box<dyn std::error::Error>> {
    let profile = global.profile()?;
    let date = parse_date(date)?;
    let info = classify(date, &profile);

    if global.json {
        return print_json(&Classified { date, info });
    }
    println!("{date}: {}", describe(&info, profile.cycle_length_days()));
    Ok(())
}
