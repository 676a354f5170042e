use chrono::NaiveDate;
use cyclecare_core::suggestions::FALLBACK_INSIGHT;
use cyclecare_core::{classify, suggestions_for, Config, CyclePhase, InsightPrompt, Suggestion};
use serde::Serialize;

use super::{date_or_today, describe, print_json, GlobalArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionReport {
    date: NaiveDate,
    day_of_cycle: u32,
    phase: CyclePhase,
    suggestions: &'static [Suggestion],
    #[serde(skip_serializing_if = "Option::is_none")]
    insight_prompt: Option<InsightPrompt>,
}

pub fn run(
    global: &GlobalArgs,
    date: Option<&str>,
    prompt: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = global.profile()?;
    let date = date_or_today(date)?;
    let info = classify(date, &profile);

    let config = Config::load()?;
    let suggestions: &'static [Suggestion] = if config.suggestions.enabled {
        suggestions_for(info.phase)
    } else {
        &[]
    };
    let insight_prompt = (prompt || config.suggestions.ai_insight)
        .then(|| InsightPrompt::for_day(&info, &profile));

    let report = SuggestionReport {
        date,
        day_of_cycle: info.day_of_cycle,
        phase: info.phase,
        suggestions,
        insight_prompt,
    };

    if global.json {
        return print_json(&report);
    }

    println!("{date}: {}", describe(&info, profile.cycle_length_days()));
    println!("  {}", info.phase.description());
    if report.suggestions.is_empty() {
        println!("  Suggestions are disabled ('config set suggestions.enabled true').");
    }
    for suggestion in report.suggestions {
        println!("  - {}", suggestion.text);
    }
    if let Some(request) = &report.insight_prompt {
        println!();
        println!("Insight request (temperature {}):", request.temperature);
        println!("  system: {}", request.system_instruction);
        for line in request.contents.lines() {
            println!("  {line}");
        }
        println!("  fallback: {FALLBACK_INSIGHT}");
    }
    Ok(())
}
