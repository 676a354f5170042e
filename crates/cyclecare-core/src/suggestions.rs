//! Phase-paired partner suggestions and the insight request text.
//!
//! The catalog is static. [`InsightPrompt`] only builds the request for an
//! external text generator; sending it is the caller's business.

use indoc::formatdoc;
use serde::Serialize;

use crate::cycle::{CycleInfo, CyclePhase, CycleProfile};

/// Icon tag rendered next to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionIcon {
    Coffee,
    Heart,
    Sparkles,
    Utensils,
    MapPin,
    Flower,
    Book,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub icon: SuggestionIcon,
}

const fn s(text: &'static str, icon: SuggestionIcon) -> Suggestion {
    Suggestion { text, icon }
}

const MENSTRUAL: [Suggestion; 4] = [
    s("Prepare a warm compress and their favorite tea.", SuggestionIcon::Coffee),
    s("Offer a gentle foot massage or back rub.", SuggestionIcon::Heart),
    s("Take over their chores so they can rest.", SuggestionIcon::Sparkles),
    s("Cook a nutrient-rich warm meal like a stew.", SuggestionIcon::Utensils),
];

const FOLLICULAR: [Suggestion; 4] = [
    s("Plan an exciting weekend getaway or day trip.", SuggestionIcon::MapPin),
    s("Surprise them with a small 'just because' gift.", SuggestionIcon::Sparkles),
    s("Go for a scenic walk or try a new hobby together.", SuggestionIcon::Flower),
    s("Write a list of things you appreciate about them.", SuggestionIcon::Book),
];

const OVULATION: [Suggestion; 4] = [
    s("Dress up and go for a fancy candlelit dinner.", SuggestionIcon::Utensils),
    s("Write a deeply heartfelt love letter.", SuggestionIcon::Heart),
    s("Plan a social evening with your favorite couple friends.", SuggestionIcon::Sparkles),
    s("Initiate a meaningful conversation about your future.", SuggestionIcon::Moon),
];

const LUTEAL: [Suggestion; 4] = [
    s("Create a cozy 'nest' at home for a movie marathon.", SuggestionIcon::Moon),
    s("Listen deeply and offer validation without fixing.", SuggestionIcon::Heart),
    s("Order their favorite comfort food for delivery.", SuggestionIcon::Utensils),
    s("Spend a quiet evening reading side-by-side.", SuggestionIcon::Book),
];

pub fn suggestions_for(phase: CyclePhase) -> &'static [Suggestion] {
    match phase {
        CyclePhase::Menstrual => &MENSTRUAL,
        CyclePhase::Follicular => &FOLLICULAR,
        CyclePhase::Ovulation => &OVULATION,
        CyclePhase::Luteal => &LUTEAL,
    }
}

/// Shown in place of a generated insight when the generator is unavailable.
pub const FALLBACK_INSIGHT: &str = "Focus on gentle presence and active listening today.";

pub const INSIGHT_SYSTEM_INSTRUCTION: &str = "You are a thoughtful relationship and wellness coach for CycleCare+. Be concise, warm, and encouraging.";

pub const INSIGHT_TEMPERATURE: f32 = 0.7;

/// Request for a short partner tip describing the given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPrompt {
    pub system_instruction: &'static str,
    pub contents: String,
    pub temperature: f32,
}

impl InsightPrompt {
    pub fn for_day(info: &CycleInfo, profile: &CycleProfile) -> Self {
        let contents = formatdoc! {"
            The user is currently in the {phase} phase (Day {day} of a {length}-day cycle).
            Provide a brief, supportive, and romantic tip (max 2 sentences) for their partner to help them feel loved and understood today.
            Focus on the hormonal shift of the {phase} phase.",
            phase = info.phase,
            day = info.day_of_cycle,
            length = profile.cycle_length_days(),
        };

        Self {
            system_instruction: INSIGHT_SYSTEM_INSTRUCTION,
            contents,
            temperature: INSIGHT_TEMPERATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{classify, parse_date};

    #[test]
    fn four_suggestions_per_phase() {
        for phase in CyclePhase::ALL {
            assert_eq!(suggestions_for(phase).len(), 4, "{phase}");
        }
    }

    #[test]
    fn phases_have_distinct_suggestions() {
        assert_ne!(
            suggestions_for(CyclePhase::Menstrual)[0],
            suggestions_for(CyclePhase::Luteal)[0]
        );
    }

    #[test]
    fn prompt_describes_day_and_phase() {
        let profile = CycleProfile::regular(parse_date("2024-01-01").unwrap());
        let info = classify(parse_date("2024-01-13").unwrap(), &profile);
        let prompt = InsightPrompt::for_day(&info, &profile);

        assert!(prompt
            .contents
            .starts_with("The user is currently in the Ovulation phase (Day 13 of a 28-day cycle)."));
        assert!(prompt.contents.ends_with("Focus on the hormonal shift of the Ovulation phase."));
        assert_eq!(prompt.temperature, INSIGHT_TEMPERATURE);
    }

    #[test]
    fn icons_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_value(SuggestionIcon::MapPin).unwrap(),
            serde_json::json!("map-pin")
        );
    }
}
