use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four phases a day of the cycle can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    /// All phases in the order they occur within one cycle.
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Menstrual,
        CyclePhase::Follicular,
        CyclePhase::Ovulation,
        CyclePhase::Luteal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Menstrual",
            CyclePhase::Follicular => "Follicular",
            CyclePhase::Ovulation => "Ovulation",
            CyclePhase::Luteal => "Luteal",
        }
    }

    /// Short description shown next to the phase badge.
    pub fn description(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Rest and restoration. Focus on comfort.",
            CyclePhase::Follicular => "Energy begins to rise. Perfect for planning.",
            CyclePhase::Ovulation => "Peak energy and social drive. High fertility.",
            CyclePhase::Luteal => "Turning inward. Gentleness and stability are key.",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CyclePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CyclePhase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown cycle phase: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("luteal".parse::<CyclePhase>(), Ok(CyclePhase::Luteal));
        assert_eq!(" OVULATION ".parse::<CyclePhase>(), Ok(CyclePhase::Ovulation));
        assert!("spring".parse::<CyclePhase>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for phase in CyclePhase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{phase}\""));
        }
    }

    #[test]
    fn every_phase_has_a_description() {
        assert!(CyclePhase::ALL.iter().all(|p| !p.description().is_empty()));
    }
}
