//! Mood types and the fixed mood -> effort recommendation table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::effort::EffortLevel;
use crate::error::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoodType {
    Tired,
    Neutral,
    Energetic,
}

impl MoodType {
    pub const ALL: [MoodType; 3] = [MoodType::Tired, MoodType::Neutral, MoodType::Energetic];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodType::Tired => "TIRED",
            MoodType::Neutral => "NEUTRAL",
            MoodType::Energetic => "ENERGETIC",
        }
    }

    pub fn recommended_effort(self) -> EffortLevel {
        recommended_effort(self)
    }
}

/// TIRED -> LOW, NEUTRAL -> MEDIUM, ENERGETIC -> HIGH.
///
/// No wildcard arm: a new mood must be mapped here before the crate compiles.
pub fn recommended_effort(mood: MoodType) -> EffortLevel {
    match mood {
        MoodType::Tired => EffortLevel::Low,
        MoodType::Neutral => EffortLevel::Medium,
        MoodType::Energetic => EffortLevel::High,
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; blank input is treated as an absent mood.
impl FromStr for MoodType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PlannerError::validation("mood is required"));
        }
        MoodType::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlannerError::validation(format!("unknown mood: {s}")))
    }
}
