//! Effort levels used to classify activities and mood recommendations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EffortLevel {
    Low,
    Medium,
    High,
}

impl EffortLevel {
    pub const ALL: [EffortLevel; 3] = [EffortLevel::Low, EffortLevel::Medium, EffortLevel::High];

    /// Enumeration name as written in the activity file.
    pub fn as_str(self) -> &'static str {
        match self {
            EffortLevel::Low => "LOW",
            EffortLevel::Medium => "MEDIUM",
            EffortLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive name match (`"LOW"`, not `"low"`).
impl FromStr for EffortLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(PlannerError::validation("effort level is required"));
        }
        EffortLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| PlannerError::validation(format!("unknown effort level: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!("LOW".parse::<EffortLevel>().unwrap(), EffortLevel::Low);
        assert_eq!("HIGH".parse::<EffortLevel>().unwrap(), EffortLevel::High);
        assert!("low".parse::<EffortLevel>().is_err());
        assert!(" MEDIUM".parse::<EffortLevel>().is_err());
    }

    #[test]
    fn blank_is_validation_error() {
        let err = "  ".parse::<EffortLevel>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&EffortLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }
}
