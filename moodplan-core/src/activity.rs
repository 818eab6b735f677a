//! Activity model: one record with a School/Personal discriminator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::effort::EffortLevel;
use crate::error::{PlannerError, Result};

/// Course name given to School activities rebuilt from the activity file.
pub const UNKNOWN_COURSE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Personal,
    School { course_name: String },
}

impl ActivityKind {
    pub fn school(course_name: impl Into<String>) -> Self {
        ActivityKind::School {
            course_name: course_name.into(),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ActivityKind::Personal => "Personal",
            ActivityKind::School { .. } => "School",
        }
    }
}

/// Core activity type.
///
/// `id` is 0 until an `ActivityManager` assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub(crate) id: u32,
    title: String,
    description: String,
    effort_level: EffortLevel,
    due_date: Option<NaiveDate>,
    completed: bool,
    kind: ActivityKind,
}

impl Activity {
    /// Fails with a validation error when `title` is blank. The title is stored trimmed.
    pub fn new(title: impl AsRef<str>, effort_level: EffortLevel) -> Result<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(PlannerError::validation("title cannot be empty"));
        }

        Ok(Self {
            id: 0,
            title: title.to_string(),
            description: String::new(),
            effort_level,
            due_date: None,
            completed: false,
            kind: ActivityKind::Personal,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_kind(mut self, kind: ActivityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn school(self, course_name: impl Into<String>) -> Self {
        self.with_kind(ActivityKind::school(course_name))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn effort_level(&self) -> EffortLevel {
        self.effort_level
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.type_label()
    }

    pub fn course_name(&self) -> Option<&str> {
        match &self.kind {
            ActivityKind::School { course_name } => Some(course_name),
            ActivityKind::Personal => None,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (Effort: {}, Completed: {}, Due: ",
            self.type_label(),
            self.title,
            self.effort_level,
            self.completed
        )?;
        match self.due_date {
            Some(d) => write!(f, "{d})")?,
            None => f.write_str("none)")?,
        }
        if let Some(course) = self.course_name() {
            write!(f, " [Course={course}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        assert!(Activity::new("", EffortLevel::Low).unwrap_err().is_validation());
        assert!(Activity::new("   \t", EffortLevel::Low).is_err());
    }

    #[test]
    fn defaults_and_trimming() {
        let a = Activity::new("  Read book ", EffortLevel::Low).unwrap();
        assert_eq!(a.title(), "Read book");
        assert_eq!(a.description(), "");
        assert_eq!(a.id(), 0);
        assert!(!a.is_completed());
        assert_eq!(a.due_date(), None);
        assert_eq!(a.type_label(), "Personal");
        assert_eq!(a.course_name(), None);
    }

    #[test]
    fn school_variant_carries_course() {
        let a = Activity::new("Biology homework", EffortLevel::Medium)
            .unwrap()
            .with_description("Chapter 8 review questions")
            .school("BIO-121");
        assert_eq!(a.type_label(), "School");
        assert_eq!(a.course_name(), Some("BIO-121"));
    }

    #[test]
    fn display_mentions_course_and_due_date() {
        let a = Activity::new("Lab report", EffortLevel::High)
            .unwrap()
            .with_due_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .school("CHEM-101");
        assert_eq!(
            a.to_string(),
            "[School] Lab report (Effort: HIGH, Completed: false, Due: 2024-03-05) \
             [Course=CHEM-101]"
        );
    }
}
