//! moodplan-core: activity/mood domain model for the Mood Planner

pub mod activity;
pub mod activity_manager;
pub mod calendar;
pub mod effort;
pub mod error;
pub mod mood;
pub mod mood_log;
pub mod store;

pub use activity::{Activity, ActivityKind, UNKNOWN_COURSE};
pub use activity_manager::{ActivityManager, LoadReport};
pub use calendar::{ics_file_name, render_ics};
pub use effort::EffortLevel;
pub use error::{PlannerError, Result};
pub use mood::{MoodType, recommended_effort};
pub use mood_log::{MoodLogEntry, MoodManager};
