//! Single-activity ICS export.
//!
//! Notes:
//! - DTSTART is the due date at a fixed 09:00:00, floating (no `Z`, no TZID).
//! - No PRODID/UID and no text escaping; calendar apps import the bare event.

use crate::activity::Activity;
use crate::error::{PlannerError, Result};

pub fn ics_file_name(activity_id: u32) -> String {
    format!("activity_{activity_id}.ics")
}

/// Render a VCALENDAR holding one VEVENT for `activity`.
pub fn render_ics(activity: &Activity) -> Result<String> {
    let due = activity
        .due_date()
        .ok_or(PlannerError::MissingDueDate(activity.id()))?;

    let mut s = String::new();
    s.push_str("BEGIN:VCALENDAR\nVERSION:2.0\n");
    s.push_str("BEGIN:VEVENT\n");
    s.push_str(&format!("SUMMARY:{}\n", activity.title()));
    s.push_str(&format!("DESCRIPTION:{}\n", activity.description()));
    s.push_str(&format!("DTSTART:{}T090000\n", due.format("%Y%m%d")));
    s.push_str("END:VEVENT\n");
    s.push_str("END:VCALENDAR\n");
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effort::EffortLevel;
    use chrono::NaiveDate;

    #[test]
    fn renders_fixed_structure() {
        let a = Activity::new("Exam prep", EffortLevel::High)
            .unwrap()
            .with_description("Chapters 1-4")
            .with_due_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        let ics = render_ics(&a).unwrap();
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VEVENT\nSUMMARY:Exam prep\n\
             DESCRIPTION:Chapters 1-4\nDTSTART:20240305T090000\nEND:VEVENT\nEND:VCALENDAR\n"
        );
    }

    #[test]
    fn missing_due_date_is_an_error() {
        let a = Activity::new("Someday", EffortLevel::Low).unwrap();
        assert!(matches!(render_ics(&a), Err(PlannerError::MissingDueDate(0))));
    }

    #[test]
    fn file_name_is_derived_from_id() {
        assert_eq!(ics_file_name(12), "activity_12.ics");
    }
}
