//! Flat-file line codec for activities.
//!
//! One activity per line:
//!   <id>,<title>,<description>,<EFFORT_LEVEL_NAME>,<TypeLabel>
//!
//! Fields are joined with `,` and never quoted or escaped, so a comma inside a
//! title or description shifts the fields on reload. Course name and due date
//! are not stored: School rows come back with course "Unknown" and every row
//! gets the load-time date.
//!
//! Trailing empty fields are dropped before counting, so `1,a,b,LOW,` has four
//! fields and is skipped. Ids are unsigned: a negative id makes the line malformed.

use chrono::NaiveDate;
use std::fmt;

use crate::activity::{Activity, ActivityKind, UNKNOWN_COURSE};
use crate::effort::EffortLevel;

const FIELD_COUNT: usize = 5;

/// Why a line was skipped during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    TooFewFields(usize),
    BadId(String),
    UnknownEffort(String),
    BlankTitle,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::TooFewFields(n) => write!(f, "expected {FIELD_COUNT} fields, found {n}"),
            LineError::BadId(raw) => write!(f, "unparsable id '{raw}'"),
            LineError::UnknownEffort(raw) => write!(f, "unknown effort level '{raw}'"),
            LineError::BlankTitle => f.write_str("blank title"),
        }
    }
}

pub fn encode_line(activity: &Activity) -> String {
    format!(
        "{},{},{},{},{}",
        activity.id(),
        activity.title(),
        activity.description(),
        activity.effort_level(),
        activity.type_label()
    )
}

/// Rebuild an activity from one line. Fields past the fifth are ignored.
pub fn decode_line(line: &str, today: NaiveDate) -> Result<Activity, LineError> {
    let fields: Vec<&str> = line.trim_end_matches(',').split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(LineError::TooFewFields(fields.len()));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| LineError::BadId(fields[0].to_string()))?;
    let effort_level: EffortLevel = fields[3]
        .parse()
        .map_err(|_| LineError::UnknownEffort(fields[3].to_string()))?;

    let kind = if fields[4].eq_ignore_ascii_case("school") {
        ActivityKind::school(UNKNOWN_COURSE)
    } else {
        ActivityKind::Personal
    };

    let mut activity = Activity::new(fields[1], effort_level)
        .map_err(|_| LineError::BlankTitle)?
        .with_description(fields[2])
        .with_due_date(today)
        .with_kind(kind);
    activity.id = id;

    Ok(activity)
}
