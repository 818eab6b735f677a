//! ActivityManager: owns the activity collection and its id counter.
//!
//! Invariants:
//! - ids are assigned 1, 2, 3, ... in insertion order and never reused.
//! - after a load, the counter sits past the highest loaded id.
//! - collection order == insertion order.
//!
//! Single-owner state: wrap the manager in a mutex before sharing it across threads.

use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::activity::Activity;
use crate::calendar::{ics_file_name, render_ics};
use crate::error::{PlannerError, Result};
use crate::mood::MoodType;
use crate::store::{LineError, decode_line, encode_line};

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct ActivityManager {
    activities: Vec<Activity>,
    next_id: u32,
    export_dir: PathBuf,
}

impl Default for ActivityManager {
    fn default() -> Self {
        Self {
            activities: Vec::new(),
            next_id: 1,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ActivityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory that receives `activity_<id>.ics` files (default: `.`).
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Id the next added activity will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn get(&self, id: u32) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id() == id)
    }

    /// Assign the next id (overwriting whatever the caller set) and append.
    ///
    /// Fails with `IdsExhausted` once the counter cannot advance; nothing is appended then.
    pub fn add_activity(&mut self, mut activity: Activity) -> Result<u32> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(PlannerError::IdsExhausted(id))?;
        activity.id = id;
        self.activities.push(activity);
        Ok(id)
    }

    /// Snapshot of the collection in insertion order.
    pub fn all_activities(&self) -> Vec<Activity> {
        self.activities.clone()
    }

    /// Activities whose effort matches the mood's recommended effort, in insertion order.
    pub fn suggest_by_mood(&self, mood: MoodType) -> Vec<Activity> {
        let target = mood.recommended_effort();
        self.activities
            .iter()
            .filter(|a| a.effort_level() == target)
            .cloned()
            .collect()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for a in &self.activities {
            out.push_str(&encode_line(a));
            out.push('\n');
        }

        fs::write(path, out).map_err(|e| {
            warn!(path = %path.display(), error = %e, "activity_save_failed");
            PlannerError::io(path, e)
        })?;

        info!(path = %path.display(), count = self.activities.len(), "activities_saved");
        Ok(())
    }

    /// Load using the local calendar date for reconstructed due dates.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        self.load_from_file_on(path, Local::now().date_naive())
    }

    /// Append every well-formed line of `path`; malformed lines are skipped.
    ///
    /// `today` becomes the due date of each reconstructed activity.
    pub fn load_from_file_on(
        &mut self,
        path: impl AsRef<Path>,
        today: NaiveDate,
    ) -> Result<LoadReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "activity_load_failed");
            PlannerError::io(path, e)
        })?;

        let mut seen: HashSet<u32> = self.activities.iter().map(Activity::id).collect();
        let mut report = LoadReport::default();

        for (lineno, line) in text.lines().enumerate() {
            let activity = match decode_line(line, today) {
                Ok(a) => a,
                Err(reason) => {
                    debug!(line = lineno + 1, %reason, "activity_line_skipped");
                    report.skipped += 1;
                    continue;
                }
            };

            let id = activity.id();
            // the counter must stay representable past this id
            let Some(after) = id.checked_add(1) else {
                let reason = LineError::BadId(id.to_string());
                debug!(line = lineno + 1, %reason, "activity_line_skipped");
                report.skipped += 1;
                continue;
            };
            if !seen.insert(id) {
                debug!(line = lineno + 1, id, "activity_line_skipped_duplicate_id");
                report.skipped += 1;
                continue;
            }

            self.activities.push(activity);
            if after > self.next_id {
                self.next_id = after;
            }
            report.loaded += 1;
        }

        info!(
            path = %path.display(),
            count = report.loaded,
            skipped = report.skipped,
            next_id = self.next_id,
            "activities_loaded"
        );
        Ok(report)
    }

    /// Write `activity_<id>.ics` for one activity into the export directory.
    pub fn export_to_calendar_file(&self, activity_id: u32) -> Result<PathBuf> {
        let activity = self
            .get(activity_id)
            .ok_or(PlannerError::NotFound(activity_id))?;
        let ics = render_ics(activity)?;

        let path = self.export_dir.join(ics_file_name(activity_id));
        fs::write(&path, ics).map_err(|e| {
            warn!(path = %path.display(), error = %e, "calendar_export_failed");
            PlannerError::io(&path, e)
        })?;

        info!(path = %path.display(), activity_id, "calendar_exported");
        Ok(path)
    }
}
