use anyhow::{Context, Result};
use chrono::NaiveDate;
use moodplan_core::{ActivityManager, MoodLogEntry, MoodManager};
use std::fs;
use std::path::{Path, PathBuf};

pub fn moodplan_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MOODPLAN_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".moodplan"))
}

pub fn ensure_moodplan_home() -> Result<PathBuf> {
    let dir = moodplan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Load the activity file if it exists; a missing file is an empty planner.
pub fn load_activities(
    path: &Path,
    today: NaiveDate,
    export_dir: &Path,
) -> Result<ActivityManager> {
    let mut manager = ActivityManager::new().with_export_dir(export_dir);
    if path.exists() {
        manager
            .load_from_file_on(path, today)
            .with_context(|| format!("load activities from {}", path.display()))?;
    }
    Ok(manager)
}

pub fn save_activities(manager: &ActivityManager, path: &Path) -> Result<()> {
    manager
        .save_to_file(path)
        .with_context(|| format!("save activities to {}", path.display()))
}

pub fn load_moods(path: &Path) -> Result<MoodManager> {
    if !path.exists() {
        return Ok(MoodManager::new());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let entries: Vec<MoodLogEntry> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(MoodManager::from_entries(entries))
}

pub fn save_moods(manager: &MoodManager, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&manager.all_mood_logs())?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
