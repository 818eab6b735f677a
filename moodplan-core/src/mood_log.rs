//! Mood timeline: immutable entries owned by a MoodManager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, Result};
use crate::mood::MoodType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    id: u32,
    mood: MoodType,
    timestamp: DateTime<Utc>,
}

impl MoodLogEntry {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn mood(&self) -> MoodType {
        self.mood
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for MoodLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MoodLog{{id={}, moodType={}, timestamp={}}}",
            self.id,
            self.mood,
            self.timestamp.to_rfc3339()
        )
    }
}

#[derive(Debug, Clone)]
pub struct MoodManager {
    entries: Vec<MoodLogEntry>,
    next_id: u32,
}

impl Default for MoodManager {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl MoodManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a previously persisted history; numbering continues after the highest id.
    ///
    /// Entries with id `u32::MAX` are dropped: no id could follow them.
    pub fn from_entries(mut entries: Vec<MoodLogEntry>) -> Self {
        entries.retain(|e| e.id != u32::MAX);
        entries.sort_by_key(|e| e.id);
        entries.dedup_by_key(|e| e.id);
        let next_id = entries.last().map(|e| e.id + 1).unwrap_or(1);
        Self { entries, next_id }
    }

    pub fn log_mood(&mut self, mood: MoodType) -> Result<MoodLogEntry> {
        self.log_mood_at(mood, Utc::now())
    }

    /// Fails with `IdsExhausted` once the counter cannot advance; the history is unchanged then.
    pub fn log_mood_at(
        &mut self,
        mood: MoodType,
        timestamp: DateTime<Utc>,
    ) -> Result<MoodLogEntry> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(PlannerError::IdsExhausted(id))?;
        let entry = MoodLogEntry {
            id,
            mood,
            timestamp,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Snapshot, oldest first.
    pub fn all_mood_logs(&self) -> Vec<MoodLogEntry> {
        self.entries.clone()
    }

    pub fn latest(&self) -> Option<&MoodLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn entries_are_numbered_in_creation_order() {
        let mut m = MoodManager::new();
        let a = m.log_mood(MoodType::Tired).unwrap();
        let b = m.log_mood(MoodType::Energetic).unwrap();
        assert_eq!((a.id(), b.id()), (1, 2));
        assert!(a.timestamp() <= b.timestamp());

        let all = m.all_mood_logs();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].mood(), MoodType::Tired);
        assert_eq!(m.latest().unwrap().mood(), MoodType::Energetic);
    }

    #[test]
    fn invalid_input_leaves_history_unchanged() {
        let mut m = MoodManager::new();
        m.log_mood(MoodType::Neutral).unwrap();

        let parsed = "".parse::<MoodType>();
        assert!(parsed.unwrap_err().is_validation());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut m = MoodManager::new();
        m.log_mood(MoodType::Neutral).unwrap();
        let mut snap = m.all_mood_logs();
        snap.clear();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn restored_history_continues_numbering() {
        let t0 = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let mut src = MoodManager::new();
        src.log_mood_at(MoodType::Tired, t0).unwrap();
        let later = t0 + Duration::hours(3);
        src.log_mood_at(MoodType::Neutral, later).unwrap();

        let json = serde_json::to_string(&src.all_mood_logs()).unwrap();
        let entries: Vec<MoodLogEntry> = serde_json::from_str(&json).unwrap();

        let mut restored = MoodManager::from_entries(entries);
        let next = restored.log_mood(MoodType::Energetic).unwrap();
        assert_eq!(next.id(), 3);
        assert_eq!(restored.all_mood_logs()[1].timestamp(), later);
    }

    #[test]
    fn restored_history_at_id_limit_never_reuses_ids() {
        let t0 = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let entry = |id, mood| MoodLogEntry {
            id,
            mood,
            timestamp: t0,
        };

        let mut m = MoodManager::from_entries(vec![
            entry(u32::MAX - 1, MoodType::Tired),
            entry(u32::MAX, MoodType::Neutral),
        ]);
        assert_eq!(m.len(), 1);

        let err = m.log_mood_at(MoodType::Energetic, t0).unwrap_err();
        assert!(matches!(err, PlannerError::IdsExhausted(id) if id == u32::MAX));
        assert_eq!(m.len(), 1);
        assert_eq!(m.latest().unwrap().id(), u32::MAX - 1);
    }

    #[test]
    fn display_matches_log_format() {
        let t0 = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let mut m = MoodManager::new();
        let e = m.log_mood_at(MoodType::Tired, t0).unwrap();
        assert_eq!(
            e.to_string(),
            "MoodLog{id=1, moodType=TIRED, timestamp=2026-02-19T12:00:00+00:00}"
        );
    }
}
