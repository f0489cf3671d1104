//! Player-facing activity log.
//!
//! Every mutating operation appends at least one entry. Entries are never
//! edited or removed by the engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    Dungeon,
    Defeat,
    Experience,
    Loot,
    Unlock,
    LevelUp,
    Shadow,
    Upgrade,
    Shop,
    Equipment,
    Buff,
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: i64,
    pub category: LogCategory,
    pub message: String,
    #[serde(default)]
    pub xp_delta: Option<u64>,
    #[serde(default)]
    pub level_delta: Option<u32>,
    /// Per-attribute increase granted by this event
    #[serde(default)]
    pub stat_delta: Option<u32>,
}

impl LogEntry {
    pub fn new(timestamp: i64, category: LogCategory, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            category,
            message: message.into(),
            xp_delta: None,
            level_delta: None,
            stat_delta: None,
        }
    }

    pub fn with_xp(mut self, xp: u64) -> Self {
        self.xp_delta = Some(xp);
        self
    }

    pub fn with_levels(mut self, levels: u32, stat_points: u32) -> Self {
        self.level_delta = Some(levels);
        self.stat_delta = Some(stat_points);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, category: LogCategory) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }
}
