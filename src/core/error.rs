//! Error types surfaced at the engine boundary.
//!
//! Rejections never leave partial state behind: every operation validates
//! before it mutates, and the transition layer discards the working copy on
//! any rejection.

use std::fmt;

/// The kind of entity a lookup was performed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Dungeon,
    Item,
    Shadow,
    ShopEntry,
    Title,
    Frame,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Dungeon => "dungeon",
            EntityKind::Item => "item",
            EntityKind::Shadow => "shadow",
            EntityKind::ShopEntry => "shop entry",
            EntityKind::Title => "title",
            EntityKind::Frame => "frame",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("insufficient shards: need {needed}, have {available}")]
    InsufficientResource { needed: u64, available: u64 },

    #[error("item '{item_id}' is already at max level {max_level}")]
    MaxLevel { item_id: String, max_level: u8 },

    #[error("{kind} '{id}' has not been unlocked")]
    Locked { kind: EntityKind, id: String },
}

impl EngineError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }

    pub fn is_insufficient_resource(&self) -> bool {
        matches!(self, EngineError::InsufficientResource { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid balance config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid balance config: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::not_found(EntityKind::Dungeon, "dungeon_x");
        assert_eq!(err.to_string(), "dungeon 'dungeon_x' not found");
        assert!(err.is_not_found());
        assert!(!err.is_insufficient_resource());
    }

    #[test]
    fn test_insufficient_resource_message() {
        let err = EngineError::InsufficientResource {
            needed: 500,
            available: 120,
        };
        assert_eq!(err.to_string(), "insufficient shards: need 500, have 120");
        assert!(err.is_insufficient_resource());
    }
}
