use super::attributes::Attributes;
use super::progression::xp_for_next_level;
use crate::core::error::{EngineError, EntityKind};
use serde::{Deserialize, Serialize};

/// Level, XP and cosmetics of the player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub level: u32,
    pub xp_current: u64,
    pub xp_for_next_level: u64,
    pub attributes: Attributes,
    #[serde(default)]
    pub unlocked_titles: Vec<String>,
    #[serde(default)]
    pub equipped_title: Option<String>,
    #[serde(default)]
    pub unlocked_frames: Vec<String>,
    #[serde(default)]
    pub equipped_frame: Option<String>,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStats {
    pub fn new() -> Self {
        Self {
            level: 1,
            xp_current: 0,
            xp_for_next_level: xp_for_next_level(1),
            attributes: Attributes::new(),
            unlocked_titles: Vec::new(),
            equipped_title: None,
            unlocked_frames: Vec::new(),
            equipped_frame: None,
        }
    }

    pub fn has_title(&self, title_id: &str) -> bool {
        self.unlocked_titles.iter().any(|t| t == title_id)
    }

    pub fn has_frame(&self, frame_id: &str) -> bool {
        self.unlocked_frames.iter().any(|f| f == frame_id)
    }

    /// Unlock a title. Returns true if newly unlocked.
    pub fn unlock_title(&mut self, title_id: &str) -> bool {
        if self.has_title(title_id) {
            return false;
        }
        self.unlocked_titles.push(title_id.to_string());
        true
    }

    /// Unlock a frame. Returns true if newly unlocked.
    pub fn unlock_frame(&mut self, frame_id: &str) -> bool {
        if self.has_frame(frame_id) {
            return false;
        }
        self.unlocked_frames.push(frame_id.to_string());
        true
    }

    pub fn equip_title(&mut self, title_id: &str) -> Result<(), EngineError> {
        if !self.has_title(title_id) {
            return Err(EngineError::Locked {
                kind: EntityKind::Title,
                id: title_id.to_string(),
            });
        }
        self.equipped_title = Some(title_id.to_string());
        Ok(())
    }

    pub fn equip_frame(&mut self, frame_id: &str) -> Result<(), EngineError> {
        if !self.has_frame(frame_id) {
            return Err(EngineError::Locked {
                kind: EntityKind::Frame,
                id: frame_id.to_string(),
            });
        }
        self.equipped_frame = Some(frame_id.to_string());
        Ok(())
    }
}
