//! Versioned persisted-state format.
//!
//! Storage is the host's business; this module only turns a [`GameState`]
//! into JSON and back. Older records are normalized here, once, while
//! loading, so the rest of the crate only ever sees the current schema.

use crate::core::constants::SAVE_VERSION;
use crate::core::error::SaveError;
use crate::core::game_state::GameState;
use crate::core::rank::Rank;
use crate::items::types::StatBonus;
use crate::shadows::types::{EvolutionThreshold, ShadowCompanion};
use serde::Deserialize;

/// Shadow as found on disk. Saves from version 1 predate evolution and
/// carry none of the evolution fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ShadowRecord {
    id: String,
    name: String,
    rank: Rank,
    bonus: StatBonus,
    #[serde(default)]
    evolution_level: Option<u8>,
    #[serde(default)]
    experience_points: Option<u64>,
    #[serde(default)]
    xp_to_next_evolution: Option<EvolutionThreshold>,
    #[serde(default)]
    is_equipped: bool,
}

impl From<ShadowRecord> for ShadowCompanion {
    fn from(record: ShadowRecord) -> Self {
        let evolution_level = record.evolution_level.unwrap_or(0);
        ShadowCompanion {
            id: record.id,
            name: record.name,
            rank: record.rank,
            bonus: record.bonus,
            evolution_level,
            experience_points: record.experience_points.unwrap_or(0),
            xp_to_next_evolution: record
                .xp_to_next_evolution
                .unwrap_or_else(|| EvolutionThreshold::for_level(evolution_level)),
            is_equipped: record.is_equipped,
        }
    }
}

#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: u32,
}

pub fn save_state(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Loads a state saved by this or any earlier version.
pub fn load_state(json: &str) -> Result<GameState, SaveError> {
    let probe: VersionProbe = serde_json::from_str(json)?;
    if probe.version > SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: probe.version,
            supported: SAVE_VERSION,
        });
    }

    let mut state: GameState = serde_json::from_str(json)?;
    if state.version < SAVE_VERSION {
        tracing::info!(from = state.version, to = SAVE_VERSION, "migrated save data");
        state.version = SAVE_VERSION;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1_SHADOW: &str = r#"{
        "id": "sh-1",
        "name": "Vhalor",
        "rank": "B",
        "bonus": { "stat": "Strength", "magnitude": 12 },
        "is_equipped": true
    }"#;

    #[test]
    fn test_v1_shadow_gets_evolution_defaults() {
        let shadow: ShadowCompanion = serde_json::from_str(V1_SHADOW).unwrap();
        assert_eq!(shadow.evolution_level, 0);
        assert_eq!(shadow.experience_points, 0);
        assert_eq!(shadow.xp_to_next_evolution, EvolutionThreshold::Points(500));
        assert!(shadow.is_equipped);
    }

    #[test]
    fn test_missing_threshold_follows_evolution_level() {
        let json = r#"{
            "id": "sh-2",
            "name": "Sable",
            "rank": "A",
            "bonus": { "stat": "Agility", "magnitude": 20 },
            "evolution_level": 2,
            "experience_points": 4000,
            "xp_to_next_evolution": null
        }"#;
        let shadow: ShadowCompanion = serde_json::from_str(json).unwrap();
        assert_eq!(shadow.xp_to_next_evolution, EvolutionThreshold::Unbounded);
        assert_eq!(shadow.experience_points, 4000);
    }

    #[test]
    fn test_round_trip() {
        let mut state = GameState::new();
        state.wallet.shards = 75;
        state.character.unlock_title("gate_breaker");
        let json = save_state(&state).unwrap();
        assert_eq!(load_state(&json).unwrap(), state);
    }

    #[test]
    fn test_unversioned_save_is_upgraded() {
        let json = r#"{
            "character": {
                "level": 3,
                "xp_current": 10,
                "xp_for_next_level": 519,
                "attributes": { "values": [12, 12, 12, 12, 12, 12] }
            }
        }"#;
        let state = load_state(json).unwrap();
        assert_eq!(state.version, SAVE_VERSION);
        assert_eq!(state.character.level, 3);
        assert!(state.character.unlocked_titles.is_empty());
        assert!(state.reward_queue.is_empty());
    }

    #[test]
    fn test_future_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, SAVE_VERSION + 1);
        assert!(matches!(
            load_state(&json),
            Err(SaveError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(load_state("{ nope"), Err(SaveError::Json(_))));
    }
}
