use super::types::{EvolutionThreshold, ShadowCompanion, ShadowDescriptor};
use crate::core::constants::{SHADOW_EVOLUTION_BONUS_STEP, SHADOW_MAX_EVOLUTION};
use crate::core::error::{EngineError, EntityKind};
use crate::core::ids::fresh_id;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What happened to the equipped shadow after a victory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowProgress {
    pub shadow_id: String,
    pub name: String,
    pub xp_gained: u64,
    pub experience_points: u64,
    /// Evolution levels reached during this grant, in order.
    pub evolutions: Vec<u8>,
    pub bonus_magnitude: u32,
}

impl ShadowProgress {
    pub fn evolved(&self) -> bool {
        !self.evolutions.is_empty()
    }
}

pub fn has_shadow_named(shadows: &[ShadowCompanion], name: &str) -> bool {
    shadows.iter().any(|s| s.name == name)
}

pub fn equipped_shadow(shadows: &[ShadowCompanion]) -> Option<&ShadowCompanion> {
    shadows.iter().find(|s| s.is_equipped)
}

/// Extract a boss's shadow. Each named shadow can be owned once; a repeat
/// extraction returns `None` and leaves the roster alone.
pub fn extract_shadow<R: Rng>(
    shadows: &mut Vec<ShadowCompanion>,
    descriptor: &ShadowDescriptor,
    rng: &mut R,
) -> Option<ShadowCompanion> {
    if has_shadow_named(shadows, &descriptor.name) {
        return None;
    }
    let shadow = ShadowCompanion::from_descriptor(fresh_id(rng), descriptor);
    shadows.push(shadow.clone());
    Some(shadow)
}

/// Equip a shadow by id, unequipping whichever one was active.
pub fn equip_shadow(shadows: &mut [ShadowCompanion], shadow_id: &str) -> Result<(), EngineError> {
    if !shadows.iter().any(|s| s.id == shadow_id) {
        return Err(EngineError::not_found(EntityKind::Shadow, shadow_id));
    }
    for shadow in shadows.iter_mut() {
        shadow.is_equipped = shadow.id == shadow_id;
    }
    Ok(())
}

pub fn unequip_shadow(shadows: &mut [ShadowCompanion], shadow_id: &str) -> Result<(), EngineError> {
    let shadow = shadows
        .iter_mut()
        .find(|s| s.id == shadow_id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Shadow, shadow_id))?;
    shadow.is_equipped = false;
    Ok(())
}

/// Advance a single shadow through as many evolutions as its XP allows.
/// Returns the evolution levels reached.
pub fn evolve(shadow: &mut ShadowCompanion) -> Vec<u8> {
    let mut reached = Vec::new();
    while shadow.evolution_level < SHADOW_MAX_EVOLUTION
        && shadow.xp_to_next_evolution.is_reached(shadow.experience_points)
    {
        shadow.evolution_level += 1;
        shadow.bonus.magnitude = shadow
            .bonus
            .magnitude
            .saturating_add(shadow.evolution_level as u32 * SHADOW_EVOLUTION_BONUS_STEP);
        shadow.xp_to_next_evolution = EvolutionThreshold::for_level(shadow.evolution_level);
        reached.push(shadow.evolution_level);
    }
    reached
}

/// Give the equipped shadow its share of a dungeon's XP.
///
/// Returns `None` when no shadow is equipped.
pub fn grant_shadow_xp(
    shadows: &mut [ShadowCompanion],
    dungeon_xp: u64,
    share_percent: u64,
) -> Option<ShadowProgress> {
    let shadow = shadows.iter_mut().find(|s| s.is_equipped)?;
    let xp_gained = dungeon_xp.saturating_mul(share_percent) / 100;
    shadow.experience_points = shadow.experience_points.saturating_add(xp_gained);
    let evolutions = evolve(shadow);

    if !evolutions.is_empty() {
        tracing::info!(
            shadow = %shadow.name,
            evolution_level = shadow.evolution_level,
            bonus = shadow.bonus.magnitude,
            "shadow evolved"
        );
    }

    Some(ShadowProgress {
        shadow_id: shadow.id.clone(),
        name: shadow.display_name(),
        xp_gained,
        experience_points: shadow.experience_points,
        evolutions,
        bonus_magnitude: shadow.bonus.magnitude,
    })
}
