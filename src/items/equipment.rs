//! Inventory operations: lookup and the one-item-per-slot equip rule.

use super::types::{EquipmentItem, EquipmentSlot};
use crate::core::error::{EngineError, EntityKind};

pub fn find_item<'a>(items: &'a [EquipmentItem], item_id: &str) -> Option<&'a EquipmentItem> {
    items.iter().find(|i| i.id == item_id)
}

pub fn find_item_mut<'a>(
    items: &'a mut [EquipmentItem],
    item_id: &str,
) -> Option<&'a mut EquipmentItem> {
    items.iter_mut().find(|i| i.id == item_id)
}

pub fn iter_equipped(items: &[EquipmentItem]) -> impl Iterator<Item = &EquipmentItem> {
    items.iter().filter(|i| i.is_equipped)
}

pub fn equipped_in_slot(items: &[EquipmentItem], slot: EquipmentSlot) -> Option<&EquipmentItem> {
    iter_equipped(items).find(|i| i.slot == slot)
}

/// Upgrade levels of the equipped items, for the power calculation.
pub fn equipment_levels(items: &[EquipmentItem]) -> Vec<u8> {
    iter_equipped(items).map(|i| i.level).collect()
}

/// Equip `item_id`, unequipping whatever else occupies its slot.
pub fn equip_item(items: &mut [EquipmentItem], item_id: &str) -> Result<EquipmentSlot, EngineError> {
    let slot = find_item(items, item_id)
        .map(|i| i.slot)
        .ok_or_else(|| EngineError::not_found(EntityKind::Item, item_id))?;

    for item in items.iter_mut().filter(|i| i.slot == slot) {
        item.is_equipped = item.id == item_id;
    }
    Ok(slot)
}

pub fn unequip_item(items: &mut [EquipmentItem], item_id: &str) -> Result<(), EngineError> {
    let item = find_item_mut(items, item_id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Item, item_id))?;
    item.is_equipped = false;
    Ok(())
}

/// Equip the highest-scoring item of every slot.
pub fn auto_equip_best(items: &mut [EquipmentItem]) -> usize {
    let mut changed = 0;
    for slot in EquipmentSlot::ALL {
        let best = items
            .iter()
            .filter(|i| i.slot == slot)
            .max_by_key(|i| (i.score(), i.is_equipped))
            .map(|i| (i.id.clone(), i.is_equipped));
        if let Some((id, already_equipped)) = best {
            if !already_equipped && equip_item(items, &id).is_ok() {
                changed += 1;
            }
        }
    }
    changed
}
