use super::attributes::StatType;
use serde::{Deserialize, Serialize};

/// A temporary flat bonus to one attribute (potions, streak rewards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBuff {
    pub name: String,
    pub stat: StatType,
    pub magnitude: u32,
    /// Unix seconds; `None` lasts until removed by the host
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl StatBuff {
    pub fn is_active(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expiry) => now < expiry,
            None => true,
        }
    }
}

pub fn active_buffs(buffs: &[StatBuff], now: i64) -> Vec<StatBuff> {
    buffs.iter().filter(|b| b.is_active(now)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buff(expires_at: Option<i64>) -> StatBuff {
        StatBuff {
            name: "Focus Tonic".to_string(),
            stat: StatType::Intelligence,
            magnitude: 5,
            expires_at,
        }
    }

    #[test]
    fn test_expiry_is_exclusive() {
        let b = buff(Some(100));
        assert!(b.is_active(99));
        assert!(!b.is_active(100));
    }

    #[test]
    fn test_no_expiry_is_always_active() {
        assert!(buff(None).is_active(i64::MAX));
    }

    #[test]
    fn test_active_buffs_filters_expired() {
        let buffs = vec![buff(Some(10)), buff(None), buff(Some(50))];
        assert_eq!(active_buffs(&buffs, 20).len(), 2);
        assert_eq!(active_buffs(&buffs, 60).len(), 1);
    }
}
