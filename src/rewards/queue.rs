use super::types::RewardQueueItem;
use serde::{Deserialize, Serialize};

/// Append-only FIFO of rewards waiting for presentation.
///
/// The engine only pushes. Presentation takes everything at once with
/// [`drain`](RewardQueue::drain) or [`clear`](RewardQueue::clear); anything
/// not drained survives a save/load cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardQueue {
    items: Vec<RewardQueueItem>,
}

impl RewardQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: RewardQueueItem) {
        self.items.push(item);
    }

    pub fn snapshot(&self) -> &[RewardQueueItem] {
        &self.items
    }

    pub fn drain(&mut self) -> Vec<RewardQueueItem> {
        std::mem::take(&mut self.items)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
