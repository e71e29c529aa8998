//! In-memory position store
//!
//! Single-process storage with no persistence across restarts; a durable
//! backing would implement [`PositionStore`](crate::storage::PositionStore)
//! against an embedded database instead.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::api::AnchorConfig;
use crate::core::Position;
use crate::storage::PositionStore;

/// Map-backed store guarded by a reader-writer lock
#[derive(Debug, Default)]
pub struct InMemoryPositionStore {
    positions: RwLock<BTreeMap<String, Position>>,
    anchor_config: RwLock<AnchorConfig>,
}

impl InMemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionStore for InMemoryPositionStore {
    fn save(&self, position: Position) {
        let mut positions = self
            .positions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        positions.insert(position.tag_id.clone(), position);
    }

    fn get(&self, tag_id: &str) -> Option<Position> {
        let positions = self
            .positions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        positions.get(tag_id).cloned()
    }

    fn get_all(&self) -> BTreeMap<String, Position> {
        let positions = self
            .positions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        positions.clone()
    }

    fn set_anchor_config(&self, config: AnchorConfig) {
        let mut stored = self
            .anchor_config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *stored = config;
    }

    fn get_anchor_config(&self) -> AnchorConfig {
        let config = self
            .anchor_config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        config.clone()
    }
}
