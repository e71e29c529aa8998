//! Position storage
//!
//! The store is a capability trait so the in-memory backing can be swapped
//! for a durable one without touching the service or the pipeline.

pub mod memory;

pub use memory::InMemoryPositionStore;

use std::collections::BTreeMap;

use crate::api::AnchorConfig;
use crate::core::Position;

/// Storage for the latest position per tag plus the raw anchor configuration
///
/// Implementations must make `save` atomic with respect to concurrent
/// `save`/`get`/`get_all` calls and `get_all` a consistent snapshot.
pub trait PositionStore: Send + Sync {
    /// Insert or replace the position stored for `position.tag_id`
    fn save(&self, position: Position);

    fn get(&self, tag_id: &str) -> Option<Position>;

    /// Snapshot copy of every stored position, ordered by tag id
    fn get_all(&self) -> BTreeMap<String, Position>;

    fn set_anchor_config(&self, config: AnchorConfig);

    /// Copy of the raw configuration as last supplied by the operator
    fn get_anchor_config(&self) -> AnchorConfig;
}
