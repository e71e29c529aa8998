//! Wire types shared with the transport boundary

pub mod types;

pub use types::{AnchorConfig, PositionRecord, StationConfig, UpdateRequest};
