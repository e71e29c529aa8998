//! Tag Positioning Engine
//!
//! Estimates the 2D position of wireless tags from RSSI readings against a
//! small set of fixed base stations, using a log-distance path-loss model
//! and closed-form three-anchor trilateration.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use crate::algorithms::path_loss::{estimate_distance, estimate_distance_default, Distance};
pub use crate::algorithms::pipeline::{estimate_position, Estimate, PipelineOutcome};
pub use crate::algorithms::trilateration::{solve, Degenerate};
pub use crate::api::{AnchorConfig, PositionRecord, StationConfig, UpdateRequest};
pub use crate::core::{AnchorPosition, Point, Position, SignalSample};
pub use crate::service::{IdentityDirectory, PositionError, PositionService, UpdateOutcome};
pub use crate::storage::{InMemoryPositionStore, PositionStore};
