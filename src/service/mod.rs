//! Position service orchestration

pub mod error;
pub mod orchestrator;

pub use error::PositionError;
pub use orchestrator::{
    AnchorBootstrapState, IdentityDirectory, PositionService, UpdateOutcome,
};
