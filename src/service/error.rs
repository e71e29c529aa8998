//! Service error taxonomy
//!
//! Only conditions the boundary layer must surface are errors. Insufficient
//! anchors and degenerate geometry are silent no-ops reported through
//! [`UpdateOutcome`](crate::service::UpdateOutcome) instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Referenced tag id does not exist in the identity directory
    #[error("unknown tag: {tag_id}")]
    NotFound { tag_id: String },

    /// Anchor configuration rejected at the boundary
    #[error("invalid anchor configuration for slot {slot}: {reason}")]
    InvalidConfig { slot: String, reason: String },
}
