//! Positioning algorithms: path-loss ranging, trilateration and the
//! anchor selection pipeline

pub mod path_loss;
pub mod pipeline;
pub mod trilateration;

pub use path_loss::{estimate_distance, estimate_distance_default, Distance};
pub use pipeline::{estimate_position, Estimate, PipelineOutcome};
pub use trilateration::{solve, Degenerate};
