//! Position service: wires the pipeline and the store together
//!
//! Sole writer to the position store. Looks up anchors, runs the estimation
//! pipeline on each update and persists the result; also owns anchor
//! configuration and the optional anchor bootstrap.

use std::collections::HashMap;
use std::sync::Mutex;

use log::{debug, info, warn};

use crate::algorithms::pipeline::{self, PipelineOutcome};
use crate::api::{AnchorConfig, PositionRecord, UpdateRequest};
use crate::core::{AnchorPosition, Position, BOOTSTRAP_ANCHOR_COORDS, REQUIRED_ANCHORS};
use crate::service::PositionError;
use crate::storage::PositionStore;

/// Identity lookup collaborator; label CRUD and access checks live outside
/// this crate.
pub trait IdentityDirectory: Send + Sync {
    fn contains(&self, tag_id: &str) -> bool;
}

impl IdentityDirectory for std::collections::HashSet<String> {
    fn contains(&self, tag_id: &str) -> bool {
        std::collections::HashSet::contains(self, tag_id)
    }
}

/// Tracks how many bootstrap anchor slots have been handed out. Explicit
/// state owned by the service, mutated under its own lock; there is no reset.
#[derive(Debug, Default)]
pub struct AnchorBootstrapState {
    assigned: usize,
}

impl AnchorBootstrapState {
    /// Next bootstrap coordinates, or `None` once all slots are taken
    fn next_slot(&mut self) -> Option<(f64, f64)> {
        let coords = BOOTSTRAP_ANCHOR_COORDS.get(self.assigned).copied();
        if coords.is_some() {
            self.assigned += 1;
        }
        coords
    }
}

/// Outcome of an update request. Only `Updated` changes the store; the rest
/// leave the previous position untouched and map to an OK response at the
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(Position),
    /// Fewer than three anchors configured; infrastructure, not a request fault
    InsufficientAnchors { available: usize, required: usize },
    /// Fewer than three readings matched a configured anchor
    InsufficientSignals,
    /// Selected anchors were near-collinear or coincident
    DegenerateGeometry,
}

pub struct PositionService<S, D> {
    store: S,
    directory: D,
    auto_anchor_bootstrap: bool,
    bootstrap: Mutex<AnchorBootstrapState>,
}

impl<S: PositionStore, D: IdentityDirectory> PositionService<S, D> {
    pub fn new(store: S, directory: D) -> Self {
        Self {
            store,
            directory,
            auto_anchor_bootstrap: false,
            bootstrap: Mutex::new(AnchorBootstrapState::default()),
        }
    }

    /// Legacy convenience: the first three registered tags automatically
    /// become anchors at fixed coordinates. Off unless explicitly enabled;
    /// explicit configuration via [`configure_anchors`](Self::configure_anchors)
    /// is the supported path.
    pub fn with_anchor_bootstrap(mut self) -> Self {
        self.auto_anchor_bootstrap = true;
        self
    }

    /// Notify the service that a new tag identity was created. With anchor
    /// bootstrap enabled the first three calls assign the fixed anchor slots.
    pub fn register_tag(&self, tag_id: &str) {
        if !self.auto_anchor_bootstrap {
            return;
        }

        let slot = {
            let mut state = self
                .bootstrap
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state.next_slot()
        };

        if let Some((x, y)) = slot {
            info!("bootstrap anchor {} at ({}, {})", tag_id, x, y);
            self.store.save(Position::anchor(tag_id, x, y));
        }
    }

    /// Apply an operator-supplied anchor configuration: validate it, write
    /// one anchor position per station and keep the raw config for later
    /// retrieval. Replaces coordinates for future estimates only; stored tag
    /// positions are never recomputed.
    pub fn configure_anchors(&self, config: AnchorConfig) -> Result<(), PositionError> {
        for (slot, station) in &config {
            if station.label_id.is_empty() {
                return Err(PositionError::InvalidConfig {
                    slot: slot.clone(),
                    reason: "empty label_id".to_string(),
                });
            }
            if !station.x.is_finite() || !station.y.is_finite() {
                return Err(PositionError::InvalidConfig {
                    slot: slot.clone(),
                    reason: "coordinates must be finite".to_string(),
                });
            }
        }

        for station in config.values() {
            self.store
                .save(Position::anchor(&station.label_id, station.x, station.y));
        }
        info!("anchor configuration applied ({} stations)", config.len());
        self.store.set_anchor_config(config);
        Ok(())
    }

    /// Process one round of neighbor readings for `tag_id` and store the
    /// resulting position if the pipeline produces one.
    pub fn update(
        &self,
        tag_id: &str,
        neighbors: &HashMap<String, i32>,
    ) -> Result<UpdateOutcome, PositionError> {
        if !self.directory.contains(tag_id) {
            return Err(PositionError::NotFound {
                tag_id: tag_id.to_string(),
            });
        }

        let anchors: HashMap<String, AnchorPosition> = self
            .store
            .get_all()
            .into_iter()
            .filter(|(_, position)| position.is_anchor)
            .map(|(id, position)| {
                let anchor = AnchorPosition::new(&id, position.x, position.y);
                (id, anchor)
            })
            .collect();

        if anchors.len() < REQUIRED_ANCHORS {
            debug!(
                "skipping update for {}: {} of {} anchors configured",
                tag_id,
                anchors.len(),
                REQUIRED_ANCHORS
            );
            return Ok(UpdateOutcome::InsufficientAnchors {
                available: anchors.len(),
                required: REQUIRED_ANCHORS,
            });
        }

        match pipeline::run(neighbors, &anchors) {
            PipelineOutcome::Estimate(estimate) => {
                let position = Position::tag(
                    tag_id,
                    estimate.x,
                    estimate.y,
                    Some(estimate.range_to_strongest),
                );
                self.store.save(position.clone());
                debug!("{} located at ({:.2}, {:.2})", tag_id, position.x, position.y);
                Ok(UpdateOutcome::Updated(position))
            }
            PipelineOutcome::TooFewSignals { qualifying } => {
                debug!(
                    "skipping update for {}: only {} usable readings",
                    tag_id, qualifying
                );
                Ok(UpdateOutcome::InsufficientSignals)
            }
            PipelineOutcome::DegenerateGeometry => {
                warn!("skipping update for {}: degenerate anchor geometry", tag_id);
                Ok(UpdateOutcome::DegenerateGeometry)
            }
        }
    }

    /// [`update`](Self::update) fed directly from the wire-level request
    pub fn apply_update(&self, request: &UpdateRequest) -> Result<UpdateOutcome, PositionError> {
        self.update(&request.id, &request.neighbors)
    }

    /// Latest stored position for one tag
    pub fn position(&self, tag_id: &str) -> Option<Position> {
        self.store.get(tag_id)
    }

    /// Every stored position as wire records, ordered by tag id
    pub fn positions(&self) -> Vec<PositionRecord> {
        self.store
            .get_all()
            .into_values()
            .map(PositionRecord::from)
            .collect()
    }

    /// Raw anchor configuration as last applied
    pub fn anchor_config(&self) -> AnchorConfig {
        self.store.get_anchor_config()
    }
}
