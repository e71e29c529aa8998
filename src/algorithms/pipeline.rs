//! Anchor selection and position estimation pipeline
//!
//! Turns one round of neighbor RSSI readings into a position estimate:
//! filter to configured anchors, range each sample through the path-loss
//! model, rank by signal strength and hand the three strongest to the
//! trilateration solver.

use std::collections::HashMap;

use log::debug;

use crate::algorithms::path_loss::{estimate_distance_default, Distance};
use crate::algorithms::trilateration::{self, Degenerate};
use crate::core::{AnchorPosition, Point, SignalSample, REQUIRED_ANCHORS};

/// Successful pipeline output
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub x: f64,
    pub y: f64,
    /// Estimated range to the strongest anchor used (meters)
    pub range_to_strongest: f64,
}

/// Why a pipeline run produced no estimate, kept distinct so the caller can
/// log and report the two silent no-op cases separately
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Estimate(Estimate),
    /// Fewer than three readings matched a configured anchor with a usable range
    TooFewSignals { qualifying: usize },
    /// The three selected anchors were near-collinear or coincident
    DegenerateGeometry,
}

struct Candidate {
    sample: SignalSample,
    point: Point,
    meters: f64,
}

/// Run the full selection pipeline over one set of neighbor readings.
///
/// Pure with respect to external state: reads the two mappings, writes
/// nothing. Readings whose id is not a configured anchor are ignored, as are
/// readings whose RSSI carries no range (RSSI 0). Ranking is by RSSI
/// descending with anchor id as the tie-break, so the same input always
/// selects the same three anchors.
pub fn run(
    signals: &HashMap<String, i32>,
    anchors: &HashMap<String, AnchorPosition>,
) -> PipelineOutcome {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(signals.len());
    for (anchor_id, &rssi) in signals {
        let Some(anchor) = anchors.get(anchor_id) else {
            continue;
        };
        match estimate_distance_default(rssi) {
            Distance::Known(meters) => candidates.push(Candidate {
                sample: SignalSample {
                    anchor_id: anchor_id.clone(),
                    rssi,
                },
                point: anchor.point(),
                meters,
            }),
            Distance::Unknown => {
                debug!("dropping reading against {}: RSSI carries no range", anchor_id);
            }
        }
    }

    if candidates.len() < REQUIRED_ANCHORS {
        return PipelineOutcome::TooFewSignals {
            qualifying: candidates.len(),
        };
    }

    // Strongest first; ties broken by anchor id for determinism
    candidates.sort_by(|a, b| {
        b.sample
            .rssi
            .cmp(&a.sample.rssi)
            .then_with(|| a.sample.anchor_id.cmp(&b.sample.anchor_id))
    });

    let (first, second, third) = (&candidates[0], &candidates[1], &candidates[2]);
    match trilateration::solve(
        first.point,
        first.meters,
        second.point,
        second.meters,
        third.point,
        third.meters,
    ) {
        Ok(point) => PipelineOutcome::Estimate(Estimate {
            x: point.x,
            y: point.y,
            range_to_strongest: first.meters,
        }),
        Err(Degenerate) => {
            debug!(
                "degenerate anchor geometry ({}, {}, {})",
                first.sample.anchor_id, second.sample.anchor_id, third.sample.anchor_id
            );
            PipelineOutcome::DegenerateGeometry
        }
    }
}

/// [`run`] collapsed to the estimate-or-nothing contract
pub fn estimate_position(
    signals: &HashMap<String, i32>,
    anchors: &HashMap<String, AnchorPosition>,
) -> Option<Estimate> {
    match run(signals, anchors) {
        PipelineOutcome::Estimate(estimate) => Some(estimate),
        PipelineOutcome::TooFewSignals { .. } | PipelineOutcome::DegenerateGeometry => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_PATH_LOSS_EXPONENT, DEFAULT_REFERENCE_POWER};

    /// Invert the path-loss model so tests can feed RSSI readings that back
    /// out to a known distance (up to integer rounding).
    fn rssi_for_distance(meters: f64) -> i32 {
        (DEFAULT_REFERENCE_POWER - 10.0 * DEFAULT_PATH_LOSS_EXPONENT * meters.log10()).round()
            as i32
    }

    fn square_anchors() -> HashMap<String, AnchorPosition> {
        [
            ("a".to_string(), AnchorPosition::new("a", 0.0, 0.0)),
            ("b".to_string(), AnchorPosition::new("b", 10.0, 0.0)),
            ("c".to_string(), AnchorPosition::new("c", 0.0, 10.0)),
        ]
        .into_iter()
        .collect()
    }

    fn signals_from_truth(truth: Point, anchors: &HashMap<String, AnchorPosition>) -> HashMap<String, i32> {
        anchors
            .values()
            .map(|a| (a.id.clone(), rssi_for_distance(truth.distance_to(&a.point()))))
            .collect()
    }

    #[test]
    fn test_too_few_matching_signals() {
        let anchors = square_anchors();
        let signals: HashMap<String, i32> =
            [("a".to_string(), -60), ("b".to_string(), -65)].into_iter().collect();

        assert_eq!(
            run(&signals, &anchors),
            PipelineOutcome::TooFewSignals { qualifying: 2 }
        );
        assert_eq!(estimate_position(&signals, &anchors), None);
    }

    #[test]
    fn test_unconfigured_neighbors_are_ignored() {
        let anchors = square_anchors();
        // Two configured anchors plus a neighbor the operator never set up
        let signals: HashMap<String, i32> = [
            ("a".to_string(), -60),
            ("b".to_string(), -65),
            ("ghost".to_string(), -40),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            run(&signals, &anchors),
            PipelineOutcome::TooFewSignals { qualifying: 2 }
        );
    }

    #[test]
    fn test_unknown_range_readings_are_dropped_before_ranking() {
        let anchors = square_anchors();
        // RSSI 0 against "c" carries no range, leaving only two usable readings
        let signals: HashMap<String, i32> = [
            ("a".to_string(), -60),
            ("b".to_string(), -65),
            ("c".to_string(), 0),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            run(&signals, &anchors),
            PipelineOutcome::TooFewSignals { qualifying: 2 }
        );
    }

    #[test]
    fn test_recovers_known_position() {
        let anchors = square_anchors();
        let truth = Point::new(3.0, 4.0);
        let signals = signals_from_truth(truth, &anchors);

        let estimate = estimate_position(&signals, &anchors).expect("three good anchors");
        // Integer RSSI quantization costs some accuracy, but the estimate
        // must land near the true point
        assert!((estimate.x - truth.x).abs() < 0.5);
        assert!((estimate.y - truth.y).abs() < 0.5);
        assert!(estimate.range_to_strongest > 0.0);
    }

    #[test]
    fn test_strongest_three_are_selected() {
        let mut anchors = square_anchors();
        // A fourth, much more distant anchor must lose the ranking
        anchors.insert("far".to_string(), AnchorPosition::new("far", 80.0, 80.0));

        let truth = Point::new(3.0, 4.0);
        let signals = signals_from_truth(truth, &anchors);

        let estimate = estimate_position(&signals, &anchors).expect("three good anchors");
        assert!((estimate.x - truth.x).abs() < 0.5);
        assert!((estimate.y - truth.y).abs() < 0.5);
    }

    #[test]
    fn test_collinear_anchors_yield_no_estimate() {
        let anchors: HashMap<String, AnchorPosition> = [
            ("a".to_string(), AnchorPosition::new("a", 0.0, 0.0)),
            ("b".to_string(), AnchorPosition::new("b", 5.0, 0.0)),
            ("c".to_string(), AnchorPosition::new("c", 10.0, 0.0)),
        ]
        .into_iter()
        .collect();
        let signals: HashMap<String, i32> = [
            ("a".to_string(), -60),
            ("b".to_string(), -65),
            ("c".to_string(), -70),
        ]
        .into_iter()
        .collect();

        assert_eq!(run(&signals, &anchors), PipelineOutcome::DegenerateGeometry);
        assert_eq!(estimate_position(&signals, &anchors), None);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let anchors = square_anchors();
        let signals = signals_from_truth(Point::new(6.0, 2.0), &anchors);

        let first = run(&signals, &anchors);
        let second = run(&signals, &anchors);
        assert_eq!(first, second);
    }
}
