//! Wire-level request and response types
//!
//! Field names follow the transport contract consumed by the surrounding
//! boundary layer: tags travel as `label_id` and anchors as base stations.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// One round of neighbor readings reported by a tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Reporting tag id
    pub id: String,
    /// Neighbor id -> RSSI (dBm)
    pub neighbors: HashMap<String, i32>,
}

/// One station entry in the anchor configuration payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub label_id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Operator-supplied anchor configuration, keyed by station slot name
/// (for example `base_station_1`). Ordered so reads are deterministic.
pub type AnchorConfig = BTreeMap<String, StationConfig>;

/// Position record for downstream visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub label_id: String,
    pub x: f64,
    pub y: f64,
    pub is_base_station: bool,
}

impl From<Position> for PositionRecord {
    fn from(position: Position) -> Self {
        Self {
            label_id: position.tag_id,
            x: position.x,
            y: position.y,
            is_base_station: position.is_anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_wire_shape() {
        let request: UpdateRequest = serde_json::from_str(
            r#"{"id": "tag-7", "neighbors": {"base-1": -63, "base-2": -71}}"#,
        )
        .expect("valid update payload");

        assert_eq!(request.id, "tag-7");
        assert_eq!(request.neighbors.get("base-1"), Some(&-63));
        assert_eq!(request.neighbors.len(), 2);
    }

    #[test]
    fn test_station_config_defaults_missing_coordinates() {
        let station: StationConfig =
            serde_json::from_str(r#"{"label_id": "base-1"}"#).expect("valid station payload");
        assert_eq!(station.x, 0.0);
        assert_eq!(station.y, 0.0);
    }

    #[test]
    fn test_position_record_wire_names() {
        let record = PositionRecord::from(Position::anchor("base-1", 10.0, 0.0));
        let json = serde_json::to_value(&record).expect("serializable");

        assert_eq!(json["label_id"], "base-1");
        assert_eq!(json["is_base_station"], true);
        assert_eq!(json["x"], 10.0);
    }
}
