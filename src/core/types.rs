//! Core data types for the tag positioning engine

/// 2D point in the coordinate frame defined by the anchor configuration (meters)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A single RSSI reading reported by a tag against one neighbor
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSample {
    pub anchor_id: String,
    /// Received signal strength in dBm (less negative means closer)
    pub rssi: i32,
}

/// Fixed reference point with operator-supplied coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl AnchorPosition {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Latest known position of a tag
///
/// One entry per tag id; a new successful estimate overwrites the previous
/// one, no history is kept. Anchors are positions whose coordinates came from
/// configuration rather than from the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub tag_id: String,
    pub x: f64,
    pub y: f64,
    pub is_anchor: bool,
    /// Estimated range to the strongest anchor used for this estimate
    /// (meters); `None` for anchors and configured positions.
    pub range_to_strongest: Option<f64>,
}

impl Position {
    /// Position computed for a mobile tag
    pub fn tag(tag_id: impl Into<String>, x: f64, y: f64, range_to_strongest: Option<f64>) -> Self {
        Self {
            tag_id: tag_id.into(),
            x,
            y,
            is_anchor: false,
            range_to_strongest,
        }
    }

    /// Configured anchor position
    pub fn anchor(tag_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            tag_id: tag_id.into(),
            x,
            y,
            is_anchor: true,
            range_to_strongest: None,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_position_constructors() {
        let anchor = Position::anchor("base-1", 10.0, 0.0);
        assert!(anchor.is_anchor);
        assert_eq!(anchor.range_to_strongest, None);

        let tag = Position::tag("tag-7", 3.0, 4.0, Some(5.0));
        assert!(!tag.is_anchor);
        assert_eq!(tag.point(), Point::new(3.0, 4.0));
    }
}
