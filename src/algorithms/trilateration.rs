//! Closed-form trilateration from three reference points

use nalgebra::{Matrix2, Vector2};

use crate::core::{Point, DEGENERACY_EPSILON};

/// Anchor geometry admits no unique solution (near-collinear or coincident
/// reference points). An expected outcome the caller handles by skipping the
/// update, not an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degenerate;

/// Solve for the unknown 2D position given three reference points and the
/// measured distance to each.
///
/// The three circle equations are linearized by subtracting the third from
/// the first two, leaving a 2x2 linear system in (x, y):
///
/// ```text
/// 2*(x2 - x1)*x + 2*(y2 - y1)*y = d1^2 - d2^2 - x1^2 + x2^2 - y1^2 + y2^2
/// 2*(x3 - x2)*x + 2*(y3 - y2)*y = d2^2 - d3^2 - x2^2 + x3^2 - y2^2 + y3^2
/// ```
///
/// Exactly three anchors, no iterative refinement, no least-squares fallback.
/// Distances must be non-negative; unknown-range samples are filtered out
/// before this point.
pub fn solve(
    p1: Point,
    d1: f64,
    p2: Point,
    d2: f64,
    p3: Point,
    d3: f64,
) -> Result<Point, Degenerate> {
    let a = 2.0 * (p2.x - p1.x);
    let b = 2.0 * (p2.y - p1.y);
    let c = d1 * d1 - d2 * d2 - p1.x * p1.x + p2.x * p2.x - p1.y * p1.y + p2.y * p2.y;

    let d = 2.0 * (p3.x - p2.x);
    let e = 2.0 * (p3.y - p2.y);
    let f = d2 * d2 - d3 * d3 - p2.x * p2.x + p3.x * p3.x - p2.y * p2.y + p3.y * p3.y;

    let coefficients = Matrix2::new(a, b, d, e);
    let rhs = Vector2::new(c, f);

    let det = coefficients.determinant();
    if det.abs() < DEGENERACY_EPSILON {
        return Err(Degenerate);
    }

    // Cramer's rule on the 2x2 system
    let x = (rhs.x * e - b * rhs.y) / det;
    let y = (a * rhs.y - rhs.x * d) / det;

    Ok(Point::new(x, y))
}
