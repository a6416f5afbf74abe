//! Planar distance and cost helpers shared by the graph and the search

use geo::Point;

use crate::Cost;

/// Straight-line distance between two points in the plane
pub fn euclidean_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let delta = a - b;
    delta.x().hypot(delta.y())
}

/// Cost of travelling `distance` through a road with the given congestion.
///
/// Congestion is expected to be non-negative, so the result is never
/// below the straight-line distance.
pub fn effective_weight(distance: f64, congestion: f64) -> Cost {
    distance * (1.0 + congestion)
}
