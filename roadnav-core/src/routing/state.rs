use std::cmp::Ordering;

use thiserror::Error;

use crate::Cost;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Node {0} does not exist")]
    UnknownNode(String),
    #[error("No path exists from {start} to {end}")]
    NoPath { start: String, end: String },
}

/// Frontier entry shared by the A* and Dijkstra searches.
///
/// Entries pop in ascending `(priority, cost, node)` order. For A* the
/// priority is the f-score and the cost is the g-score; Dijkstra uses the
/// cost for both. The node id makes the order total, so equal-cost
/// alternatives are always resolved the same way.
#[derive(Copy, Clone, Debug)]
pub(super) struct State<'a> {
    pub(super) priority: Cost,
    pub(super) cost: Cost,
    pub(super) node: &'a str,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap (reversed from standard Rust BinaryHeap)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}
