//! Road network components - intersections and road segments

use geo::Point;
use rand::Rng;

use crate::{Cost, DEFAULT_EDGE_CONGESTION, DEFAULT_EDGE_WEIGHT, EdgeId, NodeId};

/// Road graph node (intersection)
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    /// Unique identifier, never changes after construction
    pub id: NodeId,
    /// Human readable label
    pub name: String,
    /// Node coordinates
    pub geometry: Point<f64>,
    /// Live congestion level in `[0, 1)`
    pub congestion: f64,
}

impl RoadNode {
    /// Creates a node with an explicit congestion level
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64, congestion: f64) -> Self {
        let id = id.into();
        RoadNode {
            name: default_node_name(&id),
            id,
            geometry: Point::new(x, y),
            congestion,
        }
    }

    /// Creates a node whose congestion is drawn uniformly from `[0, 1)`
    /// using the supplied generator.
    pub fn with_random_congestion<R: Rng>(
        id: impl Into<NodeId>,
        x: f64,
        y: f64,
        rng: &mut R,
    ) -> Self {
        Self::new(id, x, y, rng.random::<f64>())
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }
}

pub(crate) fn default_node_name(id: &str) -> String {
    format!("Intersection_{id}")
}

/// Road graph edge (undirected road segment)
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    pub id: EdgeId,
    pub source_id: NodeId,
    pub target_id: NodeId,
    /// Effective weight, recomputed when the edge is added to a graph
    pub weight: Cost,
    pub congestion: f64,
    pub is_open: bool,
}

impl RoadEdge {
    /// Creates an open edge with default weight and congestion
    pub fn new(
        id: impl Into<EdgeId>,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
    ) -> Self {
        RoadEdge {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            weight: DEFAULT_EDGE_WEIGHT,
            congestion: DEFAULT_EDGE_CONGESTION,
            is_open: true,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Cost) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_congestion(mut self, congestion: f64) -> Self {
        self.congestion = congestion;
        self
    }

    /// Marks the edge as closed before it is inserted
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.is_open = false;
        self
    }

    /// Whether the edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source_id == a && self.target_id == b) || (self.source_id == b && self.target_id == a)
    }
}
