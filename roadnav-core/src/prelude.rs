pub use crate::{DEFAULT_EDGE_CONGESTION, DEFAULT_EDGE_WEIGHT};

// Re-export key components
pub use crate::loading::{EdgeRecord, NodeRecord, RoadGraphConfig, create_road_graph};
pub use crate::model::{Adjacency, RoadEdge, RoadGraph, RoadNode};
pub use crate::routing::{RoutePath, RoutingError, dijkstra_costs, find_path};

// Core identifier and cost types
pub use crate::Cost;
pub use crate::EdgeId;
pub use crate::NodeId;

pub use crate::Error;
