//! Road network model and shortest path search.
//!
//! The crate keeps a weighted, undirected road graph whose edges can be
//! closed between queries, and answers point-to-point queries with an A*
//! search guided by the straight-line distance to the goal.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{EdgeRecord, NodeRecord, RoadGraphConfig, create_road_graph};
pub use model::{Adjacency, RoadEdge, RoadGraph, RoadNode};
pub use routing::{RoutePath, RoutingError, dijkstra_costs, find_path};

/// Identifier of a node (intersection) in the road graph
pub type NodeId = String;
/// Identifier of an edge (road segment) in the road graph
pub type EdgeId = String;
/// Travel cost: euclidean length scaled by congestion
pub type Cost = f64;

/// Congestion assigned to a new edge when none is given
pub const DEFAULT_EDGE_CONGESTION: f64 = 0.5;
/// Weight an edge carries until it is attached to a graph
pub const DEFAULT_EDGE_WEIGHT: Cost = 1.0;
