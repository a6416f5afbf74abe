//! Data model for road network routing
//!
//! Contains the node, edge and graph types of a road network.

pub mod roads;

// Re-export of the main model structures
pub use roads::components::{RoadEdge, RoadNode};
pub use roads::graph::{Adjacency, RoadGraph};
