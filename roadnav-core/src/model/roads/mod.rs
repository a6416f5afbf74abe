//! Road network model

pub mod components;
pub mod geometry;
pub mod graph;

pub use components::{RoadEdge, RoadNode};
pub use graph::{Adjacency, RoadGraph};
