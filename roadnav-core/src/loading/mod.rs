//! This module is responsible for turning plain node and edge records
//! into a routable road graph.

mod builder;
mod config;
mod records;

pub use builder::create_road_graph;
pub use config::RoadGraphConfig;
pub use records::{EdgeRecord, NodeRecord};
