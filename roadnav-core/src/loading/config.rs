use super::records::{EdgeRecord, NodeRecord};

/// Input for [`create_road_graph`](super::create_road_graph)
#[derive(Debug, Clone, Default)]
pub struct RoadGraphConfig {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    /// Seed for the congestion of nodes that carry none.
    /// Without a seed the thread-local generator is used.
    pub congestion_seed: Option<u64>,
}
