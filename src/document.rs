//! Whole-graph JSON documents

use log::info;
use roadnav_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::TransportError;

/// Serialized form of a road graph: every node and edge as a plain record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Snapshot of a graph, with nodes and edges sorted by id
    pub fn from_graph(graph: &RoadGraph) -> Self {
        let mut nodes: Vec<NodeRecord> = graph.nodes().map(NodeRecord::from).collect();
        let mut edges: Vec<EdgeRecord> = graph.edges().map(EdgeRecord::from).collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        GraphDocument { nodes, edges }
    }

    pub fn into_config(self, congestion_seed: Option<u64>) -> RoadGraphConfig {
        RoadGraphConfig {
            nodes: self.nodes,
            edges: self.edges,
            congestion_seed,
        }
    }
}

/// Parses a graph document and builds the graph it describes.
///
/// # Errors
///
/// Fails on malformed JSON or when the records do not form a valid graph.
pub fn graph_from_json(json: &str, congestion_seed: Option<u64>) -> Result<RoadGraph, TransportError> {
    let document: GraphDocument = serde_json::from_str(json)?;
    info!(
        "Loading road graph document with {} nodes and {} edges",
        document.nodes.len(),
        document.edges.len()
    );
    Ok(create_road_graph(&document.into_config(congestion_seed))?)
}

/// Serializes every node and edge of the graph.
///
/// # Errors
///
/// Fails if a value cannot be represented in JSON (non-finite numbers).
pub fn graph_to_json(graph: &RoadGraph) -> Result<String, TransportError> {
    Ok(serde_json::to_string(&GraphDocument::from_graph(graph))?)
}
