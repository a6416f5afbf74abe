//! Plain records for moving nodes and edges across the crate boundary

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{RoadEdge, RoadNode};
use crate::model::roads::components::default_node_name;
use crate::{Cost, DEFAULT_EDGE_CONGESTION, DEFAULT_EDGE_WEIGHT, EdgeId, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion: Option<f64>,
}

impl NodeRecord {
    /// Builds a node, drawing congestion from `rng` when the record has none
    pub fn into_node<R: Rng>(self, rng: &mut R) -> RoadNode {
        let congestion = self.congestion.unwrap_or_else(|| rng.random::<f64>());
        let name = self.name.unwrap_or_else(|| default_node_name(&self.id));
        RoadNode::new(self.id, self.x, self.y, congestion).with_name(name)
    }
}

impl From<&RoadNode> for NodeRecord {
    fn from(node: &RoadNode) -> Self {
        NodeRecord {
            id: node.id.clone(),
            name: Some(node.name.clone()),
            x: node.x(),
            y: node.y(),
            congestion: Some(node.congestion),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    #[serde(rename = "source")]
    pub source_id: NodeId,
    #[serde(rename = "target")]
    pub target_id: NodeId,
    /// Ignored on insertion into a graph, which recomputes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

impl EdgeRecord {
    pub fn into_edge(self) -> RoadEdge {
        RoadEdge {
            id: self.id,
            source_id: self.source_id,
            target_id: self.target_id,
            weight: self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT),
            congestion: self.congestion.unwrap_or(DEFAULT_EDGE_CONGESTION),
            is_open: self.is_open.unwrap_or(true),
        }
    }
}

impl From<&RoadEdge> for EdgeRecord {
    fn from(edge: &RoadEdge) -> Self {
        EdgeRecord {
            id: edge.id.clone(),
            source_id: edge.source_id.clone(),
            target_id: edge.target_id.clone(),
            weight: Some(edge.weight),
            congestion: Some(edge.congestion),
            is_open: Some(edge.is_open),
        }
    }
}
