//! Road graph with an adjacency projection over open edges

use hashbrown::HashMap;
use log::{debug, warn};

use super::components::{RoadEdge, RoadNode};
use super::geometry::{effective_weight, euclidean_distance};
use crate::{Cost, EdgeId, Error, NodeId};

/// One entry of a node's adjacency list: an open road leading to `neighbor`
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency {
    pub neighbor: NodeId,
    pub weight: Cost,
    /// Edge that contributed this entry
    pub edge_id: EdgeId,
}

/// Undirected road network.
///
/// Owns every node and edge and keeps, for each node, the list of open
/// edges leaving it. The adjacency lists are derived data: they are only
/// changed through [`RoadGraph::add_edge`], [`RoadGraph::close_edge`] and
/// [`RoadGraph::recalculate_edge_weight`].
///
/// The graph has no internal synchronization. Mutations must not overlap
/// with a running search.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: HashMap<NodeId, RoadNode>,
    edges: HashMap<EdgeId, RoadEdge>,
    adjacency: HashMap<NodeId, Vec<Adjacency>>,
    /// Edge ids per unordered node pair, in insertion order
    pair_index: HashMap<(NodeId, NodeId), Vec<EdgeId>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, replacing any node with the same id.
    ///
    /// The node always ends up with an adjacency list, possibly empty.
    pub fn add_node(&mut self, node: RoadNode) {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_some() {
            warn!("Node {id} already exists and was replaced");
        }
        self.adjacency.entry(id).or_default();
    }

    /// Inserts an edge, replacing any edge with the same id.
    ///
    /// The edge weight is recomputed from the current endpoint coordinates
    /// and the edge's congestion. Open edges are linked into the adjacency
    /// lists of both endpoints; closed edges are only registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if an endpoint is not in the graph and
    /// [`Error::InvalidData`] if both endpoints are the same node. The graph
    /// is left untouched in both cases.
    pub fn add_edge(&mut self, mut edge: RoadEdge) -> Result<(), Error> {
        if edge.source_id == edge.target_id {
            return Err(Error::InvalidData(format!(
                "Edge {} connects node {} to itself",
                edge.id, edge.source_id
            )));
        }

        edge.weight = self.weight_between(&edge.source_id, &edge.target_id, edge.congestion)?;

        if let Some(previous) = self.edges.remove(&edge.id) {
            warn!("Edge {} already exists and was replaced", edge.id);
            self.withdraw(&previous);
        }

        self.pair_index
            .entry(pair_key(&edge.source_id, &edge.target_id))
            .or_default()
            .push(edge.id.clone());

        if edge.is_open {
            self.link(&edge);
        }
        self.edges.insert(edge.id.clone(), edge);

        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&RoadNode> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&RoadEdge> {
        self.edges.get(id)
    }

    /// First inserted edge joining `a` and `b` in either direction,
    /// whether open or closed.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&RoadEdge> {
        self.pair_index
            .get(&pair_key(a, b))
            .and_then(|ids| ids.first())
            .and_then(|id| self.edges.get(id))
    }

    /// Closes a road.
    ///
    /// Unknown ids are ignored. Every adjacency entry between the two
    /// endpoints is dropped, including entries of other edges joining the
    /// same pair.
    pub fn close_edge(&mut self, edge_id: &str) {
        let Some(edge) = self.edges.get_mut(edge_id) else {
            warn!("Cannot close unknown edge {edge_id}");
            return;
        };
        edge.is_open = false;

        let source = edge.source_id.clone();
        let target = edge.target_id.clone();
        if let Some(list) = self.adjacency.get_mut(&source) {
            list.retain(|entry| entry.neighbor != target);
        }
        if let Some(list) = self.adjacency.get_mut(&target) {
            list.retain(|entry| entry.neighbor != source);
        }

        debug!("Closed edge {edge_id} between {source} and {target}");
    }

    /// Updates the live congestion of a node. Returns `false` for unknown ids.
    pub fn set_node_congestion(&mut self, id: &str, congestion: f64) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.congestion = congestion;
                true
            }
            None => false,
        }
    }

    /// Updates the congestion of an edge without touching its weight.
    /// Returns `false` for unknown ids.
    pub fn set_edge_congestion(&mut self, edge_id: &str, congestion: f64) -> bool {
        match self.edges.get_mut(edge_id) {
            Some(edge) => {
                edge.congestion = congestion;
                true
            }
            None => false,
        }
    }

    /// Recomputes an edge weight from the current node coordinates and
    /// edge congestion, and refreshes the adjacency entries that edge
    /// contributed. Returns the new weight, or `None` for unknown ids.
    pub fn recalculate_edge_weight(&mut self, edge_id: &str) -> Option<Cost> {
        let edge = self.edges.get(edge_id)?;
        let weight = self
            .weight_between(&edge.source_id, &edge.target_id, edge.congestion)
            .ok()?;

        let edge = self.edges.get_mut(edge_id)?;
        edge.weight = weight;
        for endpoint in [&edge.source_id, &edge.target_id] {
            if let Some(list) = self.adjacency.get_mut(endpoint) {
                list.iter_mut()
                    .filter(|entry| entry.edge_id == edge_id)
                    .for_each(|entry| entry.weight = weight);
            }
        }

        debug!("Recalculated weight of edge {edge_id}: {weight}");
        Some(weight)
    }

    /// Open roads leaving `id`. Unknown nodes have no neighbors.
    pub fn neighbors(&self, id: &str) -> &[Adjacency] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge> {
        self.edges.values()
    }

    fn weight_between(
        &self,
        source_id: &str,
        target_id: &str,
        congestion: f64,
    ) -> Result<Cost, Error> {
        let source = self
            .nodes
            .get(source_id)
            .ok_or_else(|| Error::UnknownNode(source_id.to_string()))?;
        let target = self
            .nodes
            .get(target_id)
            .ok_or_else(|| Error::UnknownNode(target_id.to_string()))?;

        let distance = euclidean_distance(source.geometry, target.geometry);
        Ok(effective_weight(distance, congestion))
    }

    fn link(&mut self, edge: &RoadEdge) {
        self.adjacency
            .entry(edge.source_id.clone())
            .or_default()
            .push(Adjacency {
                neighbor: edge.target_id.clone(),
                weight: edge.weight,
                edge_id: edge.id.clone(),
            });
        self.adjacency
            .entry(edge.target_id.clone())
            .or_default()
            .push(Adjacency {
                neighbor: edge.source_id.clone(),
                weight: edge.weight,
                edge_id: edge.id.clone(),
            });
    }

    // Removes every trace of a replaced edge from the derived structures
    fn withdraw(&mut self, edge: &RoadEdge) {
        for endpoint in [&edge.source_id, &edge.target_id] {
            if let Some(list) = self.adjacency.get_mut(endpoint) {
                list.retain(|entry| entry.edge_id != edge.id);
            }
        }

        let key = pair_key(&edge.source_id, &edge.target_id);
        if let Some(ids) = self.pair_index.get_mut(&key) {
            ids.retain(|id| *id != edge.id);
            if ids.is_empty() {
                self.pair_index.remove(&key);
            }
        }
    }
}

fn pair_key(a: &str, b: &str) -> (NodeId, NodeId) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
