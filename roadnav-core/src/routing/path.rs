use crate::{Cost, NodeId};

/// Result of a point-to-point search: node ids from start to end
/// (both inclusive) and the summed edge weights along them.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl RoutePath {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Cost) -> Self {
        RoutePath { nodes, cost }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    pub fn into_parts(self) -> (Vec<NodeId>, Cost) {
        (self.nodes, self.cost)
    }
}
