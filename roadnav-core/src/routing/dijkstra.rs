use std::collections::BinaryHeap;

use hashbrown::HashMap;
use log::trace;

use super::state::{RoutingError, State};
use crate::model::RoadGraph;
use crate::{Cost, NodeId};

/// Dijkstra's algorithm over the open roads of the graph.
/// Returns the lowest cost of every node reachable from `start`,
/// including `start` itself at zero.
///
/// When `max_cost` is given, nodes costing more than it are left out.
///
/// # Errors
///
/// [`RoutingError::UnknownNode`] if `start` is not in the graph.
pub fn dijkstra_costs(
    graph: &RoadGraph,
    start: &str,
    max_cost: Option<Cost>,
) -> Result<HashMap<NodeId, Cost>, RoutingError> {
    if !graph.contains_node(start) {
        return Err(RoutingError::UnknownNode(start.to_string()));
    }

    let mut distances: HashMap<&str, Cost> = HashMap::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        priority: 0.0,
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(node) {
            if cost > best {
                continue;
            }
        }

        // Check max cost constraint
        if let Some(max) = max_cost {
            if cost > max {
                break;
            }
        }

        // Examine neighbors
        for entry in graph.neighbors(node) {
            let next = entry.neighbor.as_str();
            let next_cost = cost + entry.weight;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(slot) => {
                    slot.insert(next_cost);
                    heap.push(State {
                        priority: next_cost,
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut slot) => {
                    if next_cost < *slot.get() {
                        *slot.get_mut() = next_cost;
                        heap.push(State {
                            priority: next_cost,
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    trace!("Dijkstra from {start} settled {} nodes", distances.len());

    Ok(distances
        .into_iter()
        .filter(|&(_, cost)| max_cost.is_none_or(|max| cost <= max))
        .map(|(node, cost)| (node.to_string(), cost))
        .collect())
}
