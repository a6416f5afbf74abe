//! A* search guided by the straight-line distance to the goal.
//!
//! Edge weights are euclidean lengths scaled by `1 + congestion` with
//! non-negative congestion, so the straight-line distance never
//! overestimates the remaining cost and the first time the goal is popped
//! its cost is optimal.

use std::collections::BinaryHeap;

use geo::Point;
use hashbrown::{HashMap, HashSet};
use log::trace;

use super::path::RoutePath;
use super::state::{RoutingError, State};
use crate::model::RoadGraph;
use crate::model::roads::geometry::euclidean_distance;
use crate::{Cost, NodeId};

/// Finds the lowest-cost path between two nodes over open roads.
///
/// A query from a node to itself yields that single node at zero cost,
/// whether or not the node has any roads.
///
/// # Errors
///
/// [`RoutingError::UnknownNode`] if `start` or `end` is not in the graph
/// (checked in that order, before searching), and [`RoutingError::NoPath`]
/// if the search runs out of frontier without reaching `end`.
pub fn find_path(graph: &RoadGraph, start: &str, end: &str) -> Result<RoutePath, RoutingError> {
    if !graph.contains_node(start) {
        return Err(RoutingError::UnknownNode(start.to_string()));
    }
    let goal = graph
        .node(end)
        .map(|node| node.geometry)
        .ok_or_else(|| RoutingError::UnknownNode(end.to_string()))?;

    if start == end {
        return Ok(RoutePath::new(vec![start.to_string()], 0.0));
    }

    let heuristic = |id: &str| straight_line_estimate(graph, id, goal);

    let mut g_scores: HashMap<&str, Cost> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    g_scores.insert(start, 0.0);
    frontier.push(State {
        priority: heuristic(start),
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node, .. }) = frontier.pop() {
        if node == end {
            trace!(
                "Reached {end} from {start} at cost {cost} after expanding {} nodes",
                visited.len()
            );
            return Ok(RoutePath::new(
                reconstruct_path(&predecessors, start, end),
                cost,
            ));
        }

        // Stale entry for a node that was already expanded
        if !visited.insert(node) {
            continue;
        }

        for entry in graph.neighbors(node) {
            let next = entry.neighbor.as_str();
            if visited.contains(next) {
                continue;
            }

            let tentative = cost + entry.weight;
            if g_scores.get(next).is_none_or(|&best| tentative < best) {
                predecessors.insert(next, node);
                g_scores.insert(next, tentative);
                frontier.push(State {
                    priority: tentative + heuristic(next),
                    cost: tentative,
                    node: next,
                });
            }
        }
    }

    trace!(
        "Frontier exhausted after expanding {} nodes without reaching {end}",
        visited.len()
    );
    Err(RoutingError::NoPath {
        start: start.to_string(),
        end: end.to_string(),
    })
}

fn straight_line_estimate(graph: &RoadGraph, id: &str, goal: Point<f64>) -> Cost {
    graph
        .node(id)
        .map_or(0.0, |node| euclidean_distance(node.geometry, goal))
}

/// Follows predecessor links from `end` back to `start`
fn reconstruct_path<'a>(
    predecessors: &HashMap<&'a str, &'a str>,
    start: &str,
    end: &'a str,
) -> Vec<NodeId> {
    let mut nodes = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match predecessors.get(current) {
            Some(&prev) => {
                nodes.push(prev.to_string());
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse(); // Now path is from start to end
    nodes
}
