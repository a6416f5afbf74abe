use hashbrown::HashSet;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::config::RoadGraphConfig;
use super::records::{EdgeRecord, NodeRecord};
use crate::{Error, RoadGraph};

/// Creates a road graph from the records in the configuration.
///
/// Nodes are inserted first, then edges in the given order, so every
/// edge weight reflects the final node coordinates.
///
/// # Errors
///
/// Returns an error if a record is malformed or an edge refers to a node
/// that is not part of the configuration.
pub fn create_road_graph(config: &RoadGraphConfig) -> Result<RoadGraph, Error> {
    validate_config(config)?;

    let mut graph = RoadGraph::new();
    match config.congestion_seed {
        Some(seed) => {
            debug!("Drawing missing node congestion with seed {seed}");
            add_nodes(&mut graph, &config.nodes, &mut StdRng::seed_from_u64(seed));
        }
        None => add_nodes(&mut graph, &config.nodes, &mut rand::rng()),
    }

    for record in &config.edges {
        graph.add_edge(record.clone().into_edge())?;
    }

    let closed = config
        .edges
        .iter()
        .filter(|record| record.is_open == Some(false))
        .count();
    info!(
        "Road graph created with {} nodes and {} edges ({closed} closed)",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn add_nodes<R: Rng>(graph: &mut RoadGraph, records: &[NodeRecord], rng: &mut R) {
    for record in records {
        graph.add_node(record.clone().into_node(rng));
    }
}

fn validate_config(config: &RoadGraphConfig) -> Result<(), Error> {
    let mut node_ids = HashSet::with_capacity(config.nodes.len());
    for node in &config.nodes {
        validate_node(node)?;
        node_ids.insert(node.id.as_str());
    }

    for edge in &config.edges {
        validate_edge(edge)?;
        for endpoint in [&edge.source_id, &edge.target_id] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(Error::UnknownNode(endpoint.clone()));
            }
        }
    }

    Ok(())
}

fn validate_node(node: &NodeRecord) -> Result<(), Error> {
    if node.id.is_empty() {
        return Err(Error::InvalidData("Node with an empty id".to_string()));
    }
    if !node.x.is_finite() || !node.y.is_finite() {
        return Err(Error::InvalidData(format!(
            "Node {} has non-finite coordinates ({}, {})",
            node.id, node.x, node.y
        )));
    }
    if let Some(congestion) = node.congestion {
        validate_congestion(congestion, "Node", &node.id)?;
    }
    Ok(())
}

fn validate_edge(edge: &EdgeRecord) -> Result<(), Error> {
    if edge.id.is_empty() {
        return Err(Error::InvalidData("Edge with an empty id".to_string()));
    }
    if edge.source_id == edge.target_id {
        return Err(Error::InvalidData(format!(
            "Edge {} connects node {} to itself",
            edge.id, edge.source_id
        )));
    }
    if let Some(congestion) = edge.congestion {
        validate_congestion(congestion, "Edge", &edge.id)?;
    }
    Ok(())
}

// Negative congestion would make roads cheaper than the straight-line
// distance and break the search heuristic.
fn validate_congestion(congestion: f64, kind: &str, id: &str) -> Result<(), Error> {
    if congestion.is_finite() && congestion >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "{kind} {id} has invalid congestion {congestion}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn node(id: &str, x: f64, y: f64) -> NodeRecord {
        NodeRecord {
            id: id.to_string(),
            name: None,
            x,
            y,
            congestion: None,
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> EdgeRecord {
        EdgeRecord {
            id: id.to_string(),
            source_id: source.to_string(),
            target_id: target.to_string(),
            weight: None,
            congestion: None,
            is_open: None,
        }
    }

    fn config() -> RoadGraphConfig {
        RoadGraphConfig {
            nodes: vec![node("a", 0.0, 0.0), node("b", 3.0, 4.0), node("c", 6.0, 8.0)],
            edges: vec![edge("ab", "a", "b"), edge("bc", "b", "c")],
            congestion_seed: Some(42),
        }
    }

    #[test]
    fn builds_graph_from_records() {
        let graph = create_road_graph(&config()).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_relative_eq!(graph.edge("ab").unwrap().weight, 7.5);
        assert_eq!(graph.neighbors("b").len(), 2);
        assert_eq!(graph.node("a").unwrap().name, "Intersection_a");
    }

    #[test]
    fn seeded_congestion_is_reproducible() {
        let first = create_road_graph(&config()).unwrap();
        let second = create_road_graph(&config()).unwrap();

        for node in first.nodes() {
            let other = second.node(&node.id).unwrap();
            assert_eq!(node.congestion, other.congestion);
            assert!((0.0..1.0).contains(&node.congestion));
        }
    }

    #[test]
    fn unseeded_congestion_stays_in_range() {
        let mut config = config();
        config.congestion_seed = None;
        let graph = create_road_graph(&config).unwrap();

        assert!(graph.nodes().all(|node| (0.0..1.0).contains(&node.congestion)));
    }

    #[test]
    fn closed_records_are_not_routable() {
        let mut config = config();
        config.edges[1].is_open = Some(false);
        let graph = create_road_graph(&config).unwrap();

        assert!(!graph.edge("bc").unwrap().is_open);
        assert!(graph.neighbors("c").is_empty());
    }

    #[test]
    fn rejects_edge_to_missing_node() {
        let mut config = config();
        config.edges.push(edge("cd", "c", "d"));

        assert_eq!(
            create_road_graph(&config).unwrap_err(),
            Error::UnknownNode("d".to_string())
        );
    }

    #[test]
    fn rejects_invalid_records() {
        let mut bad_coords = config();
        bad_coords.nodes[0].x = f64::NAN;
        assert!(matches!(
            create_road_graph(&bad_coords),
            Err(Error::InvalidData(_))
        ));

        let mut self_loop = config();
        self_loop.edges.push(edge("aa", "a", "a"));
        assert!(matches!(
            create_road_graph(&self_loop),
            Err(Error::InvalidData(_))
        ));

        let mut negative = config();
        negative.edges[0].congestion = Some(-0.5);
        assert!(matches!(
            create_road_graph(&negative),
            Err(Error::InvalidData(_))
        ));

        let mut empty_id = config();
        empty_id.nodes.push(node("", 1.0, 1.0));
        assert!(matches!(
            create_road_graph(&empty_id),
            Err(Error::InvalidData(_))
        ));
    }
}
