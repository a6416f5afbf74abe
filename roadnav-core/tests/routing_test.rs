use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use roadnav_core::prelude::*;

fn random_graph(rng: &mut StdRng, node_count: usize, edge_count: usize) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for i in 0..node_count {
        let x = rng.random_range(0.0..100.0);
        let y = rng.random_range(0.0..100.0);
        graph.add_node(RoadNode::with_random_congestion(format!("n{i}"), x, y, rng));
    }
    for i in 0..edge_count {
        let source = rng.random_range(0..node_count);
        let target = rng.random_range(0..node_count);
        if source == target {
            continue;
        }
        let edge = RoadEdge::new(format!("e{i}"), format!("n{source}"), format!("n{target}"))
            .with_congestion(rng.random_range(0.0..2.0));
        graph.add_edge(edge).unwrap();
    }
    graph
}

fn path_cost(graph: &RoadGraph, path: &RoutePath) -> Cost {
    path.nodes()
        .windows(2)
        .map(|pair| {
            graph
                .neighbors(&pair[0])
                .iter()
                .filter(|entry| entry.neighbor == pair[1])
                .map(|entry| entry.weight)
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

#[test]
fn astar_matches_dijkstra_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut graph = random_graph(&mut rng, 40, 90);
        for i in 0..10 {
            if rng.random_bool(0.5) {
                graph.close_edge(&format!("e{i}"));
            }
        }

        let start = format!("n{}", rng.random_range(0..40));
        let reference = dijkstra_costs(&graph, &start, None).unwrap();

        for target in 0..40 {
            let target = format!("n{target}");
            match (find_path(&graph, &start, &target), reference.get(&target)) {
                (Ok(path), Some(&expected)) => {
                    assert_relative_eq!(path.cost(), expected, epsilon = 1e-9);
                    assert_eq!(path.start(), Some(start.as_str()));
                    assert_eq!(path.end(), Some(target.as_str()));
                    assert_relative_eq!(path_cost(&graph, &path), path.cost(), epsilon = 1e-9);
                }
                (Err(RoutingError::NoPath { .. }), None) => {}
                (result, expected) => {
                    panic!("{start} -> {target}: search gave {result:?}, reference {expected:?}")
                }
            }
        }
    }
}

#[test]
fn closure_never_makes_routes_cheaper() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut graph = random_graph(&mut rng, 30, 80);

    for i in 0..80 {
        let before = find_path(&graph, "n0", "n29");
        graph.close_edge(&format!("e{i}"));
        let after = find_path(&graph, "n0", "n29");

        match (before, after) {
            (Ok(before), Ok(after)) => assert!(after.cost() >= before.cost() - 1e-9),
            (Err(RoutingError::NoPath { .. }), Ok(_)) => panic!("closing a road opened a route"),
            _ => {}
        }
    }

    assert!(matches!(
        find_path(&graph, "n0", "n29"),
        Err(RoutingError::NoPath { .. })
    ));
}

#[test]
fn weight_formula_for_three_four_five() {
    let mut graph = RoadGraph::new();
    graph.add_node(RoadNode::new("i1", 0.0, 0.0, 0.0));
    graph.add_node(RoadNode::new("i2", 3.0, 4.0, 0.0));
    graph.add_edge(RoadEdge::new("r1", "i1", "i2")).unwrap();

    assert_eq!(graph.edge("r1").unwrap().weight, 7.5);

    let forward = find_path(&graph, "i1", "i2").unwrap();
    let backward = find_path(&graph, "i2", "i1").unwrap();
    assert_eq!(forward.cost(), 7.5);
    assert_eq!(backward.cost(), 7.5);
    assert_eq!(backward.nodes(), ["i2", "i1"]);
}

#[test]
fn every_node_reaches_itself_for_free() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = random_graph(&mut rng, 15, 0);

    for node in graph.nodes() {
        let path = find_path(&graph, &node.id, &node.id).unwrap();
        assert_eq!(path.nodes(), [node.id.clone()]);
        assert_eq!(path.cost(), 0.0);
    }
}

#[test]
fn square_with_closed_bottom_road() {
    let config = RoadGraphConfig {
        nodes: [("i1", 0.0, 0.0), ("i2", 10.0, 0.0), ("i3", 0.0, 10.0), ("i4", 10.0, 10.0)]
            .into_iter()
            .map(|(id, x, y)| NodeRecord {
                id: id.to_string(),
                name: None,
                x,
                y,
                congestion: None,
            })
            .collect(),
        edges: [("r1", "i1", "i2"), ("r2", "i1", "i3"), ("r3", "i2", "i4"), ("r4", "i3", "i4")]
            .into_iter()
            .map(|(id, source, target)| EdgeRecord {
                id: id.to_string(),
                source_id: source.to_string(),
                target_id: target.to_string(),
                weight: None,
                congestion: None,
                is_open: None,
            })
            .collect(),
        congestion_seed: Some(0),
    };
    let mut graph = create_road_graph(&config).unwrap();

    graph.close_edge("r1");
    let path = find_path(&graph, "i1", "i4").unwrap();
    assert_eq!(path.nodes(), ["i1", "i3", "i4"]);
    assert_eq!(path.cost(), 30.0);
}
