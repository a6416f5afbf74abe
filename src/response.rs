//! JSON rendering of route queries

use roadnav_core::prelude::*;
use serde_json::{Value as JsonValue, json};

/// `{"path": [...], "cost": ...}` for a found route
pub fn path_to_json(path: &RoutePath) -> JsonValue {
    json!({
        "path": path.nodes(),
        "cost": path.cost(),
    })
}

/// Answers a route query with either the path object or an error object
/// of the form `{"error": kind, "message": text}`.
pub fn route_response(graph: &RoadGraph, start: &str, end: &str) -> JsonValue {
    match find_path(graph, start, end) {
        Ok(path) => path_to_json(&path),
        Err(e) => {
            let kind = match e {
                RoutingError::UnknownNode(_) => "unknown_node",
                RoutingError::NoPath { .. } => "no_path",
            };
            json!({
                "error": kind,
                "message": e.to_string(),
            })
        }
    }
}
