//! GeoJSON rendering of route paths

use geo::{LineString, Point};
use geojson::{Feature, Geometry};
use roadnav_core::prelude::*;
use serde_json::json;

use crate::TransportError;

/// Converts a path to a `GeoJSON` Feature.
///
/// Paths through several nodes become a `LineString` over the node
/// coordinates; a single-node path becomes a `Point`. The feature
/// properties carry the node ids and the total cost.
///
/// # Errors
///
/// Fails if a node on the path is no longer in the graph.
pub fn path_to_geojson(path: &RoutePath, graph: &RoadGraph) -> Result<Feature, TransportError> {
    let points = path
        .nodes()
        .iter()
        .map(|id| {
            graph
                .node(id)
                .map(|node| node.geometry)
                .ok_or_else(|| Error::UnknownNode(id.clone()))
        })
        .collect::<Result<Vec<Point<f64>>, Error>>()?;

    let geometry = if points.len() == 1 {
        Geometry::new((&points[0]).into())
    } else {
        let line: LineString<f64> = points.into_iter().collect();
        Geometry::new((&line).into())
    };

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "nodes": path.nodes(),
            "cost": path.cost(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| TransportError::GeoJson(e.to_string()))
}
