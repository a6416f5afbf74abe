//! Transport layer for the road network core.
//!
//! Loads graphs from JSON documents, writes them back, and renders route
//! results as JSON or GeoJSON for callers outside the crate.

pub mod document;
pub mod error;
pub mod feature;
pub mod response;

pub use document::{GraphDocument, graph_from_json, graph_to_json};
pub use error::TransportError;
pub use feature::path_to_geojson;
pub use response::{path_to_json, route_response};

pub use roadnav_core::prelude;
