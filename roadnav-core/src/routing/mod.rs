//! Shortest path search over the open roads of a [`RoadGraph`](crate::RoadGraph)

pub mod astar;
pub mod dijkstra;
pub mod path;
mod state;

pub use astar::find_path;
pub use dijkstra::dijkstra_costs;
pub use path::RoutePath;
pub use state::RoutingError;
