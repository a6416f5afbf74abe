use thiserror::Error;

use crate::routing::RoutingError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),
}
