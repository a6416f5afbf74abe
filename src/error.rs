use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
    #[error(transparent)]
    Core(#[from] roadnav_core::Error),
}
