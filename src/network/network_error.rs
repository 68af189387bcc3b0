#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Node index {0} not found in street network")]
    UnknownNodeError(usize),
    #[error("Street network has no nodes to snap schedule stops onto")]
    EmptyNetworkError,
    #[error("Edge {src}->{dst} has no length; travel times require edge lengths")]
    MissingEdgeLengthError { src: usize, dst: usize },
    #[error("Travel speed must be positive, found {0} km/h")]
    InvalidSpeedError(f64),
}
