use crate::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum IsochroneError {
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
    #[error("Failed building isochrone worker pool: {0}")]
    WorkerPoolError(String),
}
