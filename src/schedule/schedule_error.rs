use crate::cache::CacheError;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    CacheError(#[from] CacheError),
    #[error("Failed reading feed table '{0}': {1}")]
    FeedReadError(String, String),
    #[error("Failed to parse feed row in '{0}': {1}")]
    MalformedRowError(String, String),
    #[error("Failed to parse arrival time '{0}': expected HH:MM:SS")]
    ArrivalTimeFormatError(String),
    #[error("Stop '{0}' in stop_times has no entry in the stops table")]
    MissingStopLocationError(String),
}
