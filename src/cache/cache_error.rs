#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("Cache io failure: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("Failed to parse cache metadata file '{0}': {1}")]
    MetadataFormatError(String, String),
    #[error("Failed fetching '{url}': {message}")]
    FetchError { url: String, message: String },
    #[error("Failed extracting archive for source '{0}': {1}")]
    ExtractionError(String, String),
    #[error("{0}")]
    InternalError(String),
}
