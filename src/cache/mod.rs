mod cache_error;
mod cache_metadata;
mod download_cache;
mod fetcher;

pub use cache_error::CacheError;
pub use cache_metadata::{CacheMetadata, METADATA_FILENAME};
pub use download_cache::{DownloadCache, CACHE_TTL_DAYS, DEFAULT_CACHE_DIR};
pub use fetcher::{Fetcher, HttpFetcher};
