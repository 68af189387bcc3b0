use crate::cache::CacheError;
use std::path::Path;
use std::time::Duration;

/// retrieval of a remote payload into a local file. implemented over HTTP
/// for production use; tests substitute counting or canned fetchers.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), CacheError>;
}

/// fetches payloads over HTTP with the `downloader` crate. failures are
/// surfaced immediately, nothing is retried.
pub struct HttpFetcher {
    pub connect_timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher {
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), CacheError> {
        let folder = dest.parent().ok_or_else(|| {
            CacheError::InternalError(format!(
                "download destination '{}' has no parent directory",
                dest.to_string_lossy()
            ))
        })?;
        let filename = dest.file_name().ok_or_else(|| {
            CacheError::InternalError(format!(
                "download destination '{}' has no file name",
                dest.to_string_lossy()
            ))
        })?;
        let mut downloader = downloader::downloader::Builder::default()
            .connect_timeout(self.connect_timeout)
            .download_folder(folder)
            .parallel_requests(1)
            .build()
            .map_err(|e| CacheError::FetchError {
                url: url.to_string(),
                message: format!("failed building downloader: {e}"),
            })?;
        let download = downloader::Download::new(url).file_name(Path::new(filename));
        let results = downloader
            .download(&[download])
            .map_err(|e| CacheError::FetchError {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        for result in results {
            result.map_err(|e| CacheError::FetchError {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
