use crate::cache::{CacheError, CacheMetadata, Fetcher, METADATA_FILENAME};
use chrono::{TimeDelta, Utc};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

pub const DEFAULT_CACHE_DIR: &str = ".cache";
pub const CACHE_TTL_DAYS: i64 = 1;

/// staging area for in-flight downloads under the cache directory.
const STAGING_DIR: &str = ".tmp";

/// filesystem cache of downloaded schedule sources with freshness tracked
/// in a metadata file. zip payloads are unpacked under `<cache_dir>/<name>/`,
/// anything else lands at `<cache_dir>/<name>`.
///
/// the cache is single-process: the metadata file is not locked, and a
/// partially-written entry is not rolled back on failure.
pub struct DownloadCache<F: Fetcher> {
    cache_dir: PathBuf,
    metadata_path: PathBuf,
    metadata: CacheMetadata,
    fetcher: F,
}

impl<F: Fetcher> DownloadCache<F> {
    /// opens a cache rooted at the conventional `.cache` directory.
    pub fn new(fetcher: F) -> Result<DownloadCache<F>, CacheError> {
        Self::open(PathBuf::from(DEFAULT_CACHE_DIR), fetcher)
    }

    /// opens a cache rooted at `cache_dir`, reading any persisted metadata
    /// exactly once up front.
    pub fn open(cache_dir: PathBuf, fetcher: F) -> Result<DownloadCache<F>, CacheError> {
        let metadata_path = cache_dir.join(METADATA_FILENAME);
        let metadata = CacheMetadata::read(&metadata_path)?;
        Ok(DownloadCache {
            cache_dir,
            metadata_path,
            metadata,
            fetcher,
        })
    }

    /// fetches every source that is due: all of them when the metadata
    /// record is stale or absent, otherwise only names never recorded.
    /// newly-recorded names re-stamp the metadata; a batch containing no
    /// new names leaves the metadata file untouched.
    pub fn download(&mut self, sources: &HashMap<String, String>) -> Result<(), CacheError> {
        let pending = self.pending_sources(sources);
        if pending.is_empty() {
            log::debug!("all {} requested sources fresh in cache", sources.len());
            return Ok(());
        }
        fs::create_dir_all(&self.cache_dir)?;

        let mut bar = Bar::builder()
            .total(pending.len())
            .desc("download sources")
            .build()
            .map_err(CacheError::InternalError)?;
        for (name, url) in pending.iter() {
            log::info!("fetching source '{name}' from {url}");
            self.fetch_source(name, url)?;
            let _ = bar.update(1);
        }
        let _ = fs::remove_dir_all(self.cache_dir.join(STAGING_DIR));

        self.update_metadata(&pending)
    }

    /// resolves a path under the cache root.
    pub fn get_path(&self, parts: &[&str]) -> PathBuf {
        parts
            .iter()
            .fold(self.cache_dir.clone(), |path, part| path.join(part))
    }

    pub fn metadata(&self) -> &CacheMetadata {
        &self.metadata
    }

    fn pending_sources(&self, sources: &HashMap<String, String>) -> Vec<(String, String)> {
        let stale = self
            .metadata
            .is_stale(TimeDelta::days(CACHE_TTL_DAYS), Utc::now());
        sources
            .iter()
            .filter(|(name, _)| stale || !self.metadata.sources.contains_key(*name))
            .map(|(name, url)| (name.clone(), url.clone()))
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect()
    }

    fn fetch_source(&self, name: &str, url: &str) -> Result<(), CacheError> {
        let staging = self.cache_dir.join(STAGING_DIR);
        fs::create_dir_all(&staging)?;
        let staged = staging.join(name);
        self.fetcher.fetch(url, &staged)?;

        let dest = self.cache_dir.join(name);
        let file = File::open(&staged)?;
        match zip::ZipArchive::new(file) {
            Ok(mut archive) => {
                fs::create_dir_all(&dest)?;
                archive
                    .extract(&dest)
                    .map_err(|e| CacheError::ExtractionError(name.to_string(), e.to_string()))?;
                fs::remove_file(&staged)?;
            }
            Err(_) => {
                // not an archive, keep the payload verbatim
                fs::rename(&staged, &dest)?;
            }
        }
        Ok(())
    }

    fn update_metadata(&mut self, fetched: &[(String, String)]) -> Result<(), CacheError> {
        let has_new = fetched
            .iter()
            .any(|(name, _)| !self.metadata.sources.contains_key(name));
        if !has_new {
            return Ok(());
        }
        for (name, url) in fetched.iter() {
            self.metadata.sources.insert(name.clone(), url.clone());
        }
        self.metadata.last_modified = Some(Utc::now());
        self.metadata.write(&self.metadata_path)
    }
}
