use crate::cache::CacheError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const METADATA_FILENAME: &str = "metadata.json";

/// persisted record of which sources have been fetched and when. stored as
/// JSON `{"sources": {name: url, ...}, "last_modified": ISO-8601 | null}`
/// under the cache directory.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CacheMetadata {
    pub sources: HashMap<String, String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl CacheMetadata {
    /// reads the metadata file, or returns the empty record if no file has
    /// been written yet.
    pub fn read(path: &Path) -> Result<CacheMetadata, CacheError> {
        if !path.exists() {
            return Ok(CacheMetadata::default());
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            CacheError::MetadataFormatError(path.to_string_lossy().to_string(), e.to_string())
        })
    }

    pub fn write(&self, path: &Path) -> Result<(), CacheError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(self).map_err(|e| {
            CacheError::MetadataFormatError(path.to_string_lossy().to_string(), e.to_string())
        })?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// true when the record has never been stamped or its stamp is at least
    /// `ttl` old.
    pub fn is_stale(&self, ttl: TimeDelta, now: DateTime<Utc>) -> bool {
        match self.last_modified {
            None => true,
            Some(stamp) => now - stamp >= ttl,
        }
    }
}
