//! Cache record format and read/write helpers
//!
//! The record is stored as compact JSON:
//! `{"timestamp": <milliseconds since epoch>, "content": "<robots.txt body>"}`.

use std::io;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::{FileSystem, ReadError};

/// File name of the cache record, relative to the project root
pub const CACHE_FILENAME: &str = ".ai-robots-cache.json";

/// A fetched body and the instant it was fetched
///
/// The two fields are always written together; a record is never updated
/// piecemeal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// When the content was retrieved from the API
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// The raw response body
    pub content: String,
}

/// Why no record could be read
#[derive(Debug, Error)]
pub enum CacheReadError {
    /// Nothing has been cached yet
    #[error("no cache file")]
    NotFound,

    /// The file exists but is not a valid record
    #[error("malformed cache file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file exists but could not be read
    #[error("unreadable cache file: {0}")]
    Io(#[source] io::Error),
}

impl CacheRecord {
    /// Creates a record stamped with the current time
    pub fn new(content: impl Into<String>) -> Self {
        Self::at(Utc::now(), content)
    }

    /// Creates a record with an explicit timestamp
    pub fn at(timestamp: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            content: content.into(),
        }
    }

    /// Time elapsed between the fetch and `now`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.timestamp
    }

    /// Whether the record is younger than `ttl` at `now`
    ///
    /// A timestamp in the future (clock skew) counts as fresh.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) < ttl
    }
}

/// Reads and parses the record at `path`
pub async fn read_record<F>(fs: &F, path: &Path) -> Result<CacheRecord, CacheReadError>
where
    F: FileSystem + ?Sized,
{
    let bytes = fs.read_file(path).await.map_err(|e| match e {
        ReadError::NotFound => CacheReadError::NotFound,
        ReadError::Io(e) => CacheReadError::Io(e),
    })?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Serializes `record` to `path`, replacing any previous record
pub async fn write_record<F>(fs: &F, path: &Path, record: &CacheRecord) -> io::Result<()>
where
    F: FileSystem + ?Sized,
{
    let json = serde_json::to_vec(record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs.write_file(path, &json).await
}
