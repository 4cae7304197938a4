//! Filesystem access used by the cache and output writers
//!
//! Kept behind a trait so the fetcher can be driven against a fake in tests.
//! Writes overwrite in place; there is no locking or atomic rename.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Failure reading a file, with "not there yet" split out from real I/O errors
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found")]
    NotFound,

    #[error("read failed: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound
        } else {
            ReadError::Io(e)
        }
    }
}

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Reads the whole file
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, ReadError>;

    /// Writes `contents` to `path`, replacing anything already there
    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates `path` and all missing parents
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem, via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

#[async_trait]
impl FileSystem for LocalFs {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, ReadError> {
        Ok(tokio::fs::read(path).await?)
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = LocalFs.read_file(&temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(ReadError::NotFound)));
    }

    #[tokio::test]
    async fn test_read_directory_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = LocalFs.read_file(temp_dir.path()).await;
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[tokio::test]
    async fn test_write_then_read_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("robots.txt");

        LocalFs.write_file(&path, b"first").await.expect("First write should succeed");
        LocalFs.write_file(&path, b"second").await.expect("Second write should succeed");

        let bytes = LocalFs.read_file(&path).await.expect("Should read file");
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn test_create_dir_all_creates_nested_dirs() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("a").join("b").join("c");

        LocalFs.create_dir_all(&nested).await.expect("Should create dirs");
        // Creating again is not an error
        LocalFs.create_dir_all(&nested).await.expect("Should be idempotent");

        assert!(nested.is_dir());
    }
}
