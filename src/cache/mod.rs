//! On-disk cache for the generated robots.txt body
//!
//! A single JSON record holds the body together with the time it was fetched.
//! Reads report *why* nothing usable was found, but callers treat every
//! failure the same way: as a cache miss.

mod store;

pub use store::{read_record, write_record, CacheReadError, CacheRecord, CACHE_FILENAME};
