//! Remote robots.txt generation
//!
//! The fetcher only sees the [`RemoteTextProvider`] trait; [`DarkVisitorsClient`]
//! is the production implementation.

mod client;

pub use client::{DarkVisitorsClient, RobotsTxtRequest, DARK_VISITORS_BASE_URL, ROBOTS_TXTS_PATH};

use async_trait::async_trait;

use crate::config::Credential;
use crate::error::Result;

/// Status code the API returns on success
pub const SUCCESS_STATUS: u16 = 200;

/// Status and raw body of one API exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResult {
    pub status_code: u16,
    pub body: String,
}

impl RemoteResult {
    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}

/// Performs a single, non-retrying request for a robots.txt body
///
/// Any status is returned as-is; deciding what counts as failure is up to the
/// caller. Only transport failures are reported as `Err`.
#[async_trait]
pub trait RemoteTextProvider: Send + Sync {
    async fn fetch(
        &self,
        credential: &Credential,
        agent_categories: &[String],
        disallow_path: &str,
    ) -> Result<RemoteResult>;
}
