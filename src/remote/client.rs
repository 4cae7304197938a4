//! Dark Visitors API client
//!
//! Posts the agent categories and disallow path to the robots.txt endpoint and
//! hands back whatever the API answered.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{RemoteResult, RemoteTextProvider};
use crate::config::Credential;
use crate::error::Result;

/// Base URL for the Dark Visitors API
pub const DARK_VISITORS_BASE_URL: &str = "https://api.darkvisitors.com";

/// Endpoint that generates robots.txt bodies
pub const ROBOTS_TXTS_PATH: &str = "/robots-txts";

/// JSON body accepted by the robots.txt endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsTxtRequest<'a> {
    pub agent_types: &'a [String],
    pub disallow: &'a str,
}

/// Client for the Dark Visitors robots.txt endpoint
#[derive(Debug, Clone)]
pub struct DarkVisitorsClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl Default for DarkVisitorsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DarkVisitorsClient {
    /// Creates a client pointed at the public API
    pub fn new() -> Self {
        Self::with_base_url(DARK_VISITORS_BASE_URL)
    }

    /// Creates a client pointed at a different host, e.g. a mock server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Full URL of the robots.txt endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ROBOTS_TXTS_PATH)
    }
}

#[async_trait]
impl RemoteTextProvider for DarkVisitorsClient {
    async fn fetch(
        &self,
        credential: &Credential,
        agent_categories: &[String],
        disallow_path: &str,
    ) -> Result<RemoteResult> {
        let url = self.endpoint();
        let body = RobotsTxtRequest {
            agent_types: agent_categories,
            disallow: disallow_path,
        };

        debug!(%url, ?agent_categories, disallow_path, "requesting robots.txt");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;

        debug!(status_code, bytes = body.len(), "robots.txt response received");

        Ok(RemoteResult { status_code, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_api_field_names() {
        let agent_types = vec!["AI Data Scraper".to_string()];
        let body = RobotsTxtRequest {
            agent_types: &agent_types,
            disallow: "/",
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"agent_types": ["AI Data Scraper"], "disallow": "/"})
        );
    }

    #[test]
    fn test_endpoint_defaults_to_public_api() {
        assert_eq!(
            DarkVisitorsClient::new().endpoint(),
            "https://api.darkvisitors.com/robots-txts"
        );
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let client = DarkVisitorsClient::with_base_url("http://127.0.0.1:1234/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:1234/robots-txts");
    }

    #[tokio::test]
    async fn test_fetch_posts_json_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/robots-txts")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "agent_types": ["AI Data Scraper", "Undocumented AI Agent"],
                "disallow": "/"
            })))
            .with_status(200)
            .with_body("User-agent: GPTBot\nDisallow: /\n")
            .create_async()
            .await;

        let client = DarkVisitorsClient::with_base_url(server.url());
        let result = client
            .fetch(
                &Credential::new("test-token"),
                &[
                    "AI Data Scraper".to_string(),
                    "Undocumented AI Agent".to_string(),
                ],
                "/",
            )
            .await
            .expect("Request should succeed");

        assert!(result.is_success());
        assert_eq!(result.body, "User-agent: GPTBot\nDisallow: /\n");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_returns_error_status_without_failing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/robots-txts")
            .with_status(401)
            .with_body("unauthorized")
            .create_async()
            .await;

        let client = DarkVisitorsClient::with_base_url(server.url());
        let result = client
            .fetch(&Credential::new("bad"), &["AI Data Scraper".to_string()], "/")
            .await
            .expect("A 401 is still a response");

        assert_eq!(result.status_code, 401);
        assert_eq!(result.body, "unauthorized");
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let client = DarkVisitorsClient::with_base_url("http://127.0.0.1:9");
        let err = client
            .fetch(&Credential::new("t"), &["AI Data Scraper".to_string()], "/")
            .await
            .unwrap_err();

        assert!(err.is_remote());
        assert!(matches!(err, crate::error::Error::Transport(_)));
    }
}
