//! Client for the comment-fetch worker.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use sentitube_models::VideoId;

use crate::error::FetchError;

const DEFAULT_BASE_URL: &str = "https://yt-comments.example.workers.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for [`CommentsClient`], built at startup and passed in.
#[derive(Debug, Clone)]
pub struct CommentsConfig {
    /// Base URL of the worker; the video ID goes in the query string.
    pub base_url: String,
    /// Whole-request timeout for the single GET.
    pub timeout: Duration,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CommentsConfig {
    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("COMMENTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("COMMENTS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// Client for the worker that returns a video's comments as JSON.
pub struct CommentsClient {
    config: CommentsConfig,
    client: Client,
}

impl CommentsClient {
    /// Create a new client with the timeout applied to every request.
    pub fn new(config: CommentsConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Fetch the comments for one video.
    ///
    /// Exactly one `GET {base}?videoId={id}`; no retry, no pagination, no
    /// caching. A non-success status is a [`FetchError::Status`] carrying
    /// the body for the user to see. A body without a `comments` array of
    /// strings yields an empty list, not a failure.
    pub async fn fetch(&self, id: &VideoId) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("videoId", id.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, detail });
        }

        let body: serde_json::Value = response.json().await?;
        let comments: Vec<String> = body
            .get("comments")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|c| c.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        debug!("fetched {} comments for video {}", comments.len(), id);

        Ok(comments)
    }
}
