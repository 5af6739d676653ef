//! Application state.

use std::sync::Arc;

use sentitube_client::{CommentsClient, CommentsConfig, GeminiClient, GeminiConfig};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub comments: Arc<CommentsClient>,
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    /// Create new application state, constructing both outbound clients
    /// from their startup configuration. Fails when the model API key is
    /// absent, so a misconfigured process never starts serving.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let comments = CommentsClient::new(CommentsConfig::from_env())?;
        let gemini = GeminiClient::new(GeminiConfig::from_env()?)?;

        Ok(Self {
            config,
            comments: Arc::new(comments),
            gemini: Arc::new(gemini),
        })
    }

    /// State with externally supplied clients; used by tests to point both
    /// collaborators at mock servers.
    pub fn with_clients(
        config: ApiConfig,
        comments: CommentsClient,
        gemini: GeminiClient,
    ) -> Self {
        Self {
            config,
            comments: Arc::new(comments),
            gemini: Arc::new(gemini),
        }
    }
}
