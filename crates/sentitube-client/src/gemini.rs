//! Gemini client for batch sentiment classification.
//!
//! One prompt per batch, one label line per comment in input order. The
//! model is not contractually bound to return the requested number of
//! lines, so [`align_labels`] repairs short and long responses before the
//! labels ever leave this module.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use sentitube_models::SentimentLabel;

use crate::error::ClassifyError;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_MAX_BATCH: usize = 100;

/// Configuration for [`GeminiClient`], built at startup and passed in.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; mandatory, checked at construction.
    pub api_key: String,
    /// API base, overridable so tests can point at a mock server.
    pub endpoint: String,
    pub model: String,
    /// Comments per request; larger inputs are split and reassembled.
    pub max_batch: usize,
}

impl GeminiConfig {
    /// Read the mandatory API key and optional overrides from the
    /// environment. A missing key is a startup failure.
    pub fn from_env() -> Result<Self, ClassifyError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ClassifyError::MissingApiKey)?;
        Ok(Self {
            api_key,
            endpoint: std::env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_batch: std::env::var("GEMINI_MAX_BATCH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BATCH),
        })
    }
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Gemini API response.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Gemini API client for sentiment classification.
#[derive(Debug)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new client. Fails when the key is absent or empty.
    pub fn new(config: GeminiConfig) -> Result<Self, ClassifyError> {
        if config.api_key.is_empty() {
            return Err(ClassifyError::MissingApiKey);
        }
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Classify every comment, returning one label per comment in input
    /// order.
    ///
    /// Comments go to the model in batches of `max_batch`, each batch one
    /// request, realigned independently and reassembled in order. The
    /// output length always equals the input length on success; a failed
    /// request fails the whole call with no retry.
    pub async fn classify(
        &self,
        comments: &[String],
    ) -> Result<Vec<SentimentLabel>, ClassifyError> {
        let mut labels = Vec::with_capacity(comments.len());
        for batch in comments.chunks(self.config.max_batch.max(1)) {
            let text = self.generate(&build_prompt(batch)).await?;
            labels.extend(align_labels(&text, batch.len()));
        }
        Ok(labels)
    }

    /// One `generateContent` call; returns the first candidate's text.
    async fn generate(&self, prompt: &str) -> Result<String, ClassifyError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Status { status, detail });
        }

        let body: GeminiResponse = response.json().await?;

        body.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(ClassifyError::EmptyResponse)
    }
}

/// Build the one-label-per-line prompt for a batch of comments.
fn build_prompt(comments: &[String]) -> String {
    let mut prompt = String::from(
        "Classify each YouTube comment below as Positive, Neutral, or Negative. \
         Return the labels in the same order, one per line.\n\n",
    );
    for comment in comments {
        prompt.push_str("- ");
        prompt.push_str(comment);
        prompt.push('\n');
    }
    prompt
}

/// Align raw model output to a batch of `expected` comments.
///
/// Splits into lines, drops blank lines, trims the rest. Short output is
/// padded at the end with Neutral; excess lines past `expected` are
/// dropped, since positions beyond the input have nothing to align to.
fn align_labels(text: &str, expected: usize) -> Vec<SentimentLabel> {
    let mut labels: Vec<SentimentLabel> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(SentimentLabel::from)
        .collect();

    if labels.len() != expected {
        warn!(
            "model returned {} labels for {} comments, realigning",
            labels.len(),
            expected
        );
        labels.truncate(expected);
        labels.resize(expected, SentimentLabel::Neutral);
    }

    labels
}
