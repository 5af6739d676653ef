//! Analysis pipeline handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use sentitube_models::{extract_video_id, SentimentSummary};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Analyze request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Analyze response: everything the frontend needs for the metric display,
/// the pie chart, and the table.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub video_id: String,
    #[serde(flatten)]
    pub summary: SentimentSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Run the full pipeline for one URL: extract the ID, fetch the comments,
/// classify them, aggregate.
///
/// Every stage halts the request on failure; no partial results are
/// returned. A video with zero comments is a success with a warning, not
/// an error.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let video_id = extract_video_id(&request.url).ok_or_else(|| {
        ApiError::invalid_url("could not extract a video ID from the URL")
    })?;

    let comments = state.comments.fetch(&video_id).await?;

    if comments.is_empty() {
        info!("no comments for video {}", video_id);
        return Ok(Json(AnalyzeResponse {
            video_id: video_id.to_string(),
            summary: SentimentSummary::empty(),
            warning: Some("No comments found for this video.".to_string()),
        }));
    }

    let labels = state.gemini.classify(&comments).await?;
    let summary = SentimentSummary::build(comments, labels);

    info!(
        "analyzed {} comments for video {}",
        summary.total, video_id
    );

    Ok(Json(AnalyzeResponse {
        video_id: video_id.to_string(),
        summary,
        warning: None,
    }))
}
