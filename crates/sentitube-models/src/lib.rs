//! Shared data models for the SentiTube backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video identifiers and URL parsing
//! - Sentiment labels
//! - Per-comment result rows and aggregated summaries

pub mod sentiment;
pub mod summary;
pub mod video;

// Re-export common types
pub use sentiment::SentimentLabel;
pub use summary::{ResultRow, SentimentSummary};
pub use video::{extract_video_id, VideoId, VIDEO_ID_LEN};
