//! HTTP clients for the two external collaborators: the comment-fetch
//! worker and the Gemini model service.
//!
//! Both clients take an explicit config struct built at startup; nothing
//! here reads globals at call time.

pub mod comments;
pub mod error;
pub mod gemini;

pub use comments::{CommentsClient, CommentsConfig};
pub use error::{ClassifyError, FetchError};
pub use gemini::{GeminiClient, GeminiConfig};
