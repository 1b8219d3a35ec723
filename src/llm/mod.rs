//! OpenAI-compatible chat completions in JSON mode, plus the article analysis built on them.

pub mod analysis;
pub mod client;
pub mod types;

pub use analysis::analyze_article;
pub use client::{ChatModel, OpenAiClient};
