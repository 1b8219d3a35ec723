//! Exa search API: ranked search and per-document content retrieval.

pub mod client;
pub mod types;

pub use client::{ExaClient, ExaError, SearchProvider};
pub use types::SearchResult;
