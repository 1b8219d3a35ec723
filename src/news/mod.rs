//! News analysis: query dispatch, concurrent per-result enrichment, aggregation, and reports.

mod article;
pub mod domain;
mod engine;
mod enrich;
pub mod query;
pub mod report;

pub use article::{AnalysisResponse, EnrichedArticle, Sentiment, Status};
pub use engine::NewsAnalyzer;
