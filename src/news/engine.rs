use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;
use tracing::{info, warn};

use super::article::{AnalysisResponse, EnrichedArticle};
use super::enrich::enrich_result;
use super::query;
use crate::exa::{SearchProvider, SearchResult};
use crate::llm::ChatModel;

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("enrichment aborted: {0}")]
    Aborted(String),
}

impl EnrichError {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        EnrichError::Aborted(message)
    }
}

/// Search + per-result enrichment, owning the clients it talks to.
pub struct NewsAnalyzer<S, M> {
    search: S,
    model: M,
}

impl<S, M> NewsAnalyzer<S, M>
where
    S: SearchProvider + Sync,
    M: ChatModel + Sync,
{
    pub fn new(search: S, model: M) -> Self {
        Self { search, model }
    }

    /// Latest news on `topic` in `region`, each article summarized by the model.
    pub async fn analyze_topic(&self, topic: &str, region: &str) -> AnalysisResponse {
        let request = query::topic_request(topic, region);

        let results = match self.search.search(&request).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query = %request.query, error = %e, "search failed");
                return AnalysisResponse::error(format!("Request processing error: {e}"));
            }
        };

        if results.is_empty() {
            let message = format!("No search results for: '{}'.", request.query);
            warn!("{message}");
            return AnalysisResponse::error(message);
        }

        let articles = self.enrich_all(&results).await;
        if articles.is_empty() {
            warn!(query = %request.query, "no articles processed successfully");
            return AnalysisResponse::error("No articles processed successfully.");
        }

        info!(
            query = %request.query,
            results = results.len(),
            articles = articles.len(),
            "topic analysis complete"
        );
        AnalysisResponse::success(articles)
    }

    /// Enriches every result concurrently. One outcome slot per result, in input order;
    /// aborted slots are logged and dropped without disturbing their siblings.
    pub async fn enrich_all(&self, results: &[SearchResult]) -> Vec<EnrichedArticle> {
        let slots: Vec<Result<EnrichedArticle, EnrichError>> =
            join_all(results.iter().map(|result| async move {
                AssertUnwindSafe(enrich_result(&self.search, &self.model, result))
                    .catch_unwind()
                    .await
                    .map_err(EnrichError::from_panic)
            }))
            .await;

        slots
            .into_iter()
            .zip(results)
            .filter_map(|(slot, result)| match slot {
                Ok(article) => Some(article),
                Err(e) => {
                    warn!(id = %result.id, error = %e, "dropping result");
                    None
                }
            })
            .collect()
    }
}
