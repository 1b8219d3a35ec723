use tracing::{debug, warn};

use super::article::{EnrichedArticle, Sentiment};
use super::domain::{UNKNOWN_SOURCE, source_domain};
use crate::exa::{SearchProvider, SearchResult};
use crate::llm::{ChatModel, analyze_article};

const MISSING: &str = "N/A";

/// Retrieves text for one result and runs the model analysis over it.
pub async fn enrich_result(
    search: &impl SearchProvider,
    model: &impl ChatModel,
    result: &SearchResult,
) -> EnrichedArticle {
    let headline = result
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| MISSING.to_string());

    let Some(url) = result.url.as_deref().filter(|u| !u.trim().is_empty()) else {
        debug!(id = %result.id, "result has no URL; skipping analysis");
        return EnrichedArticle {
            headline,
            url: MISSING.to_string(),
            source_domain: UNKNOWN_SOURCE.to_string(),
            full_text: Some("URL missing, content not retrieved.".to_string()),
            summary: MISSING.to_string(),
            sentiment: Sentiment::NotAvailable,
            source_background: MISSING.to_string(),
            analysis_error: None,
        };
    };

    let domain = source_domain(url);
    let full_text = resolve_text(search, result).await;

    let analysis = analyze_article(
        model,
        full_text.as_deref(),
        Some(headline.as_str()),
        Some(domain.as_str()),
    )
    .await;

    EnrichedArticle {
        headline,
        url: url.to_string(),
        source_domain: domain,
        full_text,
        summary: analysis.summary,
        sentiment: analysis.sentiment,
        source_background: analysis.source_background,
        analysis_error: analysis.error,
    }
}

/// Full contents, then the inline snippet, then the joined highlights.
async fn resolve_text(search: &impl SearchProvider, result: &SearchResult) -> Option<String> {
    match search.contents(&result.id).await {
        Ok(Some(text)) => return Some(text),
        Ok(None) => debug!(id = %result.id, "no contents returned; using inline text"),
        Err(e) => warn!(id = %result.id, error = %e, "content retrieval failed; using inline text"),
    }

    result
        .text
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            let highlights = result.highlights.as_ref()?;
            let joined = highlights.join(" ");
            (!joined.trim().is_empty()).then_some(joined)
        })
}
