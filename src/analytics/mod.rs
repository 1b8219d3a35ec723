//! Local, deterministic text analytics over already-fetched snippets: keyword sentiment,
//! policy/country tallies, rendered as ASCII bar charts.

pub mod chart;
mod entities;
mod lexicon;
mod sentiment;

use chart::{DEFAULT_MAX_BAR, FrequencyTable, render_bar_chart};
pub use sentiment::SentimentBucket;

#[derive(Debug, Clone)]
pub struct TextAnalytics {
    pub sentiment: FrequencyTable,
    pub policies: FrequencyTable,
    pub countries: FrequencyTable,
    pub documents: usize,
}

pub fn analyze<'a>(texts: impl IntoIterator<Item = &'a str>) -> TextAnalytics {
    let texts: Vec<&str> = texts.into_iter().filter(|t| !t.trim().is_empty()).collect();

    let mut sentiment: FrequencyTable = SentimentBucket::ALL
        .iter()
        .map(|bucket| (bucket.label(), 0))
        .collect();
    for text in &texts {
        sentiment.add(sentiment::classify(text).label());
    }

    TextAnalytics {
        documents: sentiment.total(),
        policies: entities::tally_policies(texts.iter().copied()),
        countries: entities::tally_countries(texts.iter().copied()),
        sentiment,
    }
}

/// Markdown section with one chart per table.
pub fn render_section(analytics: &TextAnalytics) -> String {
    let mut out = String::from("## Text Analytics\n\n");
    out.push_str(&format!(
        "Keyword heuristics over {} excerpt(s).\n\n```\n",
        analytics.documents
    ));
    out.push_str(&render_bar_chart(
        "Sentiment distribution",
        &analytics.sentiment,
        DEFAULT_MAX_BAR,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Policies mentioned",
        &analytics.policies,
        DEFAULT_MAX_BAR,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Countries mentioned",
        &analytics.countries,
        DEFAULT_MAX_BAR,
    ));
    out.push_str("```\n");
    out
}
