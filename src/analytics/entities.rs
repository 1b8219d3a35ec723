use std::sync::LazyLock;

use regex::Regex;

use super::chart::FrequencyTable;
use super::lexicon::{COUNTRIES, KNOWN_POLICIES, POLICY_SUFFIXES};

static KNOWN_POLICY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(KNOWN_POLICIES)))
        .expect("known policy pattern is valid")
});

/// Capitalized phrase ending in a policy noun, e.g. "Climate Change Act".
static POLICY_PHRASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = POLICY_SUFFIXES.join("|");
    Regex::new(&format!(
        r"\b(?:[A-Z][A-Za-z0-9'-]*\s+){{1,5}}(?:{suffixes})\b"
    ))
    .expect("policy phrase pattern is valid")
});

static COUNTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", alternation(COUNTRIES))).expect("country pattern is valid")
});

const LEADING_ARTICLES: &[&str] = &["The ", "A ", "An ", "This ", "That ", "New "];

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

/// Listed spelling of a known policy name.
fn known_label(matched: &str) -> String {
    KNOWN_POLICIES
        .iter()
        .find(|k| k.eq_ignore_ascii_case(matched))
        .map_or_else(|| matched.to_string(), |k| (*k).to_string())
}

/// Phrase without leading articles; `None` when only the policy noun is left.
fn phrase_label(matched: &str) -> Option<String> {
    let mut label = matched.trim();
    while let Some(rest) = LEADING_ARTICLES.iter().find_map(|a| label.strip_prefix(a)) {
        label = rest.trim_start();
    }
    (label.split_whitespace().count() > 1).then(|| label.to_string())
}

/// Policy mentions in text order. Known names are matched first, and a phrase
/// overlapping one of them is not counted again.
fn policy_mentions(text: &str) -> Vec<String> {
    let known: Vec<(usize, usize, String)> = KNOWN_POLICY_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end(), known_label(m.as_str())))
        .collect();

    let phrases = POLICY_PHRASE_PATTERN
        .find_iter(text)
        .filter(|m| !known.iter().any(|(start, end, _)| m.start() < *end && *start < m.end()))
        .filter_map(|m| phrase_label(m.as_str()).map(|label| (m.start(), m.end(), label)));

    let mut mentions: Vec<(usize, usize, String)> = known.iter().cloned().chain(phrases).collect();
    mentions.sort_by_key(|(start, _, _)| *start);
    mentions.into_iter().map(|(_, _, label)| label).collect()
}

pub fn tally_policies<'a>(texts: impl IntoIterator<Item = &'a str>) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for text in texts {
        for label in policy_mentions(text) {
            table.add(&label);
        }
    }
    table
}

pub fn tally_countries<'a>(texts: impl IntoIterator<Item = &'a str>) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for text in texts {
        for m in COUNTRY_PATTERN.find_iter(text) {
            table.add(m.as_str());
        }
    }
    table
}
