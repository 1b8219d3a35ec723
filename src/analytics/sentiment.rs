use super::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

/// Five-step scale derived from the net keyword score of one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBucket {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentBucket {
    pub const ALL: [SentimentBucket; 5] = [
        SentimentBucket::VeryPositive,
        SentimentBucket::Positive,
        SentimentBucket::Neutral,
        SentimentBucket::Negative,
        SentimentBucket::VeryNegative,
    ];

    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=-2 => SentimentBucket::VeryNegative,
            -1 => SentimentBucket::Negative,
            0 => SentimentBucket::Neutral,
            1 => SentimentBucket::Positive,
            _ => SentimentBucket::VeryPositive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBucket::VeryPositive => "Very Positive",
            SentimentBucket::Positive => "Positive",
            SentimentBucket::Neutral => "Neutral",
            SentimentBucket::Negative => "Negative",
            SentimentBucket::VeryNegative => "Very Negative",
        }
    }
}

/// Positive minus negative whole-word hits, case-insensitive.
pub fn keyword_score(text: &str) -> i32 {
    let mut score = 0;
    for word in text
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
    {
        let word = word.to_lowercase();
        if POSITIVE_WORDS.contains(&word.as_str()) {
            score += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            score -= 1;
        }
    }
    score
}

pub fn classify(text: &str) -> SentimentBucket {
    SentimentBucket::from_score(keyword_score(text))
}
