use crate::clarity::clarity_score;
use crate::keyword::keyword_score;
use crate::length::length_score;
use quill_core::{QuillError, ScoreBreakdown, ScoreResult};
use quill_text::Tokenizer;

/// Default weight of the length sub-metric.
const W_LENGTH: f64 = 0.4;
/// Default weight of the keyword-preservation sub-metric.
const W_KEYWORD: f64 = 0.3;
/// Default weight of the clarity sub-metric.
const W_CLARITY: f64 = 0.3;

/// Composite scores are rounded to two decimal places for reproducibility.
const ROUND_FACTOR: f64 = 100.0;

/// Weighted composite scorer over the three sub-metrics.
///
/// Weights default to length 0.4, keyword 0.3, clarity 0.3 and always sum
/// to 1.0.
pub struct PromptScorer {
    w_length: f64,
    w_keyword: f64,
    w_clarity: f64,
}

impl PromptScorer {
    pub fn new() -> Self {
        Self {
            w_length: W_LENGTH,
            w_keyword: W_KEYWORD,
            w_clarity: W_CLARITY,
        }
    }

    /// Set custom weights. They will be normalized to sum to 1.0.
    pub fn weights(mut self, length: f64, keyword: f64, clarity: f64) -> Self {
        let total = length + keyword + clarity;
        if total > 0.0 {
            self.w_length = length / total;
            self.w_keyword = keyword / total;
            self.w_clarity = clarity / total;
        }
        self
    }

    /// Score `improved_prompt` against `raw_prompt`.
    ///
    /// Both inputs are trimmed first; either being empty after trimming fails
    /// with `InvalidArgument`. The composite is rounded to two decimal places
    /// and clamped to [0.0, 1.0].
    pub fn score(&self, raw_prompt: &str, improved_prompt: &str) -> Result<ScoreResult, QuillError> {
        let raw = raw_prompt.trim();
        let improved = improved_prompt.trim();
        if raw.is_empty() {
            return Err(QuillError::invalid("raw_prompt must not be empty"));
        }
        if improved.is_empty() {
            return Err(QuillError::invalid("improved_prompt must not be empty"));
        }

        let raw_tokens = Tokenizer::tokenize(raw).len();
        let improved_tokens = Tokenizer::tokenize(improved).len();

        let breakdown = ScoreBreakdown {
            length: length_score(raw_tokens, improved_tokens),
            keyword: keyword_score(raw, improved),
            clarity: clarity_score(raw, improved),
        };

        let weighted = self.w_length * breakdown.length
            + self.w_keyword * breakdown.keyword
            + self.w_clarity * breakdown.clarity;
        let score = round2(weighted).clamp(0.0, 1.0);

        Ok(ScoreResult { score, breakdown })
    }
}

impl Default for PromptScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score with the default weights.
pub fn score_prompt(raw_prompt: &str, improved_prompt: &str) -> Result<ScoreResult, QuillError> {
    PromptScorer::new().score(raw_prompt, improved_prompt)
}

fn round2(value: f64) -> f64 {
    (value * ROUND_FACTOR).round() / ROUND_FACTOR
}
