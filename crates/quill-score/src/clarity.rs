use quill_text::Tokenizer;
use std::collections::HashSet;

/// Neutral clarity score when either prompt has no tokens.
const NEUTRAL_SCORE: f64 = 0.5;

/// Redundancy proxy: compares the unique/total token ratio of both prompts,
/// rewarding improvement.
///
/// `0.5 + (improved_ratio - raw_ratio)`, clamped to [0.0, 1.0]. Equal
/// redundancy scores the neutral 0.5, as does any zero-token degenerate input.
pub fn clarity_score(raw: &str, improved: &str) -> f64 {
    match (unique_ratio(raw), unique_ratio(improved)) {
        (Some(raw_ratio), Some(improved_ratio)) => {
            (NEUTRAL_SCORE + (improved_ratio - raw_ratio)).clamp(0.0, 1.0)
        }
        _ => NEUTRAL_SCORE,
    }
}

fn unique_ratio(text: &str) -> Option<f64> {
    let tokens = Tokenizer::tokenize(text);
    if tokens.is_empty() {
        return None;
    }
    let unique: HashSet<&String> = tokens.iter().collect();
    Some(unique.len() as f64 / tokens.len() as f64)
}
