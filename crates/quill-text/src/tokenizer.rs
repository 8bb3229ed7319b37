use std::collections::HashSet;

/// Prompt tokenizer: splits on whitespace, strips edge punctuation,
/// and normalizes to lowercase.
pub struct Tokenizer;

/// Words excluded from keyword sets: articles and determiners, common
/// prepositions, auxiliary and copula verbs, common pronouns, and politeness
/// fillers. Content verbs ("write", "explain") are deliberately kept.
/// Must stay sorted: lookup is a binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "actually", "after", "against", "am", "an", "and", "any",
    "are", "as", "at", "be", "been", "being", "below", "between", "but", "by", "can", "could",
    "did", "do", "does", "down", "during", "each", "every", "for", "from", "had", "has", "have",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "may", "me", "might", "must", "my",
    "near", "no", "not", "of", "off", "on", "onto", "or", "our", "out", "over", "please", "quite",
    "really", "shall", "should", "simply", "so", "some", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "under", "up", "us",
    "very", "was", "we", "were", "what", "when", "which", "who", "will", "with", "without",
    "would", "you", "your",
];

impl Tokenizer {
    /// Tokenize a string into normalized word tokens.
    ///
    /// Splits on Unicode whitespace only; non-ASCII words are opaque tokens.
    /// Tokens that are pure punctuation are dropped.
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split_whitespace()
            .filter_map(|word| {
                let normalized = normalize_word(word);
                if normalized.is_empty() {
                    None
                } else {
                    Some(normalized)
                }
            })
            .collect()
    }

    /// Content-bearing tokens of a prompt: the token set minus stopwords.
    pub fn keyword_set(input: &str) -> HashSet<String> {
        Self::tokenize(input)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }
}

/// Normalize a single word: strip leading/trailing non-alphanumeric
/// characters and lowercase. Interior punctuation (apostrophes, hyphens)
/// is preserved.
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
