use crate::words;

/// Long word → shorter equivalent. Every entry is applied.
const SHORT_SYNONYMS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "use"),
    ("demonstrate", "show"),
    ("illustrate", "show"),
    ("elaborate", "explain"),
    ("comprehensive", "complete"),
    ("subsequently", "then"),
    ("furthermore", "also"),
    ("additionally", "also"),
    ("nevertheless", "but"),
];

/// Maximum number of leading words kept by the truncation rule.
const MAX_TOKENS: usize = 12;

/// Connectives dropped by the third rule.
const REDUNDANT_CONNECTIVES: &[&str] = &[
    "additionally",
    "consequently",
    "furthermore",
    "however",
    "moreover",
    "nevertheless",
    "nonetheless",
    "subsequently",
];

pub(crate) fn variants(prompt: &str) -> [String; 3] {
    [shorten(prompt), truncate(prompt), tighten(prompt)]
}

/// Replace every long synonym with its shorter equivalent.
fn shorten(prompt: &str) -> String {
    SHORT_SYNONYMS
        .iter()
        .fold(prompt.to_string(), |text, (long, short)| {
            words::replace_word(&text, long, short)
        })
}

/// Keep the first `MAX_TOKENS` words. A no-op for shorter prompts.
fn truncate(prompt: &str) -> String {
    let words: Vec<&str> = prompt.split_whitespace().collect();
    if words.len() <= MAX_TOKENS {
        words.join(" ")
    } else {
        words[..MAX_TOKENS].join(" ")
    }
}

/// Collapse repeated whitespace and drop redundant connectives.
fn tighten(prompt: &str) -> String {
    words::strip_words(prompt, REDUNDANT_CONNECTIVES)
}
