use quill_text::normalize_word;

/// True when any whitespace-delimited word of `text` normalizes to `word`.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    text.split_whitespace()
        .any(|w| normalize_word(w) == word)
}

/// Replace every whole-word occurrence of `from` with `to`.
///
/// Edge punctuation of the replaced word is kept, and the replacement is
/// capitalized when the replaced word was. Words are rejoined with single
/// spaces.
pub(crate) fn replace_word(text: &str, from: &str, to: &str) -> String {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            if normalize_word(w) == from {
                rebuild(w, to)
            } else {
                w.to_string()
            }
        })
        .collect();
    words.join(" ")
}

/// Drop words whose normalized form is in `list`, rejoining with single
/// spaces. Falls back to the original text when every word would be removed.
pub(crate) fn strip_words(text: &str, list: &[&str]) -> String {
    let kept: Vec<&str> = text
        .split_whitespace()
        .filter(|w| !list.contains(&normalize_word(w).as_str()))
        .collect();
    if kept.is_empty() {
        text.to_string()
    } else {
        kept.join(" ")
    }
}

/// Swap the alphanumeric core of `original` for `replacement`, keeping any
/// leading/trailing punctuation.
fn rebuild(original: &str, replacement: &str) -> String {
    let core_start = original
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(0);
    let core_end = original
        .rfind(|c: char| c.is_alphanumeric())
        .map(|i| {
            // rfind returns the byte offset of the last alphanumeric char;
            // extend past it to keep the full character
            i + original[i..].chars().next().map_or(1, char::len_utf8)
        })
        .unwrap_or(original.len());

    let core = &original[core_start..core_end];
    let replaced = if core.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    };

    format!(
        "{}{}{}",
        &original[..core_start],
        replaced,
        &original[core_end..]
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
