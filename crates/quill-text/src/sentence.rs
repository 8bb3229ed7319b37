/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Segments are trimmed; empty segments are dropped. Text without any
/// terminator comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
