use quill_text::{normalize_word, split_sentences};

/// Filler words stripped by the first rule.
const FILLER_WORDS: &[&str] = &[
    "actually", "just", "please", "quite", "really", "simply", "very",
];

/// Two-word filler phrases stripped alongside `FILLER_WORDS`.
const FILLER_PHRASES: &[[&str; 2]] = &[["kind", "of"], ["sort", "of"]];

/// Bullet marker used by the second rule.
const BULLET: &str = "• ";

/// Instruction suffix appended by the third rule.
const PRECISE_SUFFIX: &str = " Be specific and concise.";

pub(crate) fn variants(prompt: &str) -> [String; 3] {
    [
        strip_fillers(prompt),
        bullet_variant(prompt),
        format!("{prompt}{PRECISE_SUFFIX}"),
    ]
}

/// Remove filler words and phrases from the word sequence and rejoin.
/// Falls back to the original prompt when everything would be removed.
fn strip_fillers(prompt: &str) -> String {
    let words: Vec<&str> = prompt.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());

    let mut i = 0;
    while i < words.len() {
        if i + 1 < words.len() && is_filler_phrase(words[i], words[i + 1]) {
            i += 2;
            continue;
        }
        if FILLER_WORDS.contains(&normalize_word(words[i]).as_str()) {
            i += 1;
            continue;
        }
        kept.push(words[i]);
        i += 1;
    }

    if kept.is_empty() {
        prompt.to_string()
    } else {
        kept.join(" ")
    }
}

fn is_filler_phrase(first: &str, second: &str) -> bool {
    FILLER_PHRASES
        .iter()
        .any(|[a, b]| normalize_word(first) == *a && normalize_word(second) == *b)
}

/// One bullet per sentence for multi-sentence prompts, otherwise a single
/// bullet prefix.
fn bullet_variant(prompt: &str) -> String {
    let sentences = split_sentences(prompt);
    if sentences.len() >= 2 {
        format!("{BULLET}{}", sentences.join(&format!("\n{BULLET}")))
    } else {
        format!("{BULLET}{prompt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filler_words() {
        let [first, _, _] =
            variants("Please write a very detailed explanation about machine learning");
        assert_eq!(first, "write a detailed explanation about machine learning");
    }

    #[test]
    fn strips_filler_phrases() {
        let [first, _, _] = variants("this is kind of a sort of rough idea");
        assert_eq!(first, "this is a rough idea");
    }

    #[test]
    fn filler_stripping_falls_back_to_original() {
        let [first, _, _] = variants("please");
        assert_eq!(first, "please");
    }

    #[test]
    fn single_sentence_gets_bullet_prefix() {
        let [_, second, _] = variants("Write an explanation");
        assert_eq!(second, "• Write an explanation");
    }

    #[test]
    fn multi_sentence_gets_bullet_per_sentence() {
        let [_, second, _] = variants("Define the term. Give an example.");
        assert_eq!(second, "• Define the term\n• Give an example");
    }

    #[test]
    fn third_variant_appends_instruction_suffix() {
        let [_, _, third] = variants("Summarize the report");
        assert_eq!(third, "Summarize the report Be specific and concise.");
    }

    #[test]
    fn third_variant_ends_with_suffix() {
        let [_, _, third] = variants("Summarize the report.");
        assert!(third.ends_with("Be specific and concise."));
    }
}
