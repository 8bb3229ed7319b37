//! Deterministic prompt rewriting.
//!
//! Each style defines exactly three pure rewrite rules; the same prompt and
//! style always produce the same three variants in the same order.

mod creative;
mod fast;
mod precise;
mod words;

use quill_core::{QuillError, Style, VariantSet};

/// Generate exactly three rewritten variants of `raw_prompt` in the given style.
///
/// The prompt is trimmed first; a prompt that is empty after trimming fails
/// with `InvalidArgument`. Variants are not deduplicated and are never empty.
pub fn optimize_prompt(raw_prompt: &str, style: Style) -> Result<VariantSet, QuillError> {
    let prompt = raw_prompt.trim();
    if prompt.is_empty() {
        return Err(QuillError::invalid("raw_prompt must not be empty"));
    }

    let variants = match style {
        Style::Creative => creative::variants(prompt),
        Style::Precise => precise::variants(prompt),
        Style::Fast => fast::variants(prompt),
    };

    Ok(VariantSet { style, variants })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "Please write a very detailed explanation about machine learning";

    #[test]
    fn every_style_returns_three_nonempty_variants() {
        for style in Style::ALL {
            let set = optimize_prompt(PROMPT, style).unwrap();
            assert_eq!(set.style, style);
            assert_eq!(set.as_slice().len(), 3);
            for variant in set.iter() {
                assert!(!variant.is_empty(), "{style}: empty variant");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for style in Style::ALL {
            let first = optimize_prompt(PROMPT, style).unwrap();
            let second = optimize_prompt(PROMPT, style).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn empty_prompt_is_rejected() {
        for style in Style::ALL {
            assert!(matches!(
                optimize_prompt("", style),
                Err(QuillError::InvalidArgument(_))
            ));
            assert!(matches!(
                optimize_prompt("   \t\n", style),
                Err(QuillError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn prompt_is_trimmed_before_rewriting() {
        let padded = optimize_prompt("  Write a story  ", Style::Creative).unwrap();
        let bare = optimize_prompt("Write a story", Style::Creative).unwrap();
        assert_eq!(padded, bare);
    }

    #[test]
    fn creative_story_prompt_gets_stronger_verb_and_framing() {
        let set = optimize_prompt("Write a story about a cat", Style::Creative).unwrap();
        assert!(set.variants[0].starts_with("Craft"));
        assert!(set.variants[1].contains("Imagine you're an expert in this field."));
    }

    #[test]
    fn precise_prompt_loses_fillers_and_gains_structure() {
        let set = optimize_prompt(PROMPT, Style::Precise).unwrap();
        assert!(!set.variants[0].contains("Please"));
        assert!(!set.variants[0].contains("very"));
        assert!(set.variants[1].starts_with("• "));
        assert!(set.variants[2].ends_with("Be specific and concise."));
    }

    #[test]
    fn single_word_prompt_survives_every_style() {
        for style in Style::ALL {
            let set = optimize_prompt("hello", style).unwrap();
            for variant in set.iter() {
                assert!(!variant.is_empty());
            }
        }
    }

    #[test]
    fn non_ascii_prompt_is_handled() {
        let set = optimize_prompt("écris une histoire sur un chat", Style::Fast).unwrap();
        assert_eq!(set.as_slice().len(), 3);
        for variant in set.iter() {
            assert!(!variant.is_empty());
        }
    }

    #[test]
    fn long_prompt_is_handled() {
        let long = "word ".repeat(1000);
        let set = optimize_prompt(&long, Style::Fast).unwrap();
        // truncation rule keeps the leading 12 words
        assert_eq!(set.variants[1].split_whitespace().count(), 12);
    }
}
