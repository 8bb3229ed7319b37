//! Prompt effectiveness scoring.
//!
//! Three sub-metrics (length, keyword preservation, clarity) combined by
//! fixed weights into a composite score in [0.0, 1.0].

mod clarity;
mod composite;
mod keyword;
mod length;

pub use clarity::clarity_score;
pub use composite::{score_prompt, PromptScorer};
pub use keyword::keyword_score;
pub use length::length_score;
