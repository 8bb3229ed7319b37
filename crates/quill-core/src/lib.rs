//! Quill core domain types and errors.

mod error;
mod types;

pub use error::QuillError;
pub use types::{ScoreBreakdown, ScoreResult, Style, VariantSet, VARIANT_COUNT};
