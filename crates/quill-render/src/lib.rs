//! JSON and human-readable output rendering for optimization and scoring
//! results.

mod report;

pub use report::{ScoreWriter, VariantWriter};
