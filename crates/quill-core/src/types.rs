use crate::QuillError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of variants produced for every optimization request.
pub const VARIANT_COUNT: usize = 3;

/// A named rewrite strategy selecting which three transformation rules apply.
///
/// The set is closed: adding a style is a compile-time extension point, and
/// an unrecognized tag is a validation error, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Creative,
    Precise,
    Fast,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Creative, Style::Precise, Style::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Creative => "creative",
            Style::Precise => "precise",
            Style::Fast => "fast",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "creative" => Ok(Style::Creative),
            "precise" => Ok(Style::Precise),
            "fast" => Ok(Style::Fast),
            other => Err(QuillError::invalid(format!(
                "style must be one of: creative, precise, fast (got {other:?})"
            ))),
        }
    }
}

/// Exactly three rewritten forms of a prompt, in rule order.
///
/// Order is meaningful: index 0/1/2 correspond to the style's first, second,
/// and third rewrite rule. Variants are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    pub style: Style,
    pub variants: [String; VARIANT_COUNT],
}

impl VariantSet {
    pub fn as_slice(&self) -> &[String] {
        &self.variants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.variants.iter()
    }
}

/// Per-metric breakdown of a composite prompt score. Each value is in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub keyword: f64,
    pub clarity: f64,
}

/// Composite score in [0.0, 1.0] together with its sub-metric breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
