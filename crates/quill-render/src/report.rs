use quill_core::{ScoreResult, VariantSet};
use serde::Serialize;
use std::io::Write;

/// Renders a `VariantSet` as pretty JSON or numbered plain text.
pub struct VariantWriter {
    prompt: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct VariantReport<'a> {
    prompt: &'a str,
    style: &'a str,
    variants: &'a [String],
}

impl VariantWriter {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
        }
    }

    /// Render as pretty JSON.
    pub fn render_json(&self, set: &VariantSet) -> anyhow::Result<String> {
        let report = VariantReport {
            prompt: &self.prompt,
            style: set.style.as_str(),
            variants: set.as_slice(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Render as numbered plain text: `Variant N: …` blocks separated by
    /// blank lines.
    pub fn render_text(&self, set: &VariantSet) -> String {
        set.iter()
            .enumerate()
            .map(|(i, variant)| format!("Variant {}: {variant}", i + 1))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Write the JSON form to a writer, newline-terminated.
    pub fn write_json(&self, writer: &mut dyn Write, set: &VariantSet) -> anyhow::Result<()> {
        let json = self.render_json(set)?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

/// Renders a `ScoreResult` as pretty JSON or plain text.
pub struct ScoreWriter {
    raw: String,
    improved: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ScoreReport<'a> {
    raw_prompt: &'a str,
    improved_prompt: &'a str,
    score: f64,
    length: f64,
    keyword: f64,
    clarity: f64,
}

impl ScoreWriter {
    pub fn new(raw: &str, improved: &str) -> Self {
        Self {
            raw: raw.to_string(),
            improved: improved.to_string(),
        }
    }

    /// Render as pretty JSON including the sub-metric breakdown.
    pub fn render_json(&self, result: &ScoreResult) -> anyhow::Result<String> {
        let report = ScoreReport {
            raw_prompt: &self.raw,
            improved_prompt: &self.improved,
            score: result.score,
            length: result.breakdown.length,
            keyword: result.breakdown.keyword,
            clarity: result.breakdown.clarity,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Render the single-line text form.
    pub fn render_text(&self, result: &ScoreResult) -> String {
        format!("Effectiveness score: {:.2}", result.score)
    }

    /// Render the text form with the sub-metric breakdown appended.
    pub fn render_verbose(&self, result: &ScoreResult) -> String {
        format!(
            "{}\n  length:  {:.2}\n  keyword: {:.2}\n  clarity: {:.2}",
            self.render_text(result),
            result.breakdown.length,
            result.breakdown.keyword,
            result.breakdown.clarity
        )
    }

    /// Write the JSON form to a writer, newline-terminated.
    pub fn write_json(&self, writer: &mut dyn Write, result: &ScoreResult) -> anyhow::Result<()> {
        let json = self.render_json(result)?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{ScoreBreakdown, Style};

    fn sample_set() -> VariantSet {
        VariantSet {
            style: Style::Precise,
            variants: [
                "first".to_string(),
                "second".to_string(),
                "third".to_string(),
            ],
        }
    }

    fn sample_result() -> ScoreResult {
        ScoreResult {
            score: 0.79,
            breakdown: ScoreBreakdown {
                length: 1.0,
                keyword: 0.8,
                clarity: 0.5,
            },
        }
    }

    #[test]
    fn variant_text_numbers_each_variant() {
        let writer = VariantWriter::new("prompt");
        let text = writer.render_text(&sample_set());
        assert_eq!(text, "Variant 1: first\n\nVariant 2: second\n\nVariant 3: third");
    }

    #[test]
    fn variant_json_is_valid_and_pascal_cased() {
        let writer = VariantWriter::new("prompt");
        let json = writer.render_json(&sample_set()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["Prompt"], "prompt");
        assert_eq!(parsed["Style"], "precise");
        assert_eq!(parsed["Variants"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn variant_write_json_is_newline_terminated() {
        let writer = VariantWriter::new("prompt");
        let mut buf = Vec::new();
        writer.write_json(&mut buf, &sample_set()).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with('\n'));
    }

    #[test]
    fn score_text_uses_two_decimals() {
        let writer = ScoreWriter::new("raw", "improved");
        assert_eq!(writer.render_text(&sample_result()), "Effectiveness score: 0.79");
    }

    #[test]
    fn score_verbose_lists_breakdown() {
        let writer = ScoreWriter::new("raw", "improved");
        let text = writer.render_verbose(&sample_result());
        assert!(text.starts_with("Effectiveness score: 0.79"));
        assert!(text.contains("length:  1.00"));
        assert!(text.contains("keyword: 0.80"));
        assert!(text.contains("clarity: 0.50"));
    }

    #[test]
    fn score_json_includes_breakdown() {
        let writer = ScoreWriter::new("raw", "improved");
        let json = writer.render_json(&sample_result()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["RawPrompt"], "raw");
        assert_eq!(parsed["ImprovedPrompt"], "improved");
        assert_eq!(parsed["Score"], 0.79);
        assert_eq!(parsed["Keyword"], 0.8);
    }
}
