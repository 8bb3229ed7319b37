pub mod optimize;
pub mod score;
pub mod serve;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Resolve prompt text from an inline argument or a file. Exactly one source
/// must be given.
pub fn resolve_prompt(name: &str, inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {name} from {}", path.display())),
        (Some(_), Some(_)) => bail!("{name}: provide the prompt inline or via a file, not both"),
        (None, None) => bail!("{name}: no prompt given (pass it inline or via a file)"),
    }
}
