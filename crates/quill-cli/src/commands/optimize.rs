use crate::commands;
use crate::Cli;
use anyhow::Result;
use quill_core::Style;
use quill_render::VariantWriter;
use std::path::Path;

pub fn run(
    cli: &Cli,
    prompt: Option<&str>,
    style: &str,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let prompt = commands::resolve_prompt("prompt", prompt, file)?;
    let style: Style = style.parse()?;

    if !cli.is_quiet() {
        eprintln!("Rewriting prompt ({style} style)...");
    }

    let set = quill_rewrite::optimize_prompt(&prompt, style)?;
    let writer = VariantWriter::new(prompt.trim());

    if json {
        writer.write_json(&mut std::io::stdout(), &set)?;
    } else {
        println!("{}", writer.render_text(&set));
    }

    Ok(())
}
