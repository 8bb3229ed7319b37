use crate::commands;
use crate::Cli;
use anyhow::Result;
use quill_render::ScoreWriter;
use std::path::Path;

pub fn run(
    cli: &Cli,
    raw: Option<&str>,
    improved: Option<&str>,
    raw_file: Option<&Path>,
    improved_file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let raw = commands::resolve_prompt("raw prompt", raw, raw_file)?;
    let improved = commands::resolve_prompt("improved prompt", improved, improved_file)?;

    if !cli.is_quiet() {
        eprintln!("Scoring improved prompt against the original...");
    }

    let result = quill_score::score_prompt(&raw, &improved)?;
    let writer = ScoreWriter::new(raw.trim(), improved.trim());

    if json {
        writer.write_json(&mut std::io::stdout(), &result)?;
    } else if cli.is_verbose() {
        println!("{}", writer.render_verbose(&result));
    } else {
        println!("{}", writer.render_text(&result));
    }

    Ok(())
}
