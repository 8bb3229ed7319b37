use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Quill — deterministic prompt optimizer and scorer for LLM workflows.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite a prompt into three stylistic variants
    Optimize {
        /// The raw prompt text (omit when using --file)
        prompt: Option<String>,

        /// Rewrite style: creative, precise, or fast
        #[arg(short, long, default_value = "precise")]
        style: String,

        /// Read the prompt from a file instead of the command line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Score an improved prompt against the original
    Score {
        /// The original prompt (omit when using --raw-file)
        raw: Option<String>,

        /// The improved prompt (omit when using --improved-file)
        improved: Option<String>,

        /// Read the original prompt from a file
        #[arg(long)]
        raw_file: Option<PathBuf>,

        /// Read the improved prompt from a file
        #[arg(long)]
        improved_file: Option<PathBuf>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Serve the optimizer and scorer as MCP tools over stdio
    Serve,
}

impl Cli {
    fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Optimize {
            prompt,
            style,
            file,
            json,
        } => commands::optimize::run(&cli, prompt.as_deref(), style, file.as_deref(), *json),
        Command::Score {
            raw,
            improved,
            raw_file,
            improved_file,
            json,
        } => commands::score::run(
            &cli,
            raw.as_deref(),
            improved.as_deref(),
            raw_file.as_deref(),
            improved_file.as_deref(),
            *json,
        ),
        Command::Serve => commands::serve::run(&cli),
    }
}
