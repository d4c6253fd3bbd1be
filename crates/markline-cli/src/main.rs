//! markline - apply a markdown formatting command to a file.
//!
//! # Usage
//!
//! ```bash
//! markline notes.md h2 --at 40
//! markline notes.md numbered-list --at 120 --in-place
//! markline notes.md bold --at 10 --end 14
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use markline_config::Config;
use markline_engine::editing::{Cmd, Document, FormatOptions, Selection};
use std::path::{Path, PathBuf};

/// Apply a markdown formatting command at a cursor or selection
#[derive(Parser, Debug)]
#[command(name = "markline", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// indent, outdent, bold, italic, list, numbered-list, normal, h1..h6
    #[arg(value_name = "COMMAND")]
    command: Cmd,

    /// Byte offset of the cursor (start of the selection)
    #[arg(long, default_value_t = 0)]
    at: usize,

    /// Byte offset of the end of the selection; omit for a plain cursor
    #[arg(long)]
    end: Option<usize>,

    /// Write the result back to FILE instead of printing it
    #[arg(short, long)]
    in_place: bool,

    /// Config file to use instead of ~/.config/markline/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// What a single command invocation produced
#[derive(Debug)]
struct Outcome {
    text: String,
    selection: Selection,
    changed: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    Ok(loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    }))
}

fn format_options(config: Config) -> FormatOptions {
    FormatOptions {
        indent_width: config.indent_width,
        bold_delimiter: config.bold_delimiter,
        italic_delimiter: config.italic_delimiter,
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref())?;

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut doc = Document::from_bytes(&bytes)
        .with_context(|| format!("{} is not valid UTF-8", cli.file.display()))?
        .with_options(format_options(config));

    doc.set_selection(Selection::new(cli.at, cli.end.unwrap_or(cli.at)));

    match doc.apply(cli.command.clone()) {
        Some(patch) => Ok(Outcome {
            text: patch.text,
            selection: patch.new_selection,
            changed: true,
        }),
        None => {
            log::info!(
                "{:?} at {:?} left {} unchanged",
                cli.command,
                doc.selection().range(),
                cli.file.display()
            );
            Ok(Outcome {
                text: doc.text(),
                selection: doc.selection(),
                changed: false,
            })
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let outcome = run(&cli)?;

    if cli.in_place {
        if outcome.changed {
            std::fs::write(&cli.file, &outcome.text)
                .with_context(|| format!("Failed to write {}", cli.file.display()))?;
        }
    } else {
        print!("{}", outcome.text);
    }

    eprintln!(
        "selection: {}..{}",
        outcome.selection.start(),
        outcome.selection.end()
    );
    Ok(())
}
