//! Input loading and logging shared by the command line tools.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use catasto_core::TextFragment;
use catasto_core::source::{from_fragments_json, from_pdf2json};
use clap::ValueEnum;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Shape of an input file.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum InputFormat {
    /// Guess from the top-level JSON value
    #[default]
    Auto,
    /// pdf2json document dump
    Pdf2json,
    /// Array of serialized text fragments
    Fragments,
}

/// Log to stderr; `-d` lowers the level to debug, RUST_LOG overrides both.
pub fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

pub fn load_fragments(path: &Path, format: InputFormat) -> Result<Vec<TextFragment>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let format = match format {
        InputFormat::Auto => guess_format(&bytes),
        other => other,
    };
    let fragments = match format {
        InputFormat::Fragments => from_fragments_json(&bytes),
        _ => from_pdf2json(&bytes),
    }
    .with_context(|| format!("loading fragments from {}", path.display()))?;
    Ok(fragments)
}

fn guess_format(bytes: &[u8]) -> InputFormat {
    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => InputFormat::Fragments,
        _ => InputFormat::Pdf2json,
    }
}

/// Open `outfile` for writing, `-` meaning stdout.
pub fn open_output(outfile: &str) -> Result<Box<dyn Write>> {
    if outfile == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(outfile).with_context(|| format!("creating {outfile}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn write_json<T: Serialize>(outfile: &str, value: &T, pretty: bool) -> Result<()> {
    let mut output = open_output(outfile)?;
    if pretty {
        serde_json::to_writer_pretty(&mut output, value)?;
    } else {
        serde_json::to_writer(&mut output, value)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
