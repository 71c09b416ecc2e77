//! visura2json - Extract registry extracts and F24 forms to JSON
//!
//! Reads text fragment dumps, classifies each document and writes the
//! extracted registry situations or tax-form entries.

mod input;

use std::path::PathBuf;

use anyhow::Result;
use catasto_core::{Document, Extraction, census, extract};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use input::{InputFormat, init_logging, load_fragments, write_json};

/// Extract visure catastali and F24 forms from text fragment dumps.
#[derive(Parser, Debug)]
#[command(name = "visura2json")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more fragment dumps
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Input file format
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Print the distinct cadastral units instead of the documents
    #[arg(long, action = ArgAction::SetTrue)]
    census: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Indent the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Serialize)]
struct FileExtraction {
    file: String,
    #[serde(flatten)]
    extraction: Extraction,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let extracted = args
        .files
        .par_iter()
        .map(|path| -> Result<FileExtraction> {
            let fragments = load_fragments(path, args.format)?;
            let extraction = extract(&fragments);
            info!(file = %path.display(), variant = ?extraction.variant(), "extracted");
            Ok(FileExtraction {
                file: path.display().to_string(),
                extraction,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if args.census {
        let documents: Vec<Document> = extracted
            .into_iter()
            .filter_map(|e| match e.extraction {
                Extraction::Registry(doc) => Some(doc),
                Extraction::TaxForm(_) => None,
            })
            .collect();
        return write_json(&args.outfile, &census(&documents), args.pretty);
    }

    write_json(&args.outfile, &extracted, args.pretty)
}
