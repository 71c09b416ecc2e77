//! imucalc - Compute the yearly IMU timeline of registry extracts
//!
//! Registry extracts are taxed month by month against a municipal rate
//! table. F24 forms passed alongside are matched to each year by
//! municipality code and reference period.

mod input;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use catasto_core::taxform::{forms_for, group_by_municipality, paid_for};
use catasto_core::{
    CalcParams, Document, Extraction, RateTable, TaxForm, YearData, calculate, extract,
};
use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use input::{InputFormat, init_logging, load_fragments, write_json};

/// Compute IMU owed per year from visure catastali.
#[derive(Parser, Debug)]
#[command(name = "imucalc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fragment dumps of registry extracts and, optionally, F24 forms
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Input file format
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Rate table JSON
    #[arg(short = 'r', long)]
    rates: Option<PathBuf>,

    /// First year to report (default: earliest situation)
    #[arg(long = "from")]
    from: Option<i32>,

    /// Last year to report (default: current year)
    #[arg(long = "to")]
    to: Option<i32>,

    /// Print an empty rate table for the given documents and exit
    #[arg(long = "preset-rates", action = ArgAction::SetTrue)]
    preset_rates: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Indent the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Serialize)]
struct YearReport {
    #[serde(flatten)]
    data: YearData,
    /// Net local tax found on matching F24 forms.
    paid: f64,
    payment_dates: Vec<NaiveDate>,
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    number: &'a str,
    municipality: &'a str,
    municipality_code: &'a str,
    years: BTreeMap<i32, YearReport>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let last_year = args.to.unwrap_or_else(|| Local::now().year());
    let params = CalcParams::new(args.from, last_year).context("invalid year range")?;

    let extractions = args
        .files
        .par_iter()
        .map(|path| -> Result<Extraction> {
            let fragments = load_fragments(path, args.format)?;
            Ok(extract(&fragments))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut documents: Vec<Document> = Vec::new();
    let mut forms: Vec<TaxForm> = Vec::new();
    for extraction in extractions {
        match extraction {
            Extraction::Registry(doc) => documents.push(doc),
            Extraction::TaxForm(form) => forms.push(form),
        }
    }
    if documents.is_empty() {
        bail!("no registry extract among the input files");
    }
    info!(
        documents = documents.len(),
        forms = forms.len(),
        "loaded inputs"
    );

    if args.preset_rates {
        let table = RateTable::preset(&documents, last_year);
        return write_json(&args.outfile, &table, args.pretty);
    }

    let rates = match &args.rates {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            RateTable::from_json(&bytes)
                .with_context(|| format!("parsing rate table {}", path.display()))?
        }
        None => {
            warn!("no rate table given, every month will be untaxed");
            RateTable::new()
        }
    };

    let mut report: BTreeMap<String, Vec<DocumentReport>> = BTreeMap::new();
    for (code, group) in group_by_municipality(&documents) {
        let reports = group
            .into_iter()
            .map(|document| document_report(document, &rates, &params, &forms))
            .collect();
        report.insert(code, reports);
    }

    write_json(&args.outfile, &report, args.pretty)
}

fn document_report<'a>(
    document: &'a Document,
    rates: &RateTable,
    params: &CalcParams,
    forms: &[TaxForm],
) -> DocumentReport<'a> {
    let years = calculate(document, rates, params)
        .into_iter()
        .map(|(year, data)| {
            let code = &document.municipality_code;
            let payment_dates = forms_for(forms, code, year)
                .into_iter()
                .filter_map(|f| f.payment_date)
                .collect();
            let report = YearReport {
                data,
                paid: paid_for(forms, code, year),
                payment_dates,
            };
            (year, report)
        })
        .collect();

    DocumentReport {
        number: &document.number,
        municipality: &document.municipality,
        municipality_code: &document.municipality_code,
        years,
    }
}
