//! Text fragment sources.
//!
//! Turns the JSON dump of a PDF text extractor into positioned
//! [`TextFragment`]s ordered top to bottom, left to right.

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatastoError, Result};
use crate::fragment::TextFragment;

/// Estimated advance of one encoded character, in pdf2json units.
pub const GLYPH_WIDTH_ESTIMATE: f64 = 0.1857;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Pdf2JsonOutput {
    pages: Vec<Pdf2JsonPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Pdf2JsonPage {
    height: f64,
    #[serde(default)]
    texts: Vec<Pdf2JsonText>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonText {
    x: f64,
    y: f64,
    #[serde(rename = "R", default)]
    runs: Vec<Pdf2JsonRun>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonRun {
    #[serde(rename = "T", default)]
    text: String,
    /// `[face, size, bold, italic]`
    #[serde(rename = "TS", default)]
    style: Vec<f64>,
}

/// Fragments from a pdf2json document dump.
///
/// Only the first run of each text item is read. Pages are stacked by
/// offsetting `y` with the page number times the page height.
pub fn from_pdf2json(bytes: &[u8]) -> Result<Vec<TextFragment>> {
    let output: Pdf2JsonOutput = serde_json::from_slice(bytes)
        .map_err(|e| CatastoError::MalformedSource(format!("pdf2json dump: {e}")))?;

    let mut fragments = Vec::new();
    for (index, page) in output.pages.iter().enumerate() {
        let page_number = index as u32 + 1;
        let offset = f64::from(page_number) * page.height;

        for item in &page.texts {
            let Some(run) = item.runs.first().filter(|r| !r.text.is_empty()) else {
                continue;
            };
            let text = urlencoding::decode(&run.text).map_err(|e| {
                CatastoError::MalformedSource(format!("page {page_number}: {e}"))
            })?;
            let width = run.text.chars().count() as f64 * GLYPH_WIDTH_ESTIMATE;
            let height = run.style.get(1).copied().unwrap_or(0.0) / 10.0;

            fragments.push(TextFragment::new(
                page_number,
                text.into_owned(),
                item.x,
                item.x + width,
                item.y + offset,
                height,
            ));
        }
    }

    sort_reading_order(&mut fragments);
    debug!(
        pages = output.pages.len(),
        fragments = fragments.len(),
        "loaded pdf2json dump"
    );
    Ok(fragments)
}

/// Fragments already in their serialized form.
pub fn from_fragments_json(bytes: &[u8]) -> Result<Vec<TextFragment>> {
    let fragments: Vec<TextFragment> = serde_json::from_slice(bytes)
        .map_err(|e| CatastoError::MalformedSource(format!("fragment array: {e}")))?;
    Ok(fragments)
}

/// Sort by `y`, then `start_x`.
pub fn sort_reading_order(fragments: &mut [TextFragment]) {
    fragments.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.start_x.total_cmp(&b.start_x)));
}
