//! Narrative registry layouts ("numero pratica" documents).
//!
//! The classification data sits in one region introduced by a "dati di
//! classamento" heading and closed by the next fragment set in the same
//! heading size. Inside it, labels and values alternate on each line and
//! historical states open with "dal dd/mm/yyyy", oldest first.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::fragment::{TextFragment, find_containing, right_of};
use crate::layout::group_rows;
use crate::utils::find_bounded_date;

use super::fields::{property_kind, status_of_annotation, value_of_fragments};
use super::types::{Situation, SituationStatus, UnitRef};

/// Shape of one narrative variant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NarrativeLayout {
    /// Heading opening the classification region.
    pub anchor: &'static str,
    /// Split the region into one block per "dal" line. When false the whole
    /// region is a single situation.
    pub split_blocks: bool,
}

/// Historical extract: every past state, each opened by "dal ...".
pub(crate) const STORICA: NarrativeLayout = NarrativeLayout {
    anchor: "dati di classamento",
    split_blocks: true,
};

/// Current-state extract: one situation only.
pub(crate) const ATTUALE: NarrativeLayout = NarrativeLayout {
    anchor: "dati di classamento",
    split_blocks: false,
};

/// Extract of a suppressed unit: historical blocks up to the suppression.
pub(crate) const SOPPRESSO: NarrativeLayout = NarrativeLayout {
    anchor: "dati di classamento",
    split_blocks: true,
};

static DAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^dal\s(\d{2})/(\d{2})/(\d{4})").expect("valid dal regex"));
static MUNICIPALITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?) \((\w\d{3})\)").expect("valid municipality regex"));

/// Value printed right of the "numero pratica" label.
pub(crate) fn number(fragments: &[TextFragment]) -> String {
    find_containing(fragments, "numero pratica")
        .and_then(|label| right_of(fragments, label))
        .map(|f| f.text.trim().to_string())
        .unwrap_or_default()
}

/// Municipality printed right of the "comune di" label as "NAME (L123)".
pub(crate) fn municipality(fragments: &[TextFragment]) -> (String, String) {
    find_containing(fragments, "comune di")
        .and_then(|label| right_of(fragments, label))
        .and_then(|f| MUNICIPALITY_RE.captures(f.text.trim()))
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .unwrap_or_default()
}

fn region(fragments: &[TextFragment], anchor: &str) -> Vec<TextFragment> {
    let Some(start) = fragments.iter().position(|f| f.contains(anchor)) else {
        return Vec::new();
    };
    let heading = fragments[start].height;
    let end = fragments[start + 1..]
        .iter()
        .position(|f| f.height == heading)
        .map_or(fragments.len(), |rel| start + 1 + rel);

    fragments[start + 1..end]
        .iter()
        .filter(|f| !f.is_blank())
        .cloned()
        .collect()
}

fn blocks(region: Vec<TextFragment>, split: bool) -> Vec<Vec<TextFragment>> {
    if !split {
        return if region.is_empty() { Vec::new() } else { vec![region] };
    }

    let mut blocks = Vec::new();
    let mut current: Vec<TextFragment> = Vec::new();
    for fragment in region {
        if DAL_RE.is_match(&fragment.text) && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push(fragment);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn block_date(block: &[TextFragment]) -> Option<NaiveDate> {
    let opening = block.first()?;
    if let Some(caps) = DAL_RE.captures(&opening.text) {
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let label = block.iter().position(|f| f.contains("derivanti"))?;
    let notes = block[label..]
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    find_bounded_date(&notes)
}

fn units(block: &[TextFragment]) -> Vec<UnitRef> {
    group_rows(block)
        .iter()
        .filter(|row| {
            row.fragments
                .iter()
                .any(|f| f.text.trim().eq_ignore_ascii_case("foglio"))
        })
        .map(|row| UnitRef {
            foglio: row.value_after("foglio").map(|f| f.text.trim().to_string()),
            particella: row
                .value_after("particella")
                .map(|f| f.text.trim().to_string()),
            sub: row
                .value_after("subalterno")
                .map(|f| f.text.trim().to_string()),
        })
        .collect()
}

fn category(block: &[TextFragment]) -> Option<String> {
    let label = block
        .iter()
        .position(|f| f.text.trim().eq_ignore_ascii_case("categoria"))?;
    block.get(label + 1).map(|f| f.text.trim().to_string())
}

fn annotation_status(block: &[TextFragment]) -> Option<SituationStatus> {
    let column_x = block.iter().find(|f| f.contains("annotazioni:"))?.start_x;
    let text = block
        .iter()
        .filter(|f| f.start_x >= column_x)
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    status_of_annotation(&text)
}

/// Situations of a narrative document, most recent first.
pub(crate) fn situations(fragments: &[TextFragment], layout: NarrativeLayout) -> Vec<Situation> {
    let blocks = blocks(region(fragments, layout.anchor), layout.split_blocks);
    debug!(blocks = blocks.len(), ?layout, "narrative layout blocks");

    let mut situations: Vec<Situation> = blocks
        .iter()
        .filter_map(|block| {
            let category = category(block);
            let situation = Situation {
                effective_from: block_date(block),
                status: annotation_status(block),
                units: units(block),
                property_kind: Some(property_kind(block, category.as_deref())),
                value: value_of_fragments(block),
                category,
            };
            (!situation.is_empty()).then_some(situation)
        })
        .collect();

    situations.reverse();
    situations
}
