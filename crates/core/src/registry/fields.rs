//! Field derivations shared by every registry layout.

use crate::fragment::TextFragment;
use crate::utils::parse_euro;

use super::types::{PropertyKind, SituationStatus};

/// Status tag of a single fragment.
///
/// "non rettificata" also contains "rettific", so the negated form is tested
/// first.
pub fn status_of_text(text: &str) -> Option<SituationStatus> {
    let text = text.to_lowercase();
    if !text.contains("rendita") {
        return None;
    }
    if text.contains("non") && text.contains("rettific") {
        Some(SituationStatus::NotRectified)
    } else if text.contains("rettific") {
        Some(SituationStatus::Rectified)
    } else if text.contains("valida") {
        Some(SituationStatus::Validated)
    } else if text.contains("propost") {
        Some(SituationStatus::Proposed)
    } else {
        None
    }
}

/// Status of the first fragment carrying a status tag.
pub fn status_of_fragments(fragments: &[TextFragment]) -> Option<SituationStatus> {
    fragments.iter().find_map(|f| status_of_text(&f.text))
}

/// Status read from a joined annotation paragraph, by exact phrase.
pub fn status_of_annotation(text: &str) -> Option<SituationStatus> {
    let text = text.to_lowercase();
    if text.contains("rendita non rettific") {
        Some(SituationStatus::NotRectified)
    } else if text.contains("rendita rettific") {
        Some(SituationStatus::Rectified)
    } else if text.contains("rendita propost") {
        Some(SituationStatus::Proposed)
    } else if text.contains("rendita valida") {
        Some(SituationStatus::Validated)
    } else {
        None
    }
}

/// Income figure of the first fragment mentioning euro.
///
/// `None` when no such fragment exists; unparsable figures are zero.
pub fn value_of_fragments(fragments: &[TextFragment]) -> Option<f64> {
    fragments
        .iter()
        .find(|f| f.contains("euro"))
        .map(|f| parse_euro(&f.text))
}

/// A category means a building; otherwise "dominicale" income means
/// agricultural land, and anything else is buildable land.
pub fn property_kind(fragments: &[TextFragment], category: Option<&str>) -> PropertyKind {
    if category.is_some_and(|c| !c.trim().is_empty()) {
        return PropertyKind::Building;
    }
    if fragments.iter().any(|f| f.contains("dominicale")) {
        PropertyKind::AgriculturalLand
    } else {
        PropertyKind::BuildableLand
    }
}
