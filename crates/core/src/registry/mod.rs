//! Situation extraction from cadastral registry extracts (visure).
//!
//! One extractor per layout family, selected by [`DocumentVariant`]. Every
//! extractor returns situations most recent first.

mod fields;
mod narrative;
mod table;
mod types;

use tracing::debug;

use crate::classify::DocumentVariant;
use crate::error::{CatastoError, Result};
use crate::fragment::TextFragment;

pub use fields::{property_kind, status_of_annotation, status_of_text};
pub use types::{
    AGRICULTURAL_LAND_KEY, BUILDABLE_LAND_KEY, Document, PropertyKind, Situation,
    SituationStatus, UnitRef,
};

/// Extract a registry document laid out as `variant`.
///
/// Fails only when `variant` is not a registry layout.
pub fn extract_document(fragments: &[TextFragment], variant: DocumentVariant) -> Result<Document> {
    if !variant.is_registry() {
        return Err(CatastoError::WrongVariant {
            expected: "registry",
            got: variant,
        });
    }
    Ok(build(fragments, variant))
}

/// Extract without checking the family. Anything but a narrative variant
/// goes through the table extractor.
pub(crate) fn build(fragments: &[TextFragment], variant: DocumentVariant) -> Document {
    let (number, (municipality, municipality_code), situations) = match variant {
        DocumentVariant::RegistryV2 => narrative_parts(fragments, narrative::STORICA),
        DocumentVariant::RegistryV3 => narrative_parts(fragments, narrative::ATTUALE),
        DocumentVariant::RegistryV4 => narrative_parts(fragments, narrative::SOPPRESSO),
        _ => (
            table::number(fragments),
            table::municipality(fragments),
            table::situations(fragments),
        ),
    };

    debug!(
        ?variant,
        %number,
        %municipality_code,
        situations = situations.len(),
        "extracted registry document"
    );

    Document {
        variant,
        number,
        municipality,
        municipality_code,
        situations,
    }
}

fn narrative_parts(
    fragments: &[TextFragment],
    layout: narrative::NarrativeLayout,
) -> (String, (String, String), Vec<Situation>) {
    (
        narrative::number(fragments),
        narrative::municipality(fragments),
        narrative::situations(fragments, layout),
    )
}
