//! Document variant detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fragment::TextFragment;

/// The closed set of document layouts the extractors understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentVariant {
    /// Registry extract laid out as titled tables ("Visura n.: ...").
    RegistryV1,
    /// Narrative registry extract, historical ("visura storica per immobile").
    RegistryV2,
    /// Narrative registry extract, current state only ("visura attuale per immobile").
    RegistryV3,
    /// Narrative registry extract of a suppressed unit.
    RegistryV4,
    /// F24 payment form.
    TaxFormV1,
    /// F24 payment receipt ("estremi del versamento").
    TaxFormV2,
}

impl DocumentVariant {
    pub fn is_registry(self) -> bool {
        matches!(
            self,
            Self::RegistryV1 | Self::RegistryV2 | Self::RegistryV3 | Self::RegistryV4
        )
    }

    pub fn is_tax_form(self) -> bool {
        matches!(self, Self::TaxFormV1 | Self::TaxFormV2)
    }
}

/// Classify a document by the first fragment carrying a version keyword.
///
/// Falls back to [`DocumentVariant::RegistryV1`] when nothing matches. This
/// default silently accepts unrelated documents; callers that need certainty
/// should check [`classify_strict`].
pub fn classify(fragments: &[TextFragment]) -> DocumentVariant {
    let variant = classify_strict(fragments).unwrap_or(DocumentVariant::RegistryV1);
    debug!(?variant, fragments = fragments.len(), "classified document");
    variant
}

/// Like [`classify`] but reports a total keyword miss as `None`.
pub fn classify_strict(fragments: &[TextFragment]) -> Option<DocumentVariant> {
    for fragment in fragments {
        let text = fragment.lower();
        if text.contains("visura n") {
            return Some(DocumentVariant::RegistryV1);
        }
        if text.contains("numero pratica") {
            return Some(narrative_variant(fragments));
        }
        if text.contains("f24") {
            return Some(DocumentVariant::TaxFormV1);
        }
        if text.contains("estremi del versamento") {
            return Some(DocumentVariant::TaxFormV2);
        }
    }
    None
}

/// Pick the narrative layout from the document title.
fn narrative_variant(fragments: &[TextFragment]) -> DocumentVariant {
    let title = fragments.iter().map(|f| f.lower()).find(|text| {
        text.contains("visura storica per immobile") || text.contains("visura attuale per immobile")
    });
    let suppressed = fragments.iter().any(|f| f.contains("immobile soppresso"));
    match title {
        Some(text) if suppressed || text.contains("soppress") => DocumentVariant::RegistryV4,
        Some(text) if text.contains("attuale") => DocumentVariant::RegistryV3,
        _ => DocumentVariant::RegistryV2,
    }
}
