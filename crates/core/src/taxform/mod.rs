//! F24 extraction.
//!
//! Same header-anchored column technique as the registry tables, run against
//! the fixed F24 column set with layout-specific tolerances.

mod extract;
mod layouts;
mod matching;
mod types;

use tracing::debug;

use crate::classify::DocumentVariant;
use crate::error::{CatastoError, Result};
use crate::fragment::TextFragment;

pub use matching::{forms_for, group_by_municipality, paid_for};
pub use types::{Particulars, TaxForm, TaxFormEntry};

/// Extract an F24 laid out as `variant`.
///
/// Fails only when `variant` is not a tax-form layout.
pub fn extract_tax_form(fragments: &[TextFragment], variant: DocumentVariant) -> Result<TaxForm> {
    if !variant.is_tax_form() {
        return Err(CatastoError::WrongVariant {
            expected: "tax form",
            got: variant,
        });
    }
    Ok(build(fragments, variant))
}

/// Extract without checking the family. Anything but a receipt is read as
/// the form layout.
pub(crate) fn build(fragments: &[TextFragment], variant: DocumentVariant) -> TaxForm {
    let layout = match variant {
        DocumentVariant::TaxFormV2 => &layouts::RECEIPT_V2,
        _ => &layouts::FORM_V1,
    };

    let entries = extract::entries(fragments, layout);
    let payment_date = extract::payment_date(fragments, layout);
    debug!(
        ?variant,
        entries = entries.len(),
        local = entries.iter().filter(|e| e.is_local_tax()).count(),
        ?payment_date,
        "extracted tax form"
    );

    TaxForm {
        variant,
        payment_date,
        entries,
    }
}
