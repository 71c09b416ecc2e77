//! Tests for document variant detection and top-level extraction.

#[path = "common/fixtures.rs"]
mod fixtures;

use catasto_core::classify::classify_strict;
use catasto_core::{DocumentVariant, Extraction, classify, extract};

use fixtures::{
    PROPOSED_2019, RECTIFIED_2020, f24_form, f24_receipt, frag, heading, visura_attuale,
    visura_storica, visura_table,
};

#[test]
fn test_classify_table_layout() {
    let fragments = visura_table(&[RECTIFIED_2020]);
    assert_eq!(classify(&fragments), DocumentVariant::RegistryV1);
}

#[test]
fn test_classify_number_line_decides() {
    let fragments = vec![
        frag("Visura n.: A1234", 1.0, 6.0, 1.0),
        frag("Numero pratica", 1.0, 5.0, 2.0),
        frag("Estremi del versamento", 1.0, 6.0, 3.0),
    ];
    assert_eq!(classify(&fragments), DocumentVariant::RegistryV1);
}

#[test]
fn test_classify_narrative_layouts() {
    assert_eq!(classify(&visura_storica()), DocumentVariant::RegistryV2);
    assert_eq!(classify(&visura_attuale()), DocumentVariant::RegistryV3);

    let mut suppressed = visura_storica();
    suppressed.push(frag("Immobile soppresso", 1.0, 6.0, 30.0));
    assert_eq!(classify(&suppressed), DocumentVariant::RegistryV4);
}

#[test]
fn test_classify_narrative_without_title_is_historical() {
    let fragments = vec![
        frag("Numero pratica", 1.0, 5.0, 1.0),
        heading("Dati di classamento", 1.0, 8.0, 2.0),
    ];
    assert_eq!(classify(&fragments), DocumentVariant::RegistryV2);
}

#[test]
fn test_classify_tax_forms() {
    assert_eq!(classify(&f24_form()), DocumentVariant::TaxFormV1);
    assert_eq!(classify(&f24_receipt()), DocumentVariant::TaxFormV2);
}

#[test]
fn test_classify_first_keyword_wins() {
    let fragments = vec![
        frag("Allegato al modello F24", 1.0, 6.0, 1.0),
        frag("Visura n.: T1", 1.0, 6.0, 2.0),
    ];
    assert_eq!(classify(&fragments), DocumentVariant::TaxFormV1);
}

#[test]
fn test_classify_fallback() {
    let fragments = vec![frag("Lorem ipsum", 1.0, 4.0, 1.0)];
    assert_eq!(classify_strict(&fragments), None);
    assert_eq!(classify(&fragments), DocumentVariant::RegistryV1);
    assert_eq!(classify(&[]), DocumentVariant::RegistryV1);
}

#[test]
fn test_variant_families() {
    assert!(DocumentVariant::RegistryV3.is_registry());
    assert!(!DocumentVariant::RegistryV3.is_tax_form());
    assert!(DocumentVariant::TaxFormV2.is_tax_form());
}

#[test]
fn test_extract_dispatches_by_family() {
    let registry = extract(&visura_table(&[RECTIFIED_2020, PROPOSED_2019]));
    assert_eq!(registry.variant(), DocumentVariant::RegistryV1);
    match registry {
        Extraction::Registry(doc) => assert_eq!(doc.situations.len(), 2),
        Extraction::TaxForm(_) => panic!("expected a registry document"),
    }

    let form = extract(&f24_form());
    assert_eq!(form.variant(), DocumentVariant::TaxFormV1);
    assert!(matches!(form, Extraction::TaxForm(f) if f.entries.len() == 3));
}

#[test]
fn test_extraction_serializes_with_kind_tag() {
    let value = serde_json::to_value(extract(&f24_receipt())).unwrap();
    assert_eq!(value["kind"], "tax_form");
    assert_eq!(value["data"]["variant"], "tax_form_v2");
}
