//! Per-variant F24 layout tuning.

use crate::layout::ColumnSpec;

/// Column set and locators of one F24 layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaxFormLayout {
    pub section: ColumnSpec,
    pub code: ColumnSpec,
    pub tax_cause: ColumnSpec,
    pub ravv: ColumnSpec,
    pub changed_units: ColumnSpec,
    pub advance: ColumnSpec,
    pub balance: ColumnSpec,
    pub unit_count: ColumnSpec,
    pub period: ColumnSpec,
    pub debit: ColumnSpec,
    pub credit: ColumnSpec,
    /// Lowercase labels next to which the payment date is printed, tried in order.
    pub date_labels: &'static [&'static str],
    /// Horizontal band under a date label searched when nothing is right of it.
    pub date_tolerance_x: f64,
    /// Fragment closing the tax table.
    pub end_marker: &'static str,
}

/// The printed F24 form. Columns are narrow and packed, so tolerances are
/// tight; the particulars are single-glyph check boxes.
pub(crate) const FORM_V1: TaxFormLayout = TaxFormLayout {
    section: ColumnSpec::new("sezione", 2, 1.0),
    code: ColumnSpec::new("codice ente", 1, 1.2),
    tax_cause: ColumnSpec::new("causale", 1, 1.2),
    ravv: ColumnSpec::new("ravv", 1, 0.5),
    changed_units: ColumnSpec::new("variati", 1, 0.5),
    advance: ColumnSpec::new("acc", 1, 0.5),
    balance: ColumnSpec::new("saldo", 1, 0.5),
    unit_count: ColumnSpec::new("numero immob", 1, 0.6),
    period: ColumnSpec::new("periodo di riferimento", 2, 1.5),
    debit: ColumnSpec::new("importo a debito", 1, 2.0),
    credit: ColumnSpec::new("importo a credito", 1, 2.0),
    date_labels: &["data del versamento", "data di pagamento", "data pagamento"],
    date_tolerance_x: 2.0,
    end_marker: "saldo finale",
};

/// The bank payment receipt ("estremi del versamento"). Wider columns and a
/// spelled-out section name.
pub(crate) const RECEIPT_V2: TaxFormLayout = TaxFormLayout {
    section: ColumnSpec::new("sezione", 5, 2.0),
    code: ColumnSpec::new("codice", 1, 1.5),
    tax_cause: ColumnSpec::new("causale", 1, 1.5),
    ravv: ColumnSpec::new("ravv", 1, 0.8),
    changed_units: ColumnSpec::new("variati", 1, 0.8),
    advance: ColumnSpec::new("acc", 1, 0.8),
    balance: ColumnSpec::new("saldo", 1, 0.8),
    unit_count: ColumnSpec::new("numero immob", 1, 0.8),
    period: ColumnSpec::new("periodo di riferimento", 2, 2.0),
    debit: ColumnSpec::new("importo a debito", 1, 2.5),
    credit: ColumnSpec::new("importo a credito", 1, 2.5),
    date_labels: &["data del versamento", "data operazione", "data pagamento", "data addebito"],
    date_tolerance_x: 3.0,
    end_marker: "totale",
};
