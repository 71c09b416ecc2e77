//! Synthetic fragment layouts modelled on real visure and F24 dumps.
#![allow(dead_code)]

use catasto_core::TextFragment;
use catasto_core::source::sort_reading_order;

/// Body-size fragment spanning `start_x..end_x`.
pub fn frag(text: &str, start_x: f64, end_x: f64, y: f64) -> TextFragment {
    TextFragment::new(1, text, start_x, end_x, y, 1.0)
}

/// Heading-size fragment.
pub fn heading(text: &str, start_x: f64, end_x: f64, y: f64) -> TextFragment {
    TextFragment::new(1, text, start_x, end_x, y, 1.2)
}

/// One-unit-wide fragment centered on `center`.
pub fn cell(text: &str, center: f64, y: f64) -> TextFragment {
    frag(text, center - 0.5, center + 0.5, y)
}

pub fn sorted(mut fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    sort_reading_order(&mut fragments);
    fragments
}

/// One titled section of the table layout.
pub struct TableSection<'a> {
    pub date: &'a str,
    pub foglio: &'a str,
    pub particella: &'a str,
    pub sub: &'a str,
    pub category: &'a str,
    pub derivanti: &'a str,
    pub value: &'a str,
    pub status: &'a str,
}

impl TableSection<'_> {
    /// Fragments of the section with its title at `y`.
    pub fn at(&self, y: f64) -> Vec<TextFragment> {
        let title = if self.date.is_empty() {
            "Unità immobiliare".to_string()
        } else {
            format!("Situazione dell'unità immobiliare dal {}", self.date)
        };
        let mut out = vec![
            frag(&title, 1.0, 10.0, y),
            cell("Foglio", 3.0, y + 1.0),
            cell("Particella", 7.0, y + 1.0),
            cell("Sub", 10.5, y + 1.0),
            cell("Categoria", 15.0, y + 1.0),
            cell("Dati derivanti da", 23.0, y + 1.0),
        ];
        for (text, center) in [
            (self.foglio, 3.0),
            (self.particella, 7.0),
            (self.sub, 10.5),
            (self.category, 15.0),
            (self.derivanti, 23.0),
        ] {
            if !text.is_empty() {
                out.push(cell(text, center, y + 2.0));
            }
        }
        if !self.value.is_empty() {
            out.push(frag(self.value, 30.0, 34.0, y + 3.0));
        }
        if !self.status.is_empty() {
            out.push(frag(self.status, 36.0, 40.0, y + 3.0));
        }
        out
    }
}

pub const RECTIFIED_2020: TableSection<'static> = TableSection {
    date: "10/03/2020",
    foglio: "12",
    particella: "345",
    sub: "6",
    category: "A/2",
    derivanti: "VARIAZIONE del 10/03/2020",
    value: "Rendita: Euro 1.000,00",
    status: "Rendita rettificata",
};

pub const PROPOSED_2019: TableSection<'static> = TableSection {
    date: "01/05/2019",
    foglio: "12",
    particella: "345",
    sub: "6",
    category: "A/2",
    derivanti: "CLASSAMENTO del 01/05/2019",
    value: "Rendita: Euro 900,00",
    status: "Rendita proposta (D.M. 701/94)",
};

/// Header lines of a table-layout extract.
pub fn visura_header() -> Vec<TextFragment> {
    vec![
        frag("Visura n.: T12345", 1.0, 6.0, 1.0),
        frag("Comune di ROMA (Codice: H501)", 1.0, 8.0, 2.0),
    ]
}

/// Table-layout extract with `sections` stacked ten units apart.
pub fn visura_table(sections: &[TableSection<'_>]) -> Vec<TextFragment> {
    let mut fragments = visura_header();
    for (idx, section) in sections.iter().enumerate() {
        fragments.extend(section.at(10.0 + idx as f64 * 10.0));
    }
    sorted(fragments)
}

/// Table-layout extract with a yearly history of `count` sections, most
/// recent first, spread over pages of 50 units.
pub fn visura_table_history(count: usize) -> Vec<TextFragment> {
    let mut fragments = visura_header();
    for idx in 0..count {
        let year = 2024 - idx as i32;
        let date = format!("01/01/{year}");
        let derivanti = format!("VARIAZIONE del {date}");
        let value = format!("Rendita: Euro {},00", 1000 - idx);
        let section = TableSection {
            date: &date,
            foglio: "12",
            particella: "345",
            sub: "6",
            category: if idx % 2 == 0 { "A/2" } else { "A/3" },
            derivanti: &derivanti,
            value: &value,
            status: "Rendita validata",
        };
        let page = (idx / 4) as u32 + 1;
        let y = page as f64 * 50.0 + (idx % 4) as f64 * 10.0;
        fragments.extend(section.at(y).into_iter().map(|mut f| {
            f.page = page;
            f
        }));
    }
    sorted(fragments)
}

/// Narrative historical extract: a 2015 state and a proposed 2021 state.
pub fn visura_storica() -> Vec<TextFragment> {
    let mut fragments = narrative_header("Visura storica per immobile");
    fragments.extend([
        heading("Dati di classamento", 1.0, 8.0, 5.0),
        frag("dal 15/06/2015", 1.0, 5.0, 6.0),
    ]);
    fragments.extend(unit_row(7.0));
    fragments.extend([
        frag("Categoria", 1.0, 2.5, 8.0),
        frag("A/3", 3.0, 4.0, 8.0),
        frag("Rendita Euro 500,00", 1.0, 6.0, 9.0),
        frag("dal 20/01/2021", 1.0, 5.0, 10.0),
    ]);
    fragments.extend(unit_row(11.0));
    fragments.extend([
        frag("Categoria", 1.0, 2.5, 12.0),
        frag("A/2", 3.0, 4.0, 12.0),
        frag("Rendita Euro 750,00", 1.0, 6.0, 13.0),
        frag("Annotazioni:", 20.0, 23.0, 14.0),
        frag("rendita proposta (d.m. 701/94)", 24.0, 30.0, 14.0),
        heading("Intestati", 1.0, 4.0, 16.0),
        frag("ROSSI MARIO", 1.0, 5.0, 17.0),
    ]);
    sorted(fragments)
}

/// Narrative current-state extract: one undated block with a "derivanti" note.
pub fn visura_attuale() -> Vec<TextFragment> {
    let mut fragments = narrative_header("Visura attuale per immobile");
    fragments.push(heading("Dati di classamento", 1.0, 8.0, 5.0));
    fragments.extend(unit_row(6.0));
    fragments.extend([
        frag("Categoria", 1.0, 2.5, 7.0),
        frag("C/6", 3.0, 4.0, 7.0),
        frag("Rendita Euro 80,50", 1.0, 6.0, 8.0),
        frag("Dati derivanti da", 1.0, 5.0, 9.0),
        frag("VARIAZIONE del 05/02/2018", 8.0, 14.0, 9.0),
        heading("Intestati", 1.0, 4.0, 11.0),
    ]);
    sorted(fragments)
}

fn narrative_header(title: &str) -> Vec<TextFragment> {
    vec![
        frag("Numero pratica", 1.0, 5.0, 1.0),
        frag("T98765", 8.0, 10.0, 1.0),
        heading(title, 1.0, 9.0, 2.0),
        frag("Comune di", 1.0, 4.0, 3.0),
        frag("MILANO (F205)", 8.0, 12.0, 3.0),
    ]
}

fn unit_row(y: f64) -> Vec<TextFragment> {
    vec![
        frag("Foglio", 1.0, 2.5, y),
        frag("7", 3.0, 3.5, y),
        frag("Particella", 5.0, 7.5, y),
        frag("100", 8.0, 9.0, y),
        frag("Subalterno", 10.0, 12.5, y),
        frag("3", 13.0, 13.5, y),
    ]
}

fn tax_table_headers(y: f64, code_header: &str) -> Vec<TextFragment> {
    vec![
        cell("Sezione", 2.0, y),
        cell(code_header, 6.0, y),
        cell("Causale", 10.0, y),
        cell("Ravv.", 13.0, y),
        cell("Immob. variati", 15.0, y),
        cell("Acc.", 17.0, y),
        cell("Saldo", 19.0, y),
        cell("Numero immob.", 21.0, y),
        cell("Periodo di riferimento", 25.0, y),
        cell("Importo a debito versati", 31.0, y),
        cell("Importo a credito compensati", 37.0, y),
    ]
}

/// Printed F24 with two IMU debits to H501 and one credit.
pub fn f24_form() -> Vec<TextFragment> {
    let mut fragments = vec![
        frag("MODELLO DI PAGAMENTO UNIFICATO F24", 1.0, 12.0, 1.0),
        frag("Data del versamento", 1.0, 6.0, 2.0),
        frag("16/06/2023", 8.0, 10.0, 2.0),
        frag("IMU E ALTRI TRIBUTI LOCALI", 0.5, 3.5, 11.0),
    ];
    fragments.extend(tax_table_headers(10.0, "Codice ente"));
    fragments.extend([
        cell("EL", 2.0, 12.0),
        cell("H501", 6.0, 12.0),
        cell("3918", 10.0, 12.0),
        cell("X", 19.0, 12.0),
        cell("1", 21.0, 12.0),
        cell("2023", 25.0, 12.0),
        cell("780,00", 31.0, 12.0),
        cell("EL", 2.0, 13.0),
        cell("H501", 6.0, 13.0),
        cell("3918", 10.0, 13.0),
        cell("X", 17.0, 13.0),
        cell("1", 21.0, 13.0),
        cell("2022", 25.0, 13.0),
        cell("120,50", 31.0, 13.0),
        cell("EL", 2.0, 14.0),
        cell("H501", 6.0, 14.0),
        cell("3918", 10.0, 14.0),
        cell("2023", 25.0, 14.0),
        cell("50,00", 37.0, 14.0),
        frag("SALDO FINALE", 24.0, 28.0, 16.0),
        cell("850,50", 31.0, 16.0),
    ]);
    sorted(fragments)
}

/// Bank receipt of an F24, with the date printed under its label.
pub fn f24_receipt() -> Vec<TextFragment> {
    let mut fragments = vec![
        frag("Estremi del versamento", 1.0, 8.0, 1.0),
        frag("Data operazione", 1.0, 5.0, 3.0),
        cell("17/12/2022", 3.0, 4.0),
    ];
    fragments.extend(tax_table_headers(10.0, "Codice"));
    fragments.extend([
        cell("EL", 2.0, 11.0),
        cell("F205", 6.0, 11.0),
        cell("3918", 10.0, 11.0),
        cell("X", 19.0, 11.0),
        cell("2", 21.0, 11.0),
        cell("2022", 25.0, 11.0),
        cell("300,00", 31.0, 11.0),
        frag("Totale", 24.0, 27.0, 13.0),
        cell("300,00", 31.0, 13.0),
    ]);
    sorted(fragments)
}
