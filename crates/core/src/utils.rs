//! Small text helpers shared by the extractors and the calculator.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Two-digit years above this belong to the 1900s, the rest to the 2000s.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 30;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})/(\d{2})/(\d{2,4})").expect("valid date regex"));
static BOUNDED_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2})/(\d{2})/(\d{2,4})\b").expect("valid date regex"));
static LEADING_FLOAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid float regex")
});

/// Expand a printed year, applying the two-digit pivot.
///
/// `"29"` is 2029, `"31"` is 1931. Longer strings are taken literally.
pub fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    if raw.len() == 2 {
        if year > TWO_DIGIT_YEAR_PIVOT {
            Some(1900 + year)
        } else {
            Some(2000 + year)
        }
    } else {
        Some(year)
    }
}

fn date_from_captures(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = expand_year(&caps[3])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First `dd/mm/yy` or `dd/mm/yyyy` date anywhere in `text`.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    DATE_RE.captures(text).and_then(|c| date_from_captures(&c))
}

/// Like [`find_date`] but the date must stand on word boundaries.
pub fn find_bounded_date(text: &str) -> Option<NaiveDate> {
    BOUNDED_DATE_RE
        .captures(text)
        .and_then(|c| date_from_captures(&c))
}

/// Parse an amount printed the Italian way (`1.234,56`).
///
/// Thousands dots are dropped and the decimal comma becomes a period. The
/// longest leading number is taken; anything unparsable is zero.
pub fn parse_amount(text: &str) -> f64 {
    let cleaned = text.replace('.', "").replacen(',', ".", 1);
    LEADING_FLOAT_RE
        .captures(&cleaned)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse the figure following the literal `euro` in a fragment.
pub fn parse_euro(text: &str) -> f64 {
    let lower = text.to_lowercase();
    match lower.find("euro") {
        Some(pos) => parse_amount(&lower[pos + "euro".len()..]),
        None => parse_amount(&lower),
    }
}

/// Normalize a cadastral category code: `"a/2"` becomes `"A2"`.
pub fn normalize_category(category: &str) -> String {
    category
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}
