//! Delimited bank-statement parsing.
//!
//! Exported statement files arrive with inconsistent regional conventions:
//! semicolon or comma delimiters, `DD.MM.YYYY` or `DD/MM/YYYY` or ISO dates,
//! decimal commas, and either a single signed amount column or separate
//! out/in columns. Parsing is total — every surviving row produces exactly
//! one `Transaction`, with documented defaults standing in for anything that
//! does not parse.

use chrono::{Local, NaiveDate};
use csv::StringRecord;
use rust_decimal::Decimal;
use saldo_core::{Money, Transaction};

use crate::classifier::Ruleset;

const DEFAULT_DELIMITER: u8 = b';';

// Positional column convention shared by the supported bank exports.
const COL_DATE: usize = 0;
const COL_DESCRIPTION: usize = 1;
const COL_SIGNED_AMOUNT: usize = 2;
const COL_OUTGOING: usize = 3;
const COL_INCOMING: usize = 4;

/// Split raw statement text into data rows.
///
/// Tries the given delimiter (default `;`) first; if the header comes back as
/// a single column, retries with `,` and keeps whichever produced a
/// multi-column header. The header row is consumed, and data rows with fewer
/// than `min(4, header_len)` fields are dropped as blank/malformed trailers.
pub fn read_rows(text: &str, delimiter: Option<char>) -> Vec<StringRecord> {
    let primary = delimiter
        .and_then(|c| u8::try_from(c).ok())
        .unwrap_or(DEFAULT_DELIMITER);

    let mut rows = split_records(text, primary);
    if primary != b',' && rows.first().map_or(true, |header| header.len() <= 1) {
        let retry = split_records(text, b',');
        if retry.first().is_some_and(|header| header.len() > 1) {
            rows = retry;
        }
    }

    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let min_fields = header.len().min(4);
    data.iter()
        .filter(|row| row.len() >= min_fields)
        .cloned()
        .collect()
}

fn split_records(text: &str, delimiter: u8) -> Vec<StringRecord> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .filter_map(Result::ok)
        .collect()
}

/// Parse one data row into a classified transaction, using the wall clock
/// for the unparseable-date fallback.
pub fn parse_row(row: &StringRecord, rules: &Ruleset) -> Transaction {
    parse_row_at(row, rules, Local::now().date_naive())
}

/// Like [`parse_row`] but with an injected "today", so the date fallback is
/// observable in tests.
///
/// Column convention: date, description, signed amount, amount out, amount
/// in. The out column wins over the in column, which wins over the signed
/// column; anything unparseable leaves the amount at zero.
pub fn parse_row_at(row: &StringRecord, rules: &Ruleset, today: NaiveDate) -> Transaction {
    let date = row.get(COL_DATE).and_then(|cell| parse_date(cell, today));
    let description = row
        .get(COL_DESCRIPTION)
        .map(|cell| cell.trim().to_string())
        .unwrap_or_default();

    let outgoing = field_amount(row, COL_OUTGOING).filter(|v| v.is_sign_positive() && !v.is_zero());
    let incoming = field_amount(row, COL_INCOMING).filter(|v| v.is_sign_positive() && !v.is_zero());
    let signed = field_amount(row, COL_SIGNED_AMOUNT).filter(|v| !v.is_zero());

    let amount = if let Some(out) = outgoing {
        Money::from_decimal(-out.abs())
    } else if let Some(inn) = incoming {
        Money::from_decimal(inn.abs())
    } else if let Some(value) = signed {
        Money::from_decimal(value)
    } else {
        Money::zero()
    };

    let category = rules.classify(&description);
    Transaction::new(date, description, amount, category)
}

fn field_amount(row: &StringRecord, index: usize) -> Option<Decimal> {
    row.get(index).and_then(parse_amount)
}

/// Three recognized shapes: `DD.MM.YYYY`, `DD/MM/YYYY`, `YYYY-MM-DD`.
/// An empty cell yields `None`; a non-empty cell that fails to parse falls
/// back to `today` rather than erroring, so one bad row never blocks an
/// import.
fn parse_date(cell: &str, today: NaiveDate) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    let parsed = if cell.contains('.') {
        NaiveDate::parse_from_str(cell, "%d.%m.%Y").ok()
    } else if cell.contains('/') {
        NaiveDate::parse_from_str(cell, "%d/%m/%Y").ok()
    } else if cell.contains('-') {
        NaiveDate::parse_from_str(cell, "%Y-%m-%d").ok()
    } else {
        None
    };
    Some(parsed.unwrap_or(today))
}

/// Lenient decimal parsing: strips spaces and currency markers, then treats
/// whichever of `.`/`,` occurs last as the decimal separator. Handles both
/// `1 234,56` (Norwegian) and `1,234.56`.
fn parse_amount(cell: &str) -> Option<Decimal> {
    let mut s: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(stripped) = s.strip_suffix("kr").or_else(|| s.strip_suffix("NOK")) {
        s = stripped.to_string();
    }
    if s.is_empty() {
        return None;
    }

    match (s.rfind(','), s.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => {
            s = s.replace('.', "").replace(',', ".");
        }
        (Some(_), Some(_)) => {
            s = s.replace(',', "");
        }
        (Some(_), None) => {
            s = s.replace(',', ".");
        }
        _ => {}
    }

    s.parse().ok()
}
