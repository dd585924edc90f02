//! Per-cell normalization
//!
//! Missing cells become the empty string. Strings whose trimmed text is
//! wrapped in `{...}` or `[...]` are promoted to parsed JSON when they parse;
//! anything else keeps its original text, surrounding whitespace included.

use crate::types::{integral_float, CellValue, OutputDocument, RawCell, RawSheet, Row};
use serde_json::{Number, Value};

/// Normalize a single raw cell.
pub fn normalize(cell: RawCell) -> CellValue {
    match cell {
        RawCell::Missing => CellValue::empty(),
        RawCell::Int(i) => CellValue::Number(Number::from(i)),
        RawCell::Float(f) => match integral_float(f) {
            Some(i) => CellValue::Number(Number::from(i)),
            // Non-finite values have no JSON form and count as missing
            None => Number::from_f64(f).map_or_else(CellValue::empty, CellValue::Number),
        },
        RawCell::Bool(b) => CellValue::Bool(b),
        RawCell::Text(text) => match promote_json(&text) {
            Some(value) => CellValue::Json(value),
            None => CellValue::Text(text),
        },
    }
}

/// Parse `text` as JSON if its trimmed form looks like an object or array.
///
/// `None` means the text stays a plain string: either it is not wrapped in
/// matching braces/brackets or it does not parse.
pub fn promote_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let enveloped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));

    if !enveloped {
        return None;
    }

    serde_json::from_str(trimmed).ok()
}

/// Normalize every cell of a sheet into output rows.
pub fn normalize_sheet(sheet: RawSheet) -> Vec<Row> {
    let RawSheet { columns, rows, .. } = sheet;

    rows.into_iter()
        .map(|cells| Row {
            cells: columns
                .iter()
                .cloned()
                .zip(cells.into_iter().map(normalize))
                .collect(),
        })
        .collect()
}

/// Build the output document from loaded sheets, keeping their order.
pub fn build_document(report_year: u32, sheets: Vec<RawSheet>) -> OutputDocument {
    let mut document = OutputDocument::new(report_year);
    for sheet in sheets {
        let name = sheet.name.clone();
        document.add_sheet(name, normalize_sheet(sheet));
    }
    document
}
