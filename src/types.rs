use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};

//==============================================================================
// Loaded (raw) data
//==============================================================================

/// A cell as read from a sheet, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// Empty or absent cell
    Missing,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawCell {
    /// Render a header cell as a column name. `None` for missing headers.
    pub fn header_text(&self) -> Option<String> {
        match self {
            RawCell::Missing => None,
            RawCell::Text(s) if s.is_empty() => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Int(i) => Some(i.to_string()),
            RawCell::Float(f) => Some(match integral_float(*f) {
                Some(i) => i.to_string(),
                None => f.to_string(),
            }),
            RawCell::Bool(b) => Some(b.to_string()),
        }
    }
}

/// A sheet loaded from a source: unique column names plus rows of raw cells.
///
/// Every row holds exactly one cell per column, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with missing cells and dropping
    /// cells beyond the header width.
    pub fn push_row(&mut self, mut cells: Vec<RawCell>) {
        cells.resize(self.columns.len(), RawCell::Missing);
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

//==============================================================================
// Normalized data
//==============================================================================

/// A normalized cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(Number),
    Bool(bool),
    /// A string cell promoted to structured JSON
    Json(Value),
}

impl CellValue {
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Json(v) => v.serialize(serializer),
        }
    }
}

/// One output record: column name to value, in sheet column order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// The snapshot written to `data-<year>.js`.
///
/// Serializes as an object keyed by sheet name in requested order. The
/// report year only names the output constant and file.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub report_year: u32,
    pub sheets: Vec<(String, Vec<Row>)>,
}

impl OutputDocument {
    pub fn new(report_year: u32) -> Self {
        Self {
            report_year,
            sheets: Vec::new(),
        }
    }

    pub fn add_sheet(&mut self, name: String, rows: Vec<Row>) {
        self.sheets.push((name, rows));
    }

    pub fn sheet(&self, name: &str) -> Option<&[Row]> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, rows)| rows.as_slice())
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sheets.len()))?;
        for (name, rows) in &self.sheets {
            map.serialize_entry(name, rows)?;
        }
        map.end()
    }
}

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Return the integer value of `f` if it has no fractional part.
pub(crate) fn integral_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        Some(f as i64)
    } else {
        None
    }
}
