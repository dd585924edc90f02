//! TSV directory source - `<dir>/<sheet>.tsv` exports of published sheets

use super::{sheet_from_rows, SheetSource};
use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{RawCell, RawSheet};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads each requested sheet from a tab-separated file named after it
pub struct TsvDirSource {
    dir: PathBuf,
}

impl TsvDirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{}.tsv", sheet))
    }

    fn load_sheet(&self, name: &str) -> SnapshotResult<RawSheet> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_path(self.sheet_path(name))?;

        let header: Vec<RawCell> = reader.headers()?.iter().map(cell_from_field).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(cell_from_field).collect::<Vec<_>>());
        }

        Ok(sheet_from_rows(name, header, rows))
    }
}

impl SheetSource for TsvDirSource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn load(&mut self, sheet_names: &[String]) -> SnapshotResult<Vec<RawSheet>> {
        if let Some(missing) = sheet_names
            .iter()
            .find(|name| !self.sheet_path(name).is_file())
        {
            return Err(SnapshotError::SheetNotFound {
                sheet: missing.clone(),
                location: self.location(),
            });
        }

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let sheet = self.load_sheet(name)?;
            tracing::debug!(
                sheet = %name,
                columns = sheet.columns.len(),
                rows = sheet.row_count(),
                "loaded tsv sheet"
            );
            sheets.push(sheet);
        }

        Ok(sheets)
    }
}

/// Type a TSV field.
///
/// TSV carries only text, so JSON number and boolean literals are read
/// back as numbers and booleans; `null` and empty fields are missing.
/// Everything else, including JSON-looking objects and arrays, stays text
/// for the normalizer.
fn cell_from_field(field: &str) -> RawCell {
    if field.is_empty() {
        return RawCell::Missing;
    }

    match serde_json::from_str::<Value>(field) {
        Ok(Value::Null) => RawCell::Missing,
        Ok(Value::Bool(b)) => RawCell::Bool(b),
        Ok(Value::Number(n)) => match n.as_i64() {
            Some(i) => RawCell::Int(i),
            None => n
                .as_f64()
                .map_or_else(|| RawCell::Text(field.to_string()), RawCell::Float),
        },
        _ => RawCell::Text(field.to_string()),
    }
}
