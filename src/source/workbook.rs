//! Workbook source - spreadsheet sheets → raw tables

use super::{sheet_from_rows, SheetSource};
use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{RawCell, RawSheet};
use calamine::{open_workbook_auto, CellErrorType, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads named sheets from a workbook on disk
pub struct WorkbookSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookSource {
    /// Open the workbook. The format is picked from the file extension.
    pub fn open<P: AsRef<Path>>(path: P) -> SnapshotResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = open_workbook_auto(&path).map_err(|source| SnapshotError::Workbook {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "opened workbook");
        Ok(Self { path, workbook })
    }

    fn load_sheet(&mut self, name: &str) -> SnapshotResult<RawSheet> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| SnapshotError::SheetRead {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(sheet_from_range(name, &range))
    }
}

impl SheetSource for WorkbookSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self, sheet_names: &[String]) -> SnapshotResult<Vec<RawSheet>> {
        let available = self.workbook.sheet_names();

        // Check every name up front so a missing sheet fails before any parsing
        if let Some(missing) = sheet_names.iter().find(|name| !available.contains(name)) {
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
                "loaded sheet"
            );
            sheets.push(sheet);
        }

        Ok(sheets)
    }
}

/// Convert a used range into a sheet. The first row is the header.
fn sheet_from_range(name: &str, range: &Range<Data>) -> RawSheet {
    if range.is_empty() {
        return RawSheet::new(name, Vec::new());
    }

    let mut rows = range.rows();
    let header: Vec<RawCell> = rows
        .next()
        .map(|row| row.iter().map(cell_from_data).collect())
        .unwrap_or_default();

    sheet_from_rows(
        name,
        header,
        rows.map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>()),
    )
}

/// Map a calamine cell to a raw cell.
///
/// Dates become ISO-8601 text; `#N/A` counts as missing and other error
/// cells keep their literal (e.g. `#DIV/0!`).
pub fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Missing,
        Data::String(s) if s.is_empty() => RawCell::Missing,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Int(i) => RawCell::Int(*i),
        Data::Float(f) => RawCell::Float(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                match dt.as_duration() {
                    Some(duration) => RawCell::Text(format_duration(duration)),
                    None => RawCell::Float(dt.as_f64()),
                }
            } else {
                match dt.as_datetime() {
                    Some(datetime) => RawCell::Text(format_datetime(datetime)),
                    None => RawCell::Float(dt.as_f64()),
                }
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(CellErrorType::NA) => RawCell::Missing,
        Data::Error(e) => RawCell::Text(e.to_string()),
    }
}

fn format_datetime(datetime: chrono::NaiveDateTime) -> String {
    if datetime.time() == chrono::NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

fn format_duration(duration: chrono::Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
