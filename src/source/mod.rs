//! Sheet sources
//!
//! A source loads the requested sheets, in requested order, as
//! [`RawSheet`]s. Two sources exist:
//! - [`WorkbookSource`]: a spreadsheet workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
//! - [`TsvDirSource`]: a directory of per-sheet `.tsv` exports

mod tsv;
mod workbook;

pub use tsv::TsvDirSource;
pub use workbook::{cell_from_data, WorkbookSource};

use crate::error::SnapshotResult;
use crate::types::{RawCell, RawSheet};
use std::collections::HashSet;

/// Something that can produce named sheets
pub trait SheetSource {
    /// Human-readable location, used in logs and errors
    fn location(&self) -> String;

    /// Load every requested sheet. Fails if any of them is absent.
    fn load(&mut self, sheet_names: &[String]) -> SnapshotResult<Vec<RawSheet>>;
}

/// Build a sheet from a header row and data rows.
pub(crate) fn sheet_from_rows<I>(name: &str, header: Vec<RawCell>, rows: I) -> RawSheet
where
    I: IntoIterator<Item = Vec<RawCell>>,
{
    let mut sheet = RawSheet::new(name, column_names(name, &header));
    for row in rows {
        sheet.push_row(row);
    }
    sheet
}

/// Turn header cells into unique column names.
///
/// Blank headers become `Unnamed: <index>`; repeats of `x` become `x.1`,
/// `x.2`, ... skipping any name already taken.
pub fn column_names(sheet: &str, header: &[RawCell]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (index, cell) in header.iter().enumerate() {
        let base = cell
            .header_text()
            .unwrap_or_else(|| format!("Unnamed: {}", index));

        let mut name = base.clone();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        if name != base {
            tracing::warn!(sheet, column = %base, renamed = %name, "duplicate column header");
        }

        taken.insert(name.clone());
        names.push(name);
    }

    names
}
