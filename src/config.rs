//! Export configuration and path resolution
//!
//! The defaults reproduce the annual export run: report year, the input
//! workbook name and the ordered list of sheets to extract. The CLI may
//! override any of them, but a single run always covers one year and one
//! workbook.

use crate::error::{SnapshotError, SnapshotResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Report year used when none is given
pub const DEFAULT_REPORT_YEAR: u32 = 2024;

/// Workbook file looked up under `../spreadsheet/`
pub const DEFAULT_WORKBOOK_FILENAME: &str = "WRRR Sector Data Input Model.xlsx";

/// Sheets to extract, in output order
pub const DEFAULT_SHEET_NAMES: [&str; 10] = [
    "node-master",
    "link-upstream",
    "link-downstream",
    "meta-link-question-map",
    "schema-essential-wrrr-services",
    "schema-rv-services",
    "schema-yn",
    "schema-frequency",
    "schema-resilience-options",
    "schema-geographic-dependency",
];

/// Directory (relative to the base directory's parent) holding the workbook
const SPREADSHEET_DIR: &str = "spreadsheet";

/// Immutable settings for one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub report_year: u32,
    pub workbook_filename: String,
    pub sheet_names: Vec<String>,
    /// Directory the snapshot is written to; the workbook lives in its sibling
    /// `spreadsheet/` directory.
    pub base_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            report_year: DEFAULT_REPORT_YEAR,
            workbook_filename: DEFAULT_WORKBOOK_FILENAME.to_string(),
            sheet_names: DEFAULT_SHEET_NAMES.iter().map(|s| s.to_string()).collect(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Reject configurations the pipeline cannot export unambiguously.
    ///
    /// Requested sheet names become the keys of the output object, so they
    /// must be unique and non-blank.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.report_year == 0 {
            return Err(SnapshotError::Config(
                "report year must be greater than zero".to_string(),
            ));
        }

        if self.workbook_filename.trim().is_empty() {
            return Err(SnapshotError::Config(
                "workbook filename must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.sheet_names {
            if name.trim().is_empty() {
                return Err(SnapshotError::Config(
                    "sheet names must not be blank".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(SnapshotError::Config(format!(
                    "sheet '{}' is requested more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn paths(&self) -> SnapshotPaths {
        SnapshotPaths::resolve(&self.base_dir, self.report_year, &self.workbook_filename)
    }
}

/// Input and output locations derived from an [`ExportConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub workbook: PathBuf,
    pub output: PathBuf,
    pub output_filename: String,
    pub identifier: String,
}

impl SnapshotPaths {
    /// Compute paths without touching the filesystem.
    ///
    /// `<base_dir>/../spreadsheet/<workbook_filename>` is read and
    /// `<base_dir>/data-<year>.js` is written.
    pub fn resolve(base_dir: &Path, report_year: u32, workbook_filename: &str) -> Self {
        let output_filename = output_filename(report_year);
        Self {
            workbook: base_dir
                .join("..")
                .join(SPREADSHEET_DIR)
                .join(workbook_filename),
            output: base_dir.join(&output_filename),
            output_filename,
            identifier: identifier(report_year),
        }
    }
}

/// Name of the JavaScript constant holding the snapshot, e.g. `data2024`
pub fn identifier(report_year: u32) -> String {
    format!("data{}", report_year)
}

/// Snapshot file name, e.g. `data-2024.js`
pub fn output_filename(report_year: u32) -> String {
    format!("data-{}.js", report_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.report_year, 2024);
        assert_eq!(config.workbook_filename, "WRRR Sector Data Input Model.xlsx");
        assert_eq!(config.sheet_names.len(), 10);
        assert_eq!(config.sheet_names[0], "node-master");
        assert_eq!(config.sheet_names[9], "schema-geographic-dependency");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_paths() {
        let paths = SnapshotPaths::resolve(Path::new("/work/prep"), 2024, "model.xlsx");

        assert_eq!(
            paths.workbook,
            PathBuf::from("/work/prep/../spreadsheet/model.xlsx")
        );
        assert_eq!(paths.output, PathBuf::from("/work/prep/data-2024.js"));
        assert_eq!(paths.output_filename, "data-2024.js");
        assert_eq!(paths.identifier, "data2024");
    }

    #[test]
    fn test_identifier_has_no_separators() {
        assert_eq!(identifier(12345), "data12345");
        assert_eq!(output_filename(12345), "data-12345.js");
    }

    #[test]
    fn test_validate_rejects_duplicate_sheets() {
        let config = ExportConfig {
            sheet_names: vec!["schema-yn".to_string(), "schema-yn".to_string()],
            ..ExportConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, SnapshotError::Config(_)));
        assert!(err.to_string().contains("schema-yn"));
    }

    #[test]
    fn test_validate_rejects_blank_sheet_and_zero_year() {
        let blank = ExportConfig {
            sheet_names: vec!["  ".to_string()],
            ..ExportConfig::default()
        };
        assert!(blank.validate().is_err());

        let zero = ExportConfig {
            report_year: 0,
            ..ExportConfig::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_validate_allows_empty_sheet_list() {
        let config = ExportConfig {
            sheet_names: Vec::new(),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
