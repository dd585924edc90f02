//! Export pipeline: load → normalize → write

use crate::config::{ExportConfig, SnapshotPaths};
use crate::error::SnapshotResult;
use crate::normalize::build_document;
use crate::source::SheetSource;
use crate::types::OutputDocument;
use crate::writer::write_snapshot;

/// What a completed export produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub paths: SnapshotPaths,
    /// Row count per exported sheet, in output order
    pub sheets: Vec<(String, usize)>,
}

/// Load the configured sheets from `source` and normalize them.
pub fn load_document(
    config: &ExportConfig,
    source: &mut dyn SheetSource,
) -> SnapshotResult<OutputDocument> {
    config.validate()?;

    tracing::info!(
        source = %source.location(),
        sheets = config.sheet_names.len(),
        "loading sheets"
    );
    let sheets = source.load(&config.sheet_names)?;

    Ok(build_document(config.report_year, sheets))
}

/// Run a full export and write `data-<year>.js`.
///
/// Nothing is written unless every sheet loads.
pub fn run_export(
    config: &ExportConfig,
    source: &mut dyn SheetSource,
) -> SnapshotResult<ExportSummary> {
    let paths = config.paths();
    let document = load_document(config, source)?;

    write_snapshot(&paths.output, &document)?;

    let sheets = document
        .sheets
        .iter()
        .map(|(name, rows)| (name.clone(), rows.len()))
        .collect();

    Ok(ExportSummary { paths, sheets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use crate::types::{RawCell, RawSheet};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// In-memory source holding sheets in arbitrary storage order
    struct MemorySource {
        sheets: Vec<RawSheet>,
    }

    impl SheetSource for MemorySource {
        fn location(&self) -> String {
            "memory".to_string()
        }

        fn load(&mut self, sheet_names: &[String]) -> SnapshotResult<Vec<RawSheet>> {
            sheet_names
                .iter()
                .map(|name| {
                    self.sheets
                        .iter()
                        .find(|s| &s.name == name)
                        .cloned()
                        .ok_or_else(|| SnapshotError::SheetNotFound {
                            sheet: name.clone(),
                            location: self.location(),
                        })
                })
                .collect()
        }
    }

    fn memory_source() -> MemorySource {
        let mut s2 = RawSheet::new("S2", vec!["v".to_string()]);
        s2.push_row(vec![RawCell::Int(2)]);
        let mut s1 = RawSheet::new("S1", vec!["v".to_string()]);
        s1.push_row(vec![RawCell::Int(1)]);
        s1.push_row(vec![RawCell::Missing]);
        MemorySource {
            sheets: vec![s2, s1],
        }
    }

    fn config_in(dir: &TempDir, sheets: &[&str]) -> ExportConfig {
        ExportConfig {
            sheet_names: sheets.iter().map(|s| s.to_string()).collect(),
            base_dir: dir.path().to_path_buf(),
            ..ExportConfig::default()
        }
    }

    #[test]
    fn test_requested_order_wins_over_storage_order() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &["S1", "S2"]);

        let doc = load_document(&config, &mut memory_source()).unwrap();
        assert_eq!(doc.sheet_names().collect::<Vec<_>>(), vec!["S1", "S2"]);
    }

    #[test]
    fn test_run_export_writes_file_and_summary() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &["S1", "S2"]);

        let summary = run_export(&config, &mut memory_source()).unwrap();

        assert_eq!(
            summary.sheets,
            vec![("S1".to_string(), 2), ("S2".to_string(), 1)]
        );
        let written = std::fs::read_to_string(dir.path().join("data-2024.js")).unwrap();
        assert!(written.starts_with("const data2024 = {"));
        assert!(written.ends_with("};"));
        assert!(written.contains("\"v\": \"\""));
    }

    #[test]
    fn test_missing_sheet_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &["S1", "S3"]);

        let err = run_export(&config, &mut memory_source()).unwrap_err();
        assert!(matches!(err, SnapshotError::SheetNotFound { .. }));
        assert!(!dir.path().join("data-2024.js").exists());
    }

    #[test]
    fn test_invalid_config_fails_before_loading() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, &["S1", "S1"]);

        let err = run_export(&config, &mut memory_source()).unwrap_err();
        assert!(matches!(err, SnapshotError::Config(_)));
    }
}
