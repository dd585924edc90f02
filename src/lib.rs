//! WRRR snapshot - workbook sheets to a static JavaScript data file
//!
//! Reads a fixed, ordered list of sheets from the sector data workbook and
//! writes them as `const data<year> = {...};` for the visualisation to load
//! without a spreadsheet reader.
//!
//! # Pipeline
//!
//! - Resolve `../spreadsheet/<workbook>` and `data-<year>.js` from a base directory
//! - Load the requested sheets (workbook or TSV exports)
//! - Normalize cells: missing → `""`, JSON-looking strings → parsed JSON
//! - Serialize with sheet, row and column order preserved
//!
//! # Example
//!
//! ```no_run
//! use wrrr_snapshot::config::ExportConfig;
//! use wrrr_snapshot::pipeline::run_export;
//! use wrrr_snapshot::source::WorkbookSource;
//!
//! let config = ExportConfig::default();
//! let mut source = WorkbookSource::open(config.paths().workbook)?;
//! let summary = run_export(&config, &mut source)?;
//!
//! println!("Wrote {}", summary.paths.output.display());
//! # Ok::<(), wrrr_snapshot::error::SnapshotError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::{ExportConfig, SnapshotPaths};
pub use error::{SnapshotError, SnapshotResult};
pub use types::{CellValue, OutputDocument, RawCell, RawSheet, Row};
