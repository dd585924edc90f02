use crate::config::identifier;
use crate::error::{SnapshotError, SnapshotResult};
use crate::types::OutputDocument;
use std::fs;
use std::path::Path;

/// Render the snapshot as `const data<year> = <JSON>;`
///
/// JSON is pretty-printed with two-space indentation; non-ASCII text is
/// written as-is.
pub fn render(document: &OutputDocument) -> SnapshotResult<String> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(format!(
        "const {} = {};",
        identifier(document.report_year),
        json
    ))
}

/// Render the snapshot and write it to `path`, replacing any existing file.
///
/// The full text is built in memory before the file is touched.
pub fn write_snapshot(path: &Path, document: &OutputDocument) -> SnapshotResult<()> {
    let contents = render(document)?;
    fs::write(path, contents).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "wrote snapshot");
    Ok(())
}
