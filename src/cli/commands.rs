use crate::config::ExportConfig;
use crate::error::SnapshotResult;
use crate::pipeline::{load_document, run_export, ExportSummary};
use crate::source::{SheetSource, TsvDirSource, WorkbookSource};
use crate::writer::render;
use colored::Colorize;
use std::path::PathBuf;

/// Options that change how the export runs, not what it exports
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Read `<dir>/<sheet>.tsv` files instead of the workbook
    pub tsv_dir: Option<PathBuf>,
    /// Print the snapshot instead of writing it
    pub dry_run: bool,
    pub verbose: bool,
}

/// Execute the export command
pub fn export(config: &ExportConfig, options: &ExportOptions) -> SnapshotResult<()> {
    config.validate()?;
    let paths = config.paths();

    let mut source: Box<dyn SheetSource> = match &options.tsv_dir {
        Some(dir) => Box::new(TsvDirSource::new(dir)),
        None => Box::new(WorkbookSource::open(&paths.workbook)?),
    };

    if options.verbose {
        println!("{}", "📖 WRRR snapshot export".bold().green());
        println!("   Source: {}", source.location());
        println!("   Output: {}", paths.output.display());
        println!("   Year:   {}\n", config.report_year);
    }

    if options.dry_run {
        let document = load_document(config, &mut *source)?;
        println!("{}", render(&document)?);
        return Ok(());
    }

    let summary = run_export(config, &mut *source)?;

    if options.verbose {
        print_summary(&summary);
    }

    println!(
        "Exported to {} with variable name: {}",
        summary.paths.output_filename, summary.paths.identifier
    );

    Ok(())
}

fn print_summary(summary: &ExportSummary) {
    for (sheet, rows) in &summary.sheets {
        println!("   📊 {}: {} rows", sheet.bright_blue(), rows);
    }
    println!();
}
