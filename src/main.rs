use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use wrrr_snapshot::cli::{self, ExportOptions};
use wrrr_snapshot::config::{
    ExportConfig, DEFAULT_REPORT_YEAR, DEFAULT_SHEET_NAMES, DEFAULT_WORKBOOK_FILENAME,
};

#[derive(Parser, Debug)]
#[command(name = "wrrr-snapshot")]
#[command(version)]
#[command(about = "Export WRRR workbook sheets to a static data-<year>.js snapshot")]
#[command(long_about = "WRRR snapshot - workbook sheets to a static JavaScript data file

Reads the sector data workbook from ../spreadsheet/ (relative to the base
directory) and writes data-<year>.js next to it:

  const data<year> = { \"node-master\": [...], \"link-upstream\": [...], ... };

CELL HANDLING:
  Empty cells              -> \"\"
  '{...}' / '[...]' text   -> parsed JSON (kept as text if it does not parse)
  Everything else          -> unchanged

EXAMPLES:
  wrrr-snapshot                              # default year and workbook
  wrrr-snapshot --year 2025                  # writes data-2025.js
  wrrr-snapshot --tsv-dir exports/           # read <sheet>.tsv files
  wrrr-snapshot --dry-run > preview.js       # print instead of writing")]
struct Cli {
    /// Report year; names the output file and variable
    #[arg(short, long, default_value_t = DEFAULT_REPORT_YEAR, env = "WRRR_REPORT_YEAR")]
    year: u32,

    /// Workbook file name inside ../spreadsheet/
    #[arg(short, long, default_value = DEFAULT_WORKBOOK_FILENAME, env = "WRRR_WORKBOOK")]
    workbook: String,

    /// Directory the snapshot is written to
    #[arg(short, long, default_value = ".", env = "WRRR_BASE_DIR")]
    base_dir: PathBuf,

    /// Sheet to export (repeatable; replaces the default list, order is kept)
    #[arg(short, long = "sheet", value_name = "NAME")]
    sheets: Vec<String>,

    /// Read <dir>/<sheet>.tsv exports instead of the workbook
    #[arg(long, value_name = "DIR")]
    tsv_dir: Option<PathBuf>,

    /// Print the snapshot to stdout without writing a file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show per-sheet summary and debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "wrrr_snapshot=debug"
    } else {
        "wrrr_snapshot=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_dir = std::path::absolute(&args.base_dir)
        .with_context(|| format!("Invalid base directory {}", args.base_dir.display()))?;

    let sheet_names = if args.sheets.is_empty() {
        DEFAULT_SHEET_NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        args.sheets
    };

    let config = ExportConfig {
        report_year: args.year,
        workbook_filename: args.workbook,
        sheet_names,
        base_dir,
    };
    let options = ExportOptions {
        tsv_dir: args.tsv_dir,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };

    cli::export(&config, &options)
        .with_context(|| format!("Export for report year {} failed", config.report_year))
}
