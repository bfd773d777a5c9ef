//! CLI commands for report export
//!
//! Renders the filtered accounts as PDF, CSV or Word and delivers the file to
//! a directory or to stdout.

use std::io;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::account::FilterArgs;
use crate::config::settings::Settings;
use crate::error::ContaResult;
use crate::export::ReportFormat;
use crate::query::FilterParams;
use crate::services::ExportService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Paginated listing, newest first
    Pdf,
    /// Semicolon-delimited ISO-8859-1 text, by due date
    Csv,
    /// Word document with one table, by due date
    Word,
}

impl From<ExportFormat> for ReportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Pdf => ReportFormat::Pdf,
            ExportFormat::Csv => ReportFormat::Csv,
            ExportFormat::Word => ReportFormat::Docx,
        }
    }
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output directory (defaults to the configured export directory)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ContaResult<()> {
    let service = ExportService::new(storage);
    let params = FilterParams::from(args.filter);
    let export = service.export(args.format.into(), &params)?;

    if args.stdout {
        export.write_to(&mut io::stdout().lock())?;
        return Ok(());
    }

    let dir = args
        .output
        .unwrap_or_else(|| settings.resolve_export_dir(storage.paths()));
    let rows = export.rows;
    let target = export.deliver(&dir)?;
    println!("Exported {} contas to: {}", rows, target.display());

    Ok(())
}
