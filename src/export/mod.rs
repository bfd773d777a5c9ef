//! Report export for contas
//!
//! Renders filtered account reports in three formats:
//! - PDF: paginated listing, newest first
//! - CSV: semicolon-delimited, ISO-8859-1, earliest due date first
//! - Word: a `.docx` document holding one bordered table
//!
//! Every export is rendered into a temporary file that is removed when the
//! `ExportFile` is dropped, whether or not it was delivered.

pub mod csv;
pub mod docx;
pub mod latin1;
pub mod pdf;

pub use self::csv::CsvRenderer;
pub use docx::DocxRenderer;
pub use pdf::PdfRenderer;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::error::{ContaError, ContaResult};
use crate::query::OrderBy;
use crate::reports::ReportData;

/// Writes a report in one output format
pub trait Renderer {
    fn render(&self, data: &ReportData, out: &mut dyn Write) -> ContaResult<()>;
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Csv,
    Docx,
}

impl ReportFormat {
    /// Row order used by this format
    pub fn order(self) -> OrderBy {
        match self {
            ReportFormat::Pdf => OrderBy::CreatedDesc,
            ReportFormat::Csv | ReportFormat::Docx => OrderBy::DueDateAsc,
        }
    }

    /// Suggested download filename
    ///
    /// CSV names carry a fresh unique id so repeated exports never collide.
    pub fn file_name(self) -> String {
        match self {
            ReportFormat::Pdf => "listar_contas.pdf".to_string(),
            ReportFormat::Csv => format!("relatorio_contas_{}.csv", Uuid::new_v4().simple()),
            ReportFormat::Docx => "relatorio_contas_.docx".to_string(),
        }
    }

    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            ReportFormat::Pdf => Box::new(PdfRenderer::default()),
            ReportFormat::Csv => Box::new(CsvRenderer),
            ReportFormat::Docx => Box::new(DocxRenderer),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Docx => write!(f, "word"),
        }
    }
}

/// A rendered report waiting to be delivered
///
/// The backing temp file is deleted on drop.
#[derive(Debug)]
pub struct ExportFile {
    pub format: ReportFormat,
    pub file_name: String,
    pub rows: usize,
    temp: NamedTempFile,
}

impl ExportFile {
    pub(crate) fn new(format: ReportFormat, rows: usize, temp: NamedTempFile) -> Self {
        Self {
            format,
            file_name: format.file_name(),
            rows,
            temp,
        }
    }

    /// Location of the rendered bytes
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Size of the rendered report in bytes
    pub fn len(&self) -> ContaResult<u64> {
        Ok(self.temp.as_file().metadata()?.len())
    }

    pub fn is_empty(&self) -> ContaResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Copy the report into `dir` under its suggested filename
    pub fn deliver(self, dir: &Path) -> ContaResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            ContaError::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let target = dir.join(&self.file_name);
        fs::copy(self.temp.path(), &target).map_err(|e| {
            ContaError::Export(format!("Failed to write {}: {}", target.display(), e))
        })?;
        Ok(target)
    }

    /// Stream the report to a writer, e.g. stdout
    pub fn write_to(&self, writer: &mut dyn Write) -> ContaResult<u64> {
        let mut file = self.temp.reopen()?;
        let copied = io::copy(&mut file, writer)?;
        writer.flush()?;
        Ok(copied)
    }
}
