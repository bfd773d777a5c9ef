//! Export service
//!
//! Runs the filter, totals the rows and renders them into a temp file in the
//! requested format. Render failures are returned as-is.

use std::io::{BufWriter, Write};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ContaResult;
use crate::export::{ExportFile, ReportFormat};
use crate::query::FilterParams;
use crate::reports::ReportData;
use crate::storage::RecordStore;

/// Service for report exports
pub struct ExportService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> ExportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Render the filtered accounts in `format`
    pub fn export(&self, format: ReportFormat, params: &FilterParams) -> ContaResult<ExportFile> {
        let data = ReportData::collect(self.store, params, format.order())?;

        let mut temp = tempfile::Builder::new().prefix("contas-").tempfile()?;
        render_into(&mut temp, format, &data)?;

        let export = ExportFile::new(format, data.len(), temp);
        info!(
            format = %format,
            rows = export.rows,
            total = %data.total,
            file_name = %export.file_name,
            "report rendered"
        );
        Ok(export)
    }
}

fn render_into(temp: &mut NamedTempFile, format: ReportFormat, data: &ReportData) -> ContaResult<()> {
    let mut writer = BufWriter::new(temp.as_file_mut());
    format.renderer().render(data, &mut writer)?;
    writer.flush()?;
    Ok(())
}
