//! CSV rendering
//!
//! Semicolon-delimited so the comma decimal separator needs no quoting, and
//! encoded as ISO-8859-1 for spreadsheet tools that expect it.

use std::io::Write;

use tracing::debug;

use super::latin1::encode_lossy;
use super::Renderer;
use crate::error::ContaResult;
use crate::reports::{DateStyle, ReportData, ReportTable};

/// Renders `id;Nome;Vencimento;Situação;Valor` rows with a `;;;;<total>` footer
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(&self, data: &ReportData, out: &mut dyn Write) -> ContaResult<()> {
        let table = ReportTable::build(data, DateStyle::Iso);
        let mut writer = ::csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(out);

        let mut replaced = 0;
        for row in std::iter::once(&table.header)
            .chain(table.rows.iter())
            .chain(std::iter::once(&table.footer))
        {
            let mut record = Vec::with_capacity(row.len());
            for cell in row {
                let (bytes, lost) = encode_lossy(cell);
                replaced += lost;
                record.push(bytes);
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        if replaced > 0 {
            debug!(replaced, "characters outside ISO-8859-1 replaced in CSV export");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterParams, OrderBy};
    use crate::storage::tests::{create_test_storage, seed};

    fn render(data: &ReportData) -> Vec<u8> {
        let mut out = Vec::new();
        CsvRenderer.render(data, &mut out).unwrap();
        out
    }

    #[test]
    fn test_rent_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);

        let params = FilterParams {
            nome: None,
            data_inicio: Some("2024-02-01".into()),
            data_fim: Some("2024-03-31".into()),
        };
        let data = ReportData::collect(&storage, &params, OrderBy::DueDateAsc).unwrap();
        let out = render(&data);

        let mut expected = b"id;Nome;Vencimento;Situa\xE7\xE3o;Valor\n".to_vec();
        expected.extend_from_slice(b"1;Rent;2024-03-01;Paga;1.500,00\n");
        expected.extend_from_slice(b";;;;1.500,00\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_footer_sums_rows_in_due_order() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Later", "0,20", "2024-05-01", 2);
        seed(&storage, "Earlier", "0,10", "2024-04-01", 2);

        let data = ReportData::collect(&storage, &FilterParams::default(), OrderBy::DueDateAsc)
            .unwrap();
        let out = render(&data);
        let lines: Vec<&[u8]> = out.split(|b| *b == b'\n').collect();

        assert!(lines[1].starts_with(b"2;Earlier;"));
        assert!(lines[2].starts_with(b"1;Later;"));
        assert_eq!(lines[3], b";;;;0,30");
    }

    #[test]
    fn test_empty_report_has_header_and_zero_footer() {
        let out = render(&ReportData::new(Vec::new()));
        assert!(out.ends_with(b"Valor\n;;;;0,00\n"));
    }

    #[test]
    fn test_unmappable_name_is_replaced() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Luz ⚡", "10,00", "2024-03-01", 2);

        let data = ReportData::collect(&storage, &FilterParams::default(), OrderBy::DueDateAsc)
            .unwrap();
        let out = render(&data);
        assert!(out.windows(6).any(|w| w == b"Luz ?;"));
    }

    #[test]
    fn test_delimiter_in_name_is_quoted() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Gas; water", "10,00", "2024-03-01", 2);

        let data = ReportData::collect(&storage, &FilterParams::default(), OrderBy::DueDateAsc)
            .unwrap();
        let out = render(&data);
        assert!(out.windows(13).any(|w| w == b"\"Gas; water\";"));
    }
}
