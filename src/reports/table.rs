//! Tabular layout shared by the renderers

use crate::models::dates::{format_br, format_iso};
use crate::models::AccountRecord;

use super::ReportData;

/// Column headers, in output order
pub const COLUMNS: [&str; 5] = ["id", "Nome", "Vencimento", "Situação", "Valor"];

/// A row of cells, one per column
pub type Row = [String; 5];

/// How due dates are written in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD/MM/YYYY`
    Br,
}

impl DateStyle {
    fn format(self, date: chrono::NaiveDate) -> String {
        match self {
            DateStyle::Iso => format_iso(date),
            DateStyle::Br => format_br(date),
        }
    }
}

/// Header, body and footer cells for a report
///
/// The footer is four empty cells followed by the formatted total, so the
/// total lines up under the amount column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub header: Row,
    pub rows: Vec<Row>,
    pub footer: Row,
}

impl ReportTable {
    pub fn build(data: &ReportData, dates: DateStyle) -> Self {
        Self {
            header: COLUMNS.map(String::from),
            rows: data.rows.iter().map(|r| row(r, dates)).collect(),
            footer: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                data.total.format_locale(),
            ],
        }
    }

    /// Widest cell of each column, in characters
    pub fn column_widths(&self) -> [usize; 5] {
        let mut widths = [0usize; 5];
        for row in std::iter::once(&self.header)
            .chain(self.rows.iter())
            .chain(std::iter::once(&self.footer))
        {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn row(record: &AccountRecord, dates: DateStyle) -> Row {
    let account = &record.account;
    [
        account.id.to_string(),
        account.name.clone(),
        dates.format(account.due_date),
        record.status.name.clone(),
        account.amount.format_locale(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterParams, OrderBy};
    use crate::storage::tests::{create_test_storage, seed};

    #[test]
    fn test_rows_and_footer() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);

        let data = ReportData::collect(&storage, &FilterParams::default(), OrderBy::DueDateAsc)
            .unwrap();

        let iso = ReportTable::build(&data, DateStyle::Iso);
        assert_eq!(iso.header[3], "Situação");
        assert_eq!(iso.rows[0], ["1", "Rent", "2024-03-01", "Paga", "1.500,00"].map(String::from));
        assert_eq!(iso.footer, ["", "", "", "", "1.500,00"].map(String::from));

        let br = ReportTable::build(&data, DateStyle::Br);
        assert_eq!(br.rows[0][2], "01/03/2024");
    }

    #[test]
    fn test_column_widths_count_chars() {
        let data = ReportData::new(Vec::new());
        let table = ReportTable::build(&data, DateStyle::Br);
        // "Situação" is 8 characters but 10 bytes
        assert_eq!(table.column_widths(), [2, 4, 10, 8, 5]);
    }
}
