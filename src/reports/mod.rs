//! Report data for contas
//!
//! Collects the filtered, ordered rows an export renders and sums them once.
//! `ReportTable` turns that data into the header, body and footer cells
//! shared by every output format.

pub mod table;

pub use table::{DateStyle, ReportTable, COLUMNS};

use tracing::debug;

use crate::error::ContaResult;
use crate::models::{AccountRecord, Amount};
use crate::query::{FilterParams, OrderBy};
use crate::storage::RecordStore;

/// Rows handed to a renderer together with their total
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub rows: Vec<AccountRecord>,
    /// Exact sum of `rows`' amounts
    pub total: Amount,
}

impl ReportData {
    /// Wrap already-selected rows, computing the total over exactly those rows
    pub fn new(rows: Vec<AccountRecord>) -> Self {
        let total = rows.iter().map(|r| r.account.amount).sum();
        Self { rows, total }
    }

    /// Run the filter against the store and total the result
    pub fn collect<S: RecordStore>(
        store: &S,
        params: &FilterParams,
        order: OrderBy,
    ) -> ContaResult<Self> {
        let spec = params.to_spec()?;
        let data = Self::new(store.query(&spec, order)?);
        debug!(rows = data.rows.len(), total = %data.total, "report data collected");
        Ok(data)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::{create_test_storage, seed};
    use rust_decimal::dec;

    #[test]
    fn test_total_is_exact() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "A", "0,10", "2024-03-01", 1);
        seed(&storage, "B", "0,20", "2024-03-02", 2);
        seed(&storage, "C", "1.234,50", "2024-03-03", 2);

        let data = ReportData::collect(&storage, &FilterParams::default(), OrderBy::DueDateAsc)
            .unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.total.value(), dec!(1234.80));
    }

    #[test]
    fn test_total_covers_only_filtered_rows() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);
        seed(&storage, "Water", "80,00", "2024-01-10", 2);

        let params = FilterParams {
            data_inicio: Some("2024-02-01".into()),
            ..Default::default()
        };
        let data = ReportData::collect(&storage, &params, OrderBy::DueDateAsc).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.total.value(), dec!(1500));
    }

    #[test]
    fn test_empty_report() {
        let data = ReportData::new(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.total, Amount::zero());
    }
}
