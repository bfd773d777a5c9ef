//! Query building: filters, ordering and pagination

pub mod filter;
pub mod page;

pub use filter::{FilterParams, FilterSpec};
pub use page::Page;

use std::cmp::Ordering;

use crate::models::Account;

/// Result ordering requested from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    /// Most recently created first (listing and PDF export)
    CreatedDesc,
    /// Earliest due date first (CSV and Word exports)
    DueDateAsc,
}

impl OrderBy {
    /// Compare two accounts, breaking ties on id so the order is stable
    pub fn compare(self, a: &Account, b: &Account) -> Ordering {
        match self {
            OrderBy::CreatedDesc => b
                .created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id)),
            OrderBy::DueDateAsc => a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)),
        }
    }
}
