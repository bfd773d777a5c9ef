//! Status service
//!
//! Read-only access to the status table, mainly for the picker shown when
//! creating or editing an account.

use crate::error::ContaResult;
use crate::models::Status;
use crate::storage::RecordStore;

/// Service for status lookups
pub struct StatusService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> StatusService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every status, alphabetical by name
    pub fn picker(&self) -> ContaResult<Vec<Status>> {
        self.store.statuses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusId;
    use crate::storage::tests::create_test_storage;

    #[test]
    fn test_picker_is_alphabetical() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .statuses
            .upsert(Status::new(StatusId::new(3), "Atrasada"))
            .unwrap();

        let names: Vec<String> = StatusService::new(&storage)
            .picker()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Atrasada", "Paga", "Pendente"]);
    }
}
