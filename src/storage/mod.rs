//! Storage layer for contas
//!
//! Provides JSON file storage with atomic writes and the `RecordStore`
//! interface the services and reports are written against.

pub mod accounts;
pub mod file_io;
pub mod init;
pub mod statuses;

pub use accounts::AccountRepository;
pub use file_io::{load_table, save_table};
pub use init::initialize_storage;
pub use statuses::StatusRepository;

use std::collections::HashMap;

use crate::config::paths::ContaPaths;
use crate::error::{ContaError, ContaResult};
use crate::models::{Account, AccountFields, AccountId, AccountRecord, Status, StatusId};
use crate::query::{FilterSpec, OrderBy};

/// The store operations the rest of the crate relies on
///
/// Each mutation is a single-row operation that is either fully applied and
/// persisted or reported as an error.
pub trait RecordStore {
    /// Every account matching the filter, in order, with its status loaded
    fn query(&self, filter: &FilterSpec, order: OrderBy) -> ContaResult<Vec<AccountRecord>>;

    /// One account by id
    fn get(&self, id: AccountId) -> ContaResult<Option<Account>>;

    /// Insert a new account and return it with its assigned id
    fn insert(&self, fields: AccountFields) -> ContaResult<Account>;

    /// Replace an existing account; fails if the id is unknown
    fn update(&self, account: Account) -> ContaResult<()>;

    /// Hard-delete an account; fails if the id is unknown
    fn delete(&self, id: AccountId) -> ContaResult<Account>;

    /// One status by id
    fn status(&self, id: StatusId) -> ContaResult<Option<Status>>;

    /// All statuses, alphabetical by name
    fn statuses(&self) -> ContaResult<Vec<Status>>;

    /// One account with its status loaded
    fn get_record(&self, id: AccountId) -> ContaResult<Option<AccountRecord>> {
        let Some(account) = self.get(id)? else {
            return Ok(None);
        };
        let status = self.status(account.status_id)?.ok_or_else(|| dangling(&account))?;
        Ok(Some(AccountRecord { account, status }))
    }
}

fn dangling(account: &Account) -> ContaError {
    ContaError::Storage(format!(
        "Account {} references missing status {}",
        account.id, account.status_id
    ))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ContaPaths,
    pub accounts: AccountRepository,
    pub statuses: StatusRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContaPaths) -> Result<Self, ContaError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            statuses: StatusRepository::new(paths.statuses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContaPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ContaError> {
        self.accounts.load()?;
        self.statuses.load()?;
        Ok(())
    }

    /// Check if storage has been initialized (status table exists)
    pub fn is_initialized(&self) -> bool {
        !init::needs_initialization(&self.paths)
    }
}

impl RecordStore for Storage {
    fn query(&self, filter: &FilterSpec, order: OrderBy) -> ContaResult<Vec<AccountRecord>> {
        let statuses: HashMap<StatusId, Status> = self
            .statuses
            .get_all()?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        self.accounts
            .query(filter, order)?
            .into_iter()
            .map(|account| {
                let status = statuses
                    .get(&account.status_id)
                    .cloned()
                    .ok_or_else(|| dangling(&account))?;
                Ok(AccountRecord { account, status })
            })
            .collect()
    }

    fn get(&self, id: AccountId) -> ContaResult<Option<Account>> {
        self.accounts.get(id)
    }

    fn insert(&self, fields: AccountFields) -> ContaResult<Account> {
        let account = self.accounts.insert(fields)?;
        self.accounts.save()?;
        Ok(account)
    }

    fn update(&self, account: Account) -> ContaResult<()> {
        self.accounts.update(account)?;
        self.accounts.save()
    }

    fn delete(&self, id: AccountId) -> ContaResult<Account> {
        let removed = self.accounts.delete(id)?;
        self.accounts.save()?;
        Ok(removed)
    }

    fn status(&self, id: StatusId) -> ContaResult<Option<Status>> {
        self.statuses.get(id)
    }

    fn statuses(&self) -> ContaResult<Vec<Status>> {
        self.statuses.get_all()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::AccountInput;
    use tempfile::TempDir;

    /// Initialized storage in a temp dir with the default statuses
    pub(crate) fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContaPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    /// Insert an account straight into the store
    pub(crate) fn seed(storage: &Storage, name: &str, valor: &str, due: &str, status: u64) -> Account {
        let fields = AccountInput {
            nome: name.into(),
            valor: valor.into(),
            vencimento: due.into(),
            situacao_conta_id: status,
        }
        .normalize()
        .unwrap();
        storage.insert(fields).unwrap()
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_query_eager_loads_status() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);

        let records = storage.query(&FilterSpec::all(), OrderBy::DueDateAsc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status.name, "Paga");
    }

    #[test]
    fn test_query_with_dangling_status_fails() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "Orphan", "1,00", "2024-03-01", 9);

        let result = storage.query(&FilterSpec::all(), OrderBy::DueDateAsc);
        assert!(matches!(result, Err(ContaError::Storage(_))));
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (temp_dir, storage) = create_test_storage();
        let account = seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);

        let mut reloaded = Storage::new(ContaPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.get(account.id).unwrap(), Some(account.clone()));

        storage.delete(account.id).unwrap();
        reloaded.load_all().unwrap();
        assert!(reloaded.get(account.id).unwrap().is_none());
    }

    #[test]
    fn test_get_record() {
        let (_temp_dir, storage) = create_test_storage();
        let account = seed(&storage, "Water", "80,00", "2024-03-10", 2);

        let record = storage.get_record(account.id).unwrap().unwrap();
        assert_eq!(record.status.name, "Pendente");
        assert!(storage.get_record(AccountId::new(404)).unwrap().is_none());
    }
}
