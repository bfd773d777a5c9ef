//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to contas.json and hands out
//! sequential ids.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::ContaError;
use crate::models::{Account, AccountFields, AccountId};
use crate::query::{FilterSpec, OrderBy};

use super::file_io::{load_table, save_table};

/// Serializable account data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AccountData {
    #[serde(default)]
    last_id: u64,
    accounts: Vec<Account>,
}

#[derive(Debug, Default)]
struct AccountTable {
    last_id: u64,
    rows: HashMap<AccountId, Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<AccountTable>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(AccountTable::default()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), ContaError> {
        let file_data: AccountData = load_table(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let highest = file_data
            .accounts
            .iter()
            .map(|a| a.id.value())
            .max()
            .unwrap_or(0);

        data.last_id = file_data.last_id.max(highest);
        data.rows.clear();
        for account in file_data.accounts {
            data.rows.insert(account.id, account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut accounts: Vec<Account> = data.rows.values().cloned().collect();
        accounts.sort_by_key(|a| a.id);

        let file_data = AccountData {
            last_id: data.last_id,
            accounts,
        };

        save_table(&self.path, &file_data)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.rows.get(&id).cloned())
    }

    /// Get every account matching the filter, in the requested order
    pub fn query(&self, filter: &FilterSpec, order: OrderBy) -> Result<Vec<Account>, ContaError> {
        let data = self
            .data
            .read()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut accounts: Vec<Account> = data
            .rows
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        accounts.sort_by(|a, b| order.compare(a, b));
        Ok(accounts)
    }

    /// Insert a new account under the next free id
    pub fn insert(&self, fields: AccountFields) -> Result<Account, ContaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = AccountId::new(data.last_id).next();
        let account = Account::new(id, fields);
        data.last_id = id.value();
        data.rows.insert(id, account.clone());
        Ok(account)
    }

    /// Replace an existing account
    pub fn update(&self, account: Account) -> Result<(), ContaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.rows.get_mut(&account.id) {
            Some(slot) => {
                *slot = account;
                Ok(())
            }
            None => Err(ContaError::account_not_found(account.id.to_string())),
        }
    }

    /// Delete an account, returning the removed row
    pub fn delete(&self, id: AccountId) -> Result<Account, ContaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ContaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.rows
            .remove(&id)
            .ok_or_else(|| ContaError::account_not_found(id.to_string()))
    }
}
