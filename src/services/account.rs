//! Account service
//!
//! Provides the account operations: filtered listing, lookup, and the four
//! mutations (create, update, delete, toggle status). Mutations never
//! propagate errors; they are logged and turned into a `MutationFailure`.

use tracing::{info, warn};

use crate::error::{ContaError, ContaResult};
use crate::models::{Account, AccountFields, AccountId, AccountInput, AccountRecord};
use crate::query::{FilterParams, OrderBy, Page};
use crate::storage::RecordStore;

use super::outcome::{MutationFailure, MutationResult, MutationSuccess};

/// Service for account management
pub struct AccountService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> AccountService<'a, S> {
    /// Create a new account service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// One page of accounts matching the filter, newest first
    pub fn list(
        &self,
        params: &FilterParams,
        page: usize,
        per_page: usize,
    ) -> ContaResult<Page<AccountRecord>> {
        let spec = params.to_spec()?;
        let records = self.store.query(&spec, OrderBy::CreatedDesc)?;
        Ok(Page::paginate(records, page, per_page, params.clone()))
    }

    /// An account with its status
    pub fn show(&self, id: AccountId) -> ContaResult<AccountRecord> {
        self.store
            .get_record(id)?
            .ok_or_else(|| ContaError::account_not_found(id.to_string()))
    }

    /// Create a new account from the user's payload
    pub fn create(&self, input: AccountInput) -> MutationResult<Account> {
        match self.validate(&input).and_then(|fields| self.store.insert(fields)) {
            Ok(account) => {
                info!(account_id = %account.id, name = %account.name, "account created");
                Ok(MutationSuccess {
                    value: account,
                    message: "Conta cadastrada com sucesso",
                })
            }
            Err(e) => {
                warn!(error = %e, "account not created");
                Err(MutationFailure::new("Conta não cadastrada!", e, Some(input)))
            }
        }
    }

    /// Replace every editable field of an account
    pub fn update(&self, id: AccountId, input: AccountInput) -> MutationResult<Account> {
        let result = self.validate(&input).and_then(|fields| {
            let mut account = self.require(id)?;
            account.replace(fields);
            self.store.update(account.clone())?;
            Ok(account)
        });

        match result {
            Ok(account) => {
                info!(account_id = %account.id, account = ?account, "account updated");
                Ok(MutationSuccess {
                    value: account,
                    message: "Conta editada com sucesso",
                })
            }
            Err(e) => {
                warn!(account_id = %id, error = %e, "account not updated");
                Err(MutationFailure::new("Conta não editada!", e, Some(input)))
            }
        }
    }

    /// Hard-delete an account
    ///
    /// Deleting an id that does not exist is a failure, not a silent no-op.
    pub fn delete(&self, id: AccountId) -> MutationResult<Account> {
        match self.store.delete(id) {
            Ok(account) => {
                info!(account_id = %account.id, name = %account.name, "account deleted");
                Ok(MutationSuccess {
                    value: account,
                    message: "Conta apagada com sucesso",
                })
            }
            Err(e) => {
                warn!(account_id = %id, error = %e, "account not deleted");
                Err(MutationFailure::new("Conta não apagada!", e, None))
            }
        }
    }

    /// Flip an account between paid and pending
    pub fn toggle_status(&self, id: AccountId) -> MutationResult<Account> {
        let result = self.require(id).and_then(|mut account| {
            let target = account.status_id.toggled()?;
            self.require_status(target)?;
            account.set_status(target);
            self.store.update(account.clone())?;
            Ok(account)
        });

        match result {
            Ok(account) => {
                info!(
                    account_id = %account.id,
                    status_id = %account.status_id,
                    "account status toggled"
                );
                Ok(MutationSuccess {
                    value: account,
                    message: "Situação da conta editada com sucesso!",
                })
            }
            Err(e) => {
                warn!(account_id = %id, error = %e, "account status not toggled");
                Err(MutationFailure::new("Situação da conta não editada!", e, None))
            }
        }
    }

    fn validate(&self, input: &AccountInput) -> ContaResult<AccountFields> {
        let fields = input.normalize()?;
        if self.store.status(fields.status_id)?.is_none() {
            return Err(ContaError::Validation(format!(
                "Unknown status: {}",
                fields.status_id
            )));
        }
        Ok(fields)
    }

    fn require(&self, id: AccountId) -> ContaResult<Account> {
        self.store
            .get(id)?
            .ok_or_else(|| ContaError::account_not_found(id.to_string()))
    }

    fn require_status(&self, id: crate::models::StatusId) -> ContaResult<()> {
        match self.store.status(id)? {
            Some(_) => Ok(()),
            None => Err(ContaError::status_not_found(id.to_string())),
        }
    }
}
