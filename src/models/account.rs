//! Account model
//!
//! Represents a bill ("conta"): something owed with an amount, a due date
//! and a paid/pending status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dates::parse_date;
use super::ids::{AccountId, StatusId};
use super::money::Amount;
use super::status::Status;
use crate::error::{ContaError, ContaResult};

/// A bill record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier
    pub id: AccountId,

    /// Free-text label, used for substring search
    pub name: String,

    /// Amount owed
    pub amount: Amount,

    /// When the bill is due
    pub due_date: NaiveDate,

    /// Paid/pending classification
    pub status_id: StatusId,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a new account from validated fields and a freshly assigned id
    pub fn new(id: AccountId, fields: AccountFields) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: fields.name,
            amount: fields.amount,
            due_date: fields.due_date,
            status_id: fields.status_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field
    pub fn replace(&mut self, fields: AccountFields) {
        self.name = fields.name;
        self.amount = fields.amount;
        self.due_date = fields.due_date;
        self.status_id = fields.status_id;
        self.updated_at = Utc::now();
    }

    /// Move the account to another status
    pub fn set_status(&mut self, status_id: StatusId) {
        self.status_id = status_id;
        self.updated_at = Utc::now();
    }
}

/// The editable fields of an account, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub status_id: StatusId,
}

/// Raw mutation payload as typed by the user
///
/// Field names follow the form inputs: `nome`, `valor` (locale decimal such
/// as `1.500,00`), `vencimento` and `situacao_conta_id`. The payload is kept
/// verbatim so it can be shown back to the user when a mutation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInput {
    pub nome: String,
    pub valor: String,
    pub vencimento: String,
    pub situacao_conta_id: u64,
}

impl AccountInput {
    /// Normalize the payload into canonical field values
    pub fn normalize(&self) -> ContaResult<AccountFields> {
        let name = self.nome.trim();
        if name.is_empty() {
            return Err(ContaError::Validation("Account name cannot be empty".into()));
        }

        let amount = Amount::parse_locale(&self.valor)?;
        let due_date = parse_date(&self.vencimento)?;

        Ok(AccountFields {
            name: name.to_string(),
            amount,
            due_date,
            status_id: StatusId::new(self.situacao_conta_id),
        })
    }
}

impl From<&Account> for AccountInput {
    fn from(account: &Account) -> Self {
        Self {
            nome: account.name.clone(),
            valor: account.amount.format_locale(),
            vencimento: super::dates::format_br(account.due_date),
            situacao_conta_id: account.status_id.value(),
        }
    }
}

/// An account with its status eager-loaded for display and export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRecord {
    pub account: Account,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn rent_input() -> AccountInput {
        AccountInput {
            nome: "Rent".into(),
            valor: "1.500,00".into(),
            vencimento: "2024-03-01".into(),
            situacao_conta_id: 1,
        }
    }

    #[test]
    fn test_normalize_input() {
        let fields = rent_input().normalize().unwrap();
        assert_eq!(fields.name, "Rent");
        assert_eq!(fields.amount.value(), dec!(1500));
        assert_eq!(fields.due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(fields.status_id, StatusId::new(1));
    }

    #[test]
    fn test_normalize_rejects_empty_name() {
        let mut input = rent_input();
        input.nome = "  ".into();
        assert!(input.normalize().unwrap_err().is_validation());
    }

    #[test]
    fn test_normalize_rejects_bad_date() {
        let mut input = rent_input();
        input.vencimento = "tomorrow".into();
        assert!(matches!(
            input.normalize(),
            Err(ContaError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_replace_updates_timestamp() {
        let mut account = Account::new(AccountId::new(1), rent_input().normalize().unwrap());
        let created = account.created_at;

        let mut input = rent_input();
        input.nome = "Rent (April)".into();
        account.replace(input.normalize().unwrap());

        assert_eq!(account.name, "Rent (April)");
        assert_eq!(account.created_at, created);
        assert!(account.updated_at >= created);
    }

    #[test]
    fn test_input_from_account_round_trips() {
        let account = Account::new(AccountId::new(1), rent_input().normalize().unwrap());
        let input = AccountInput::from(&account);
        assert_eq!(input.valor, "1.500,00");
        assert_eq!(input.vencimento, "01/03/2024");
        assert_eq!(input.normalize().unwrap().due_date, account.due_date);
    }
}
