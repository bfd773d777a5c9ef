//! Filter building for account listing and exports
//!
//! `FilterParams` holds the raw parameters exactly as the caller supplied
//! them; `FilterSpec` is the parsed predicate the store evaluates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ContaResult;
use crate::models::dates::parse_date;
use crate::models::Account;

/// Raw filter parameters: `nome`, `data_inicio`, `data_fim`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub nome: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

impl FilterParams {
    /// Parse into a predicate
    ///
    /// The name filter applies whenever the parameter is present, even when it
    /// is empty (an empty substring matches every account). Date bounds apply
    /// only when filled; a filled but malformed date is an error.
    pub fn to_spec(&self) -> ContaResult<FilterSpec> {
        Ok(FilterSpec {
            name: self.nome.clone(),
            due_after: parse_filled(self.data_inicio.as_deref())?,
            due_before: parse_filled(self.data_fim.as_deref())?,
        })
    }

    /// The supplied parameters as command-line flags, e.g.
    /// `--nome "luz" --data-inicio "2024-01-01"`; empty when none were given
    pub fn to_flags(&self) -> String {
        [
            ("--nome", &self.nome),
            ("--data-inicio", &self.data_inicio),
            ("--data-fim", &self.data_fim),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.as_deref().map(|v| format!("{} {:?}", flag, v)))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

fn parse_filled(value: Option<&str>) -> ContaResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_date(v).map(Some),
        _ => Ok(None),
    }
}

/// A conjunctive predicate over accounts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring of the account name
    pub name: Option<String>,
    /// Inclusive lower bound on the due date
    pub due_after: Option<NaiveDate>,
    /// Inclusive upper bound on the due date
    pub due_before: Option<NaiveDate>,
}

impl FilterSpec {
    /// A predicate matching every account
    pub fn all() -> Self {
        Self::default()
    }

    /// Check if an account satisfies every present constraint
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(ref name) = self.name {
            if !account.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(start) = self.due_after {
            if account.due_date < start {
                return false;
            }
        }
        if let Some(end) = self.due_before {
            if account.due_date > end {
                return false;
            }
        }
        true
    }
}
