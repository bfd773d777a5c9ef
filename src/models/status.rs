//! Status model
//!
//! Statuses ("situações") classify accounts. Two of them are well known:
//! id 1 is paid and id 2 is pending, and toggling an account flips between
//! them.

use serde::{Deserialize, Serialize};

use super::ids::StatusId;
use crate::error::{ContaError, ContaResult};

/// Well-known status: the bill has been paid
pub const PAID: StatusId = StatusId::new(1);

/// Well-known status: the bill is still pending
pub const PENDING: StatusId = StatusId::new(2);

/// A status reference row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
}

impl Status {
    pub fn new(id: StatusId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The statuses seeded on initialization
    pub fn defaults() -> Vec<Status> {
        vec![Status::new(PAID, "Paga"), Status::new(PENDING, "Pendente")]
    }
}

impl StatusId {
    /// The status an account moves to when toggled
    ///
    /// Only paid and pending take part in the toggle; any other status is
    /// rejected rather than guessed.
    pub fn toggled(self) -> ContaResult<StatusId> {
        match self {
            PAID => Ok(PENDING),
            PENDING => Ok(PAID),
            other => Err(ContaError::UnsupportedStatus(other)),
        }
    }
}
