//! Core data models for contas
//!
//! Bills, their statuses, typed ids, exact amounts and date helpers.

pub mod account;
pub mod dates;
pub mod ids;
pub mod money;
pub mod status;

pub use account::{Account, AccountFields, AccountInput, AccountRecord};
pub use ids::{AccountId, StatusId};
pub use money::Amount;
pub use status::Status;
