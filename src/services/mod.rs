//! Service layer for contas
//!
//! The service layer provides business logic on top of the storage layer:
//! payload validation, mutation outcomes, report exports and logging.

pub mod account;
pub mod export;
pub mod outcome;
pub mod status;

pub use account::AccountService;
pub use export::ExportService;
pub use outcome::{FailureKind, MutationFailure, MutationResult, MutationSuccess};
pub use status::StatusService;
