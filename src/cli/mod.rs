//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod export;
pub mod status;

pub use account::{handle_account_command, AccountCommands};
pub use export::{handle_export_command, ExportArgs};
pub use status::{handle_status_command, StatusCommands};
