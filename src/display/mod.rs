//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts and statuses as tables and
//! detail views.

pub mod account;
pub mod status;

pub use account::{format_account_details, format_account_page};
pub use status::format_status_list;
