//! contas - Terminal-based bill management
//!
//! This library provides the core functionality for the contas application:
//! registering bills ("contas") with an amount, a due date and a paid/pending
//! status, listing them through name and due-date filters, and exporting the
//! filtered set as PDF, CSV or Word reports with a computed total.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, statuses, amounts, dates)
//! - `query`: Filter building, ordering and pagination
//! - `storage`: JSON file storage layer behind the `RecordStore` trait
//! - `services`: Business logic layer (mutations, lookups, exports)
//! - `reports`: Report rows, totals and the shared table layout
//! - `export`: PDF, CSV and Word renderers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: Subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use contas::config::paths::ContaPaths;
//! use contas::services::AccountService;
//! use contas::storage::Storage;
//!
//! let mut storage = Storage::new(ContaPaths::new()?)?;
//! storage.load_all()?;
//! let page = AccountService::new(&storage).list(&Default::default(), 1, 10)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ContaError, ContaResult};
