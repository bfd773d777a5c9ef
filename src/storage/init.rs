//! Storage initialization
//!
//! Handles first-run setup: directories plus the well-known statuses.

use crate::config::paths::ContaPaths;
use crate::error::ContaError;
use crate::models::Status;

use super::statuses::StatusRepository;

/// Initialize storage for a fresh installation
///
/// Seeds the paid/pending statuses when no status table exists yet. An
/// existing table is left untouched.
pub fn initialize_storage(paths: &ContaPaths) -> Result<(), ContaError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let repo = StatusRepository::new(paths.statuses_file());
        for status in Status::defaults() {
            repo.upsert(status)?;
        }
        repo.save()?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ContaPaths) -> bool {
    !paths.statuses_file().exists()
}
