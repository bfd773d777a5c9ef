//! Mutation outcomes
//!
//! Every mutation reports back either a success carrying the affected value
//! and a message for the user, or a failure carrying a generic message, the
//! reason it failed and the input the user typed, so the caller can show the
//! form again with the same values.

use std::fmt;

use crate::error::ContaError;
use crate::models::AccountInput;

/// A completed mutation
#[derive(Debug, Clone)]
pub struct MutationSuccess<T> {
    pub value: T,
    pub message: &'static str,
}

/// Why a mutation did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The payload was rejected before the store was touched
    Validation,
    /// The store refused or failed the operation
    Persistence,
    /// A status toggle was requested for a status outside paid/pending
    UnsupportedStatus,
}

/// A mutation that was caught and reported at the service boundary
#[derive(Debug)]
pub struct MutationFailure {
    pub kind: FailureKind,
    /// User-facing message; never contains internal error detail
    pub message: String,
    /// The caller's original input, when there was one
    pub input: Option<AccountInput>,
    /// Underlying error, for logging
    pub source: ContaError,
}

impl MutationFailure {
    pub(crate) fn new(
        message: &'static str,
        source: ContaError,
        input: Option<AccountInput>,
    ) -> Self {
        let kind = if source.is_validation() {
            FailureKind::Validation
        } else if matches!(source, ContaError::UnsupportedStatus(_)) {
            FailureKind::UnsupportedStatus
        } else {
            FailureKind::Persistence
        };

        // Validation problems are the user's to fix, so they are shown as-is
        let message = match kind {
            FailureKind::Validation => format!("{} {}", message, source),
            _ => message.to_string(),
        };

        Self {
            kind,
            message,
            input,
            source,
        }
    }

    pub fn is_persistence(&self) -> bool {
        self.kind == FailureKind::Persistence
    }
}

impl fmt::Display for MutationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MutationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result of a mutation
pub type MutationResult<T> = Result<MutationSuccess<T>, MutationFailure>;
