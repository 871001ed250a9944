//! Submission gate between a [`Draft`] and the store.

use thiserror::Error;

use crate::models::{Draft, Idea};

/// Why a draft was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("idea name must be filled in")]
    EmptyName,
}

/// Accept a draft as an [`Idea`].
///
/// Only the name is checked: it must contain something other than
/// whitespace. RICE inputs may be unset or out of range. The name is stored
/// untrimmed.
pub fn validate_submission(draft: Draft) -> Result<Idea, ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(Idea::from_checked(draft))
}
