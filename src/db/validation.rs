//! Input validation for todo writes.

use crate::db::{DbError, DbResult, Id};

/// Maximum title length, in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 255;

/// Normalize a todo title, rejecting input the store must never hold.
///
/// Returns the trimmed title. When `id` is given (the update path) it must
/// be a positive integer.
pub fn validate_title(title: &str, id: Option<Id>) -> DbResult<String> {
    if let Some(id) = id
        && id <= 0
    {
        return Err(DbError::Validation {
            message: format!("Id must be a positive integer, got {}", id),
        });
    }

    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DbError::Validation {
            message: "Title cannot be empty or contain only whitespace".to_string(),
        });
    }

    let len = trimmed.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(DbError::Validation {
            message: format!(
                "Title must be at most {} characters, got {}",
                MAX_TITLE_LEN, len
            ),
        });
    }

    Ok(trimmed.to_string())
}
