//! Domain models for the todo database.
//!
//! These models are storage-agnostic. Repositories hand out owned copies,
//! so callers can never mutate the stored row through them.

use serde::{Deserialize, Serialize};

/// Integer ID assigned by the store; never reused.
pub type Id = i64;

/// A single task on the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Id,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
