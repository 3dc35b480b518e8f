//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the tool layer.
//!
//! Not-found is a normal outcome here: `complete` reports a zero row count
//! and `delete`/`update_text` return `Ok(None)`. Only malformed input and
//! storage failures are errors.

use std::future::Future;

use crate::db::{DbResult, Id, Todo};

/// Repository for Todo operations.
pub trait TodoRepository: Send + Sync {
    /// Validate and insert a new todo, returning it with its assigned ID.
    fn add(&self, text: &str) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get all todos ordered by ascending ID.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Mark a todo as completed. Returns the number of affected rows (0 or 1).
    fn complete(&self, id: Id) -> impl Future<Output = DbResult<u64>> + Send;

    /// Delete a todo, returning its snapshot from before the deletion.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Validate and replace the text of a todo, returning the updated snapshot.
    fn update_text(
        &self,
        id: Id,
        text: &str,
    ) -> impl Future<Output = DbResult<Option<Todo>>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Create the schema if it does not exist yet.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;

    /// Release all connections held by the store.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
