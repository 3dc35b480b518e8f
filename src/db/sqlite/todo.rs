//! SQLite TodoRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::db::{DbError, DbResult, Id, Todo, TodoRepository, validate_title};

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn add(&self, text: &str) -> DbResult<Todo> {
        info!("Adding TODO: {}", text);
        let text = validate_title(text, None)?;

        let row = sqlx::query(
            "INSERT INTO todos (text) VALUES (?) RETURNING id, text, completed",
        )
        .bind(&text)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        row_to_todo(&row)
    }

    async fn list(&self) -> DbResult<Vec<Todo>> {
        info!("Listing all TODOs");

        let rows = sqlx::query("SELECT id, text, completed FROM todos ORDER BY id ASC")
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn complete(&self, id: Id) -> DbResult<u64> {
        info!("Completing TODO: {}", id);

        // SQLite counts matched rows, so re-completing still reports 1
        let result = sqlx::query("UPDATE todos SET completed = 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Id) -> DbResult<Option<Todo>> {
        info!("Deleting TODO: {}", id);

        let row = sqlx::query("DELETE FROM todos WHERE id = ? RETURNING id, text, completed")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        row.as_ref().map(row_to_todo).transpose()
    }

    async fn update_text(&self, id: Id, text: &str) -> DbResult<Option<Todo>> {
        info!("Updating TODO {}: {}", id, text);
        let text = validate_title(text, Some(id))?;

        let row = sqlx::query(
            "UPDATE todos SET text = ? WHERE id = ? RETURNING id, text, completed",
        )
        .bind(&text)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        row.as_ref().map(row_to_todo).transpose()
    }
}

/// Convert a database row to a Todo model.
fn row_to_todo(row: &sqlx::sqlite::SqliteRow) -> DbResult<Todo> {
    let decode = |e: sqlx::Error| DbError::Database {
        message: e.to_string(),
    };

    Ok(Todo {
        id: row.try_get("id").map_err(decode)?,
        text: row.try_get("text").map_err(decode)?,
        completed: row.try_get("completed").map_err(decode)?,
    })
}
