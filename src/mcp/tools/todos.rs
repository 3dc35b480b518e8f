//! MCP tools for Todo management.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{Database, Id, Todo, TodoRepository};
use crate::mcp::McpServer;
use crate::mcp::tools::{map_db_error, text_result};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddTodoParams {
    #[schemars(description = "Title of the task to add (1-255 characters after trimming)")]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTodoParams {
    #[schemars(description = "ID of the TODO to mark as completed")]
    pub id: Id,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoParams {
    #[schemars(description = "ID of the TODO to delete")]
    pub id: Id,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoTextParams {
    #[schemars(description = "ID of the TODO to update (positive integer)")]
    pub id: Id,
    #[schemars(description = "New text for the TODO (1-255 characters after trimming)")]
    pub text: String,
}

// =============================================================================
// Rendering
// =============================================================================

fn not_found(id: Id) -> String {
    format!("TODO with id {} not found.", id)
}

pub(crate) fn render_added(todo: &Todo) -> Vec<String> {
    vec![format!("Added TODO: {} (id: {})", todo.text, todo.id)]
}

pub(crate) fn render_list(todos: &[Todo]) -> Vec<String> {
    if todos.is_empty() {
        return vec!["No TODOs found.".to_string()];
    }

    todos
        .iter()
        .map(|todo| {
            let marker = if todo.completed { " [completed]" } else { "" };
            format!("TODO: {} (id: {}){}", todo.text, todo.id, marker)
        })
        .collect()
}

pub(crate) fn render_completed(id: Id, changes: u64) -> Vec<String> {
    if changes == 0 {
        return vec![not_found(id)];
    }
    vec![format!("TODO with id {} marked as completed.", id)]
}

pub(crate) fn render_deleted(id: Id, deleted: Option<&Todo>) -> Vec<String> {
    match deleted {
        Some(todo) => vec![format!("Deleted TODO: {} (id: {})", todo.text, todo.id)],
        None => vec![not_found(id)],
    }
}

pub(crate) fn render_updated(id: Id, updated: Option<&Todo>) -> Vec<String> {
    match updated {
        Some(todo) => vec![format!(
            "Updated text for todo with id {} to \"{}\"",
            todo.id, todo.text
        )],
        None => vec![not_found(id)],
    }
}

// =============================================================================
// Todo Tools
// =============================================================================

#[tool_router(router = todo_tool_router, vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    #[tool(
        description = "Add a new TODO item to the list. Provide a title for the task you want to add. Returns a confirmation message with the new TODO id."
    )]
    #[instrument(skip_all)]
    pub async fn add_todo(
        &self,
        params: Parameters<AddTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .db
            .todos()
            .add(&params.0.title)
            .await
            .map_err(map_db_error)?;

        Ok(text_result(render_added(&todo)))
    }

    #[tool(
        description = "List all TODO items. Returns a formatted list of all tasks with their ids, titles, and completion status."
    )]
    #[instrument(skip_all)]
    pub async fn list_todos(&self) -> Result<CallToolResult, McpError> {
        let todos = self.db.todos().list().await.map_err(map_db_error)?;

        Ok(text_result(render_list(&todos)))
    }

    #[tool(
        description = "Mark a TODO item as completed. Provide the id of the task to mark as done. Returns a confirmation message, or a not found message if the id does not exist."
    )]
    #[instrument(skip_all, fields(id = params.0.id))]
    pub async fn complete_todo(
        &self,
        params: Parameters<CompleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        let changes = self.db.todos().complete(id).await.map_err(map_db_error)?;

        Ok(text_result(render_completed(id, changes)))
    }

    #[tool(
        description = "Delete a TODO item from the list. Provide the id of the task to delete. Returns a confirmation message, or a not found message if the id does not exist."
    )]
    #[instrument(skip_all, fields(id = params.0.id))]
    pub async fn delete_todo(
        &self,
        params: Parameters<DeleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        let deleted = self.db.todos().delete(id).await.map_err(map_db_error)?;

        Ok(text_result(render_deleted(id, deleted.as_ref())))
    }

    #[tool(
        description = "Update the text of a TODO item. Provide the id of the todo and the new text."
    )]
    #[instrument(skip_all, fields(id = params.0.id))]
    pub async fn update_todo_text(
        &self,
        params: Parameters<UpdateTodoTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateTodoTextParams { id, text } = params.0;
        let updated = self
            .db
            .todos()
            .update_text(id, &text)
            .await
            .map_err(map_db_error)?;

        Ok(text_result(render_updated(id, updated.as_ref())))
    }
}
