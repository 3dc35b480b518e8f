//! Tests for Todo MCP tools

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode, RawContent};

use crate::db::{Database, SqliteDatabase, Todo, TodoRepository};
use crate::mcp::McpServer;
use crate::mcp::tools::todos::{
    AddTodoParams, CompleteTodoParams, DeleteTodoParams, UpdateTodoTextParams, render_added,
    render_completed, render_deleted, render_list, render_updated,
};

async fn setup() -> (Arc<SqliteDatabase>, McpServer<SqliteDatabase>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    let db = Arc::new(db);
    let server = McpServer::new(Arc::clone(&db));
    (db, server)
}

fn lines(result: &CallToolResult) -> Vec<String> {
    result
        .content
        .iter()
        .map(|content| match &content.raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        })
        .collect()
}

fn todo(id: i64, text: &str, completed: bool) -> Todo {
    Todo {
        id,
        text: text.to_string(),
        completed,
    }
}

async fn add(server: &McpServer<SqliteDatabase>, title: &str) -> Vec<String> {
    let result = server
        .add_todo(Parameters(AddTodoParams {
            title: title.to_string(),
        }))
        .await
        .expect("add_todo should succeed");
    lines(&result)
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn render_list_empty_is_single_line() {
    assert_eq!(render_list(&[]), vec!["No TODOs found.".to_string()]);
}

#[test]
fn render_list_marks_completed_todos() {
    let rendered = render_list(&[todo(1, "buy milk", false), todo(2, "pay rent", true)]);
    assert_eq!(
        rendered,
        vec![
            "TODO: buy milk (id: 1)".to_string(),
            "TODO: pay rent (id: 2) [completed]".to_string(),
        ]
    );
}

#[test]
fn render_added_includes_id() {
    assert_eq!(
        render_added(&todo(5, "buy milk", false)),
        vec!["Added TODO: buy milk (id: 5)".to_string()]
    );
}

#[test]
fn render_completed_distinguishes_missing() {
    assert_eq!(
        render_completed(3, 1),
        vec!["TODO with id 3 marked as completed.".to_string()]
    );
    assert_eq!(
        render_completed(3, 0),
        vec!["TODO with id 3 not found.".to_string()]
    );
}

#[test]
fn render_deleted_and_updated_handle_absent() {
    assert_eq!(
        render_deleted(9, None),
        vec!["TODO with id 9 not found.".to_string()]
    );
    assert_eq!(
        render_updated(9, None),
        vec!["TODO with id 9 not found.".to_string()]
    );
    assert_eq!(
        render_updated(2, Some(&todo(2, "new", false))),
        vec!["Updated text for todo with id 2 to \"new\"".to_string()]
    );
}

// =============================================================================
// add_todo / list_todos
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_todos_empty() {
    let (_db, server) = setup().await;

    let result = server.list_todos().await.expect("list_todos should succeed");

    assert_eq!(lines(&result), vec!["No TODOs found."]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_todo_confirms_with_id() {
    let (db, server) = setup().await;

    assert_eq!(add(&server, "  buy milk ").await, vec!["Added TODO: buy milk (id: 1)"]);

    let stored = db.todos().list().await.unwrap();
    assert_eq!(stored, vec![todo(1, "buy milk", false)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_todo_rejects_blank_title() {
    let (db, server) = setup().await;

    for title in ["", "   "] {
        let err = server
            .add_todo(Parameters(AddTodoParams {
                title: title.to_string(),
            }))
            .await
            .expect_err("blank title should be rejected");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    assert!(db.todos().list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_todo_rejects_overlong_title() {
    let (_db, server) = setup().await;

    let err = server
        .add_todo(Parameters(AddTodoParams {
            title: "y".repeat(256),
        }))
        .await
        .expect_err("overlong title should be rejected");

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "validation_error");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_todos_one_line_per_todo() {
    let (_db, server) = setup().await;
    add(&server, "first").await;
    add(&server, "second").await;
    add(&server, "third").await;

    let result = server.list_todos().await.unwrap();

    assert_eq!(
        lines(&result),
        vec![
            "TODO: first (id: 1)",
            "TODO: second (id: 2)",
            "TODO: third (id: 3)",
        ]
    );
}

// =============================================================================
// complete_todo
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_complete_todo_is_idempotent() {
    let (_db, server) = setup().await;
    add(&server, "pay rent").await;

    for _ in 0..2 {
        let result = server
            .complete_todo(Parameters(CompleteTodoParams { id: 1 }))
            .await
            .expect("complete_todo should succeed");
        assert_eq!(lines(&result), vec!["TODO with id 1 marked as completed."]);
    }

    let listed = lines(&server.list_todos().await.unwrap());
    assert_eq!(listed, vec!["TODO: pay rent (id: 1) [completed]"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_complete_todo_missing_is_not_an_error() {
    let (_db, server) = setup().await;

    let result = server
        .complete_todo(Parameters(CompleteTodoParams { id: 404 }))
        .await
        .expect("missing id should render, not fail");

    assert_eq!(lines(&result), vec!["TODO with id 404 not found."]);
}

// =============================================================================
// delete_todo
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_todo_names_deleted_text() {
    let (db, server) = setup().await;
    add(&server, "water plants").await;

    let result = server
        .delete_todo(Parameters(DeleteTodoParams { id: 1 }))
        .await
        .unwrap();

    assert_eq!(lines(&result), vec!["Deleted TODO: water plants (id: 1)"]);
    assert!(db.todos().list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_todo_twice_reports_not_found() {
    let (_db, server) = setup().await;
    add(&server, "once").await;

    server
        .delete_todo(Parameters(DeleteTodoParams { id: 1 }))
        .await
        .unwrap();
    let result = server
        .delete_todo(Parameters(DeleteTodoParams { id: 1 }))
        .await
        .expect("second delete should render, not fail");

    assert_eq!(lines(&result), vec!["TODO with id 1 not found."]);
}

// =============================================================================
// update_todo_text
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_text_uses_trimmed_text() {
    let (db, server) = setup().await;
    add(&server, "old").await;

    let result = server
        .update_todo_text(Parameters(UpdateTodoTextParams {
            id: 1,
            text: " new ".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(lines(&result), vec!["Updated text for todo with id 1 to \"new\""]);
    assert_eq!(db.todos().list().await.unwrap()[0].text, "new");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_text_missing_is_not_an_error() {
    let (db, server) = setup().await;

    let result = server
        .update_todo_text(Parameters(UpdateTodoTextParams {
            id: 12,
            text: "ghost".to_string(),
        }))
        .await
        .expect("missing id should render, not fail");

    assert_eq!(lines(&result), vec!["TODO with id 12 not found."]);
    assert!(db.todos().list().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_text_validation_beats_not_found() {
    let (_db, server) = setup().await;

    // Invalid text on a missing id is still a hard failure
    let err = server
        .update_todo_text(Parameters(UpdateTodoTextParams {
            id: 12,
            text: "   ".to_string(),
        }))
        .await
        .expect_err("blank text should be rejected");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server
        .update_todo_text(Parameters(UpdateTodoTextParams {
            id: 0,
            text: "valid".to_string(),
        }))
        .await
        .expect_err("non-positive id should be rejected");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

// =============================================================================
// Storage failures
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_storage_failure_is_internal_error() {
    // Skip migrate so the todos table does not exist
    let db = SqliteDatabase::in_memory().await.unwrap();
    let server = McpServer::new(Arc::new(db));

    let err = server
        .list_todos()
        .await
        .expect_err("missing schema should fail");

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert_eq!(err.message, "database_error");
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_buy_milk_scenario() {
    let (_db, server) = setup().await;

    assert_eq!(add(&server, "buy milk").await, vec!["Added TODO: buy milk (id: 1)"]);
    assert_eq!(
        lines(&server.list_todos().await.unwrap()),
        vec!["TODO: buy milk (id: 1)"]
    );

    let completed = server
        .complete_todo(Parameters(CompleteTodoParams { id: 1 }))
        .await
        .unwrap();
    assert_eq!(lines(&completed), vec!["TODO with id 1 marked as completed."]);
    assert_eq!(
        lines(&server.list_todos().await.unwrap()),
        vec!["TODO: buy milk (id: 1) [completed]"]
    );

    let deleted = server
        .delete_todo(Parameters(DeleteTodoParams { id: 1 }))
        .await
        .unwrap();
    assert_eq!(lines(&deleted), vec!["Deleted TODO: buy milk (id: 1)"]);
    assert_eq!(
        lines(&server.list_todos().await.unwrap()),
        vec!["No TODOs found."]
    );
}
