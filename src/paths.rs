//! Path resolution for the todo database.
//!
//! Provides XDG-compliant path resolution.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "todo-mcp";
const DB_FILE: &str = "todos.db";

/// Get XDG-compliant data directory for todo-mcp.
///
/// Uses `$XDG_DATA_HOME/todo-mcp`, then `$HOME/.local/share/todo-mcp`.
/// Falls back to the current directory when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

/// Get database file path (data_dir/todos.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE)
}

fn resolve_data_dir(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(data_home), _) if !data_home.as_os_str().is_empty() => data_home.join(APP_DIR),
        (_, Some(home)) => home.join(".local/share").join(APP_DIR),
        _ => PathBuf::from("."),
    }
}
