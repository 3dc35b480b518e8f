//! Todo MCP server binary.
//!
//! This binary creates the concrete database implementation and hands it to
//! the MCP transport. The tool layer remains agnostic of the storage backend.

#[cfg(feature = "http")]
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use thiserror::Error;
use todo_mcp::db::{Database, DbError, SqliteDatabase};
use todo_mcp::mcp::{self, ServiceError};
use todo_mcp::paths::get_db_path;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todo_mcp::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todo_mcp::binary::io))]
    Io(#[from] std::io::Error),

    #[error("MCP service error: {0}")]
    #[diagnostic(code(todo_mcp::binary::service))]
    Service(#[from] ServiceError),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP over Streamable HTTP at /mcp
    #[cfg(feature = "http")]
    Http,
}

#[derive(Parser)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "Persistent TODO list MCP server", long_about = None)]
struct Cli {
    /// Database file path (defaults to XDG data directory: ~/.local/share/todo-mcp/todos.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[cfg(feature = "http")]
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[cfg(feature = "http")]
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr: stdout belongs to the stdio transport.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let db_path = cli.db.unwrap_or_else(get_db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;
    db.migrate().await?;
    let db = Arc::new(db);

    let served = match cli.transport {
        Transport::Stdio => mcp::serve_stdio(Arc::clone(&db)).await,
        #[cfg(feature = "http")]
        Transport::Http => {
            let config = mcp::HttpConfig {
                host: cli.host,
                port: cli.port,
            };
            mcp::serve_http(config, Arc::clone(&db)).await
        }
    };

    // Close the pool even when the transport failed
    db.close().await;
    info!("Database closed");

    served?;
    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    run(cli).await?;
    Ok(())
}
