//! MCP transport adapters
//!
//! The server speaks MCP over stdio by default. With the `http` feature it
//! can also be mounted as a Streamable HTTP service in an Axum router.

use std::sync::Arc;

use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use crate::db::Database;

use super::server::McpServer;

/// Errors raised while running a transport.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("Failed to initialize MCP session: {message}")]
    #[diagnostic(code(todo_mcp::mcp::initialize))]
    Initialize { message: String },

    #[error("MCP service terminated abnormally: {message}")]
    #[diagnostic(code(todo_mcp::mcp::terminated))]
    Terminated { message: String },

    #[error("Transport I/O error: {0}")]
    #[diagnostic(code(todo_mcp::mcp::io))]
    Io(#[from] std::io::Error),
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio<D: Database + 'static>(db: Arc<D>) -> Result<(), ServiceError> {
    info!("Serving MCP over stdio");

    let service = McpServer::new(db)
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| ServiceError::Initialize {
            message: e.to_string(),
        })?;

    let reason = service.waiting().await.map_err(|e| ServiceError::Terminated {
        message: e.to_string(),
    })?;

    info!("MCP stdio session ended: {:?}", reason);
    Ok(())
}

#[cfg(feature = "http")]
pub use http::{HttpConfig, create_mcp_service, serve_http};

#[cfg(feature = "http")]
mod http {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use std::sync::Arc;

    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    };
    use tokio_util::sync::CancellationToken;
    use tower_http::trace::TraceLayer;
    use tracing::{info, warn};

    use super::ServiceError;
    use crate::db::Database;
    use crate::mcp::McpServer;

    /// HTTP transport configuration
    pub struct HttpConfig {
        /// Host address to bind to
        pub host: IpAddr,
        /// Port to listen on
        pub port: u16,
    }

    impl Default for HttpConfig {
        fn default() -> Self {
            Self {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 3000,
            }
        }
    }

    /// Create MCP Streamable HTTP service
    ///
    /// Every session gets its own `McpServer`, all sharing one database handle.
    ///
    /// # Example
    /// ```no_run
    /// use std::sync::Arc;
    /// use axum::Router;
    /// use tokio_util::sync::CancellationToken;
    /// # use todo_mcp::db::{Database, SqliteDatabase};
    /// # use todo_mcp::mcp::create_mcp_service;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = SqliteDatabase::in_memory().await?;
    /// db.migrate().await?;
    ///
    /// let ct = CancellationToken::new();
    /// let mcp_service = create_mcp_service(Arc::new(db), ct);
    ///
    /// let app: Router = Router::new().nest_service("/mcp", mcp_service);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_mcp_service<D: Database + 'static>(
        db: Arc<D>,
        cancellation_token: CancellationToken,
    ) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
        // Returns io::Error to match rmcp's expected signature
        let service_factory =
            move || -> Result<McpServer<D>, std::io::Error> { Ok(McpServer::new(Arc::clone(&db))) };

        let mut config = StreamableHttpServerConfig::default();
        config.stateful_mode = true;
        config.cancellation_token = cancellation_token;

        StreamableHttpService::new(
            service_factory,
            LocalSessionManager::default().into(),
            config,
        )
    }

    /// Serve MCP over Streamable HTTP at `/mcp` until Ctrl-C.
    pub async fn serve_http<D: Database + 'static>(
        config: HttpConfig,
        db: Arc<D>,
    ) -> Result<(), ServiceError> {
        let ct = CancellationToken::new();

        let app = Router::new()
            .nest_service("/mcp", create_mcp_service(db, ct.child_token()))
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::new(config.host, config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("MCP server listening on http://{}/mcp", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Failed to listen for shutdown signal: {}", e);
                }
                ct.cancel();
            })
            .await?;

        info!("MCP HTTP server stopped");
        Ok(())
    }
}
