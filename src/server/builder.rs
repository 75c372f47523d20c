//! ServerBuilder for fluent API to build HTTP servers

use super::router::build_app_routes;
use crate::apps::handlers::AppState;
use crate::config::ServerConfig;
use crate::core::QueryableStore;
use anyhow::Result;
use axum::Router;
use axum::http::Method;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for creating the catalog HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryAppStore::bundled()?)
///     .with_config(ServerConfig::load()?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn QueryableStore>>,
    config: ServerConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            store: None,
            config: ServerConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the catalog store (required)
    pub fn with_store(mut self, store: impl QueryableStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared catalog store
    pub fn with_shared_store(mut self, store: Arc<dyn QueryableStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes are merged next to `/apps` and get the same tracing and
    /// CORS layers.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// This generates:
    /// - `/apps` and health routes bound to the store
    /// - custom routes
    /// - CORS layer (when enabled) and HTTP request tracing
    pub fn build(mut self) -> Result<Router> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("QueryableStore is required. Call .with_store()"))?;

        let state = AppState {
            store,
            config: Arc::new(self.config.clone()),
        };

        let mut app = build_app_routes(state);
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        if self.config.cors {
            app = app.layer(cors_layer());
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_store(store)
    ///     .serve("127.0.0.1:8000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Any origin, read-only methods
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
