//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_store_routes, health_routes};
use crate::core::StoreRepository;
use anyhow::{Result, anyhow};
use axum::Router;
use axum::http::HeaderValue;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the store API server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_repository(Arc::new(InMemoryStoreRepository::new()))
///     .serve("127.0.0.1:8080")
///     .await?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn StoreRepository>>,
    cors_origins: Vec<String>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            repository: None,
            cors_origins: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the repository backing the store routes (required)
    pub fn with_repository(mut self, repository: Arc<dyn StoreRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Allow cross-origin requests from these origins.
    ///
    /// `"*"` allows any origin. An empty list leaves CORS off.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Add routes that sit outside the store API
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// This merges the health routes, the store routes and any custom routes,
    /// then wraps them in request tracing (and CORS when configured).
    pub fn build(mut self) -> Result<Router> {
        let repository = self.repository.take().ok_or_else(|| {
            anyhow!("StoreRepository is required. Call .with_repository()")
        })?;

        let mut app = health_routes().merge(build_store_routes(AppState::new(repository)));
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        if let Some(cors) = self.cors_layer()? {
            app = app.layer(cors);
        }

        Ok(app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    fn cors_layer(&self) -> Result<Option<CorsLayer>> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        let allow_origin = if self.cors_origins.iter().any(|o| o == "*") {
            AllowOrigin::from(Any)
        } else {
            let origins = self
                .cors_origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o)
                        .map_err(|e| anyhow!("Invalid CORS origin '{}': {}", o, e))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(Some(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_methods(Any)
                .allow_headers(Any),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
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

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
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
