//! HTTP server for bindcheck

use axum::{routing::get, Router};
use bindcheck_core::{BindcheckError, ServerConfig};
use bindcheck_parser::{vcap, BindingResolver, EnvSource};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::connectors::{Connector, MySqlConnector};
use crate::executor::ProbeExecutor;
use crate::handlers::IndexHandler;
use crate::state::AppState;

/// Runtime server for bindcheck
pub struct Runtime {
    config: ServerConfig,
    executor: Arc<ProbeExecutor>,
}

impl Runtime {
    /// Create a runtime that reads the process environment and talks MySQL
    pub fn new(config: ServerConfig) -> Self {
        Self::with_connector(config, EnvSource::process(), Arc::new(MySqlConnector::new()))
    }

    /// Create a runtime with an explicit environment and connector
    pub fn with_connector(
        config: ServerConfig,
        env: EnvSource,
        connector: Arc<dyn Connector>,
    ) -> Self {
        let resolver = BindingResolver::new(config.service.clone());
        let executor = Arc::new(ProbeExecutor::new(resolver, env, connector));
        Self { config, executor }
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(IndexHandler::handle))
            .route("/health", get(Self::health_check))
            .with_state(AppState::new(self.executor.clone()))
            .layer(TraceLayer::new_for_http())
    }

    /// Health check endpoint
    async fn health_check() -> &'static str {
        "OK"
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), BindcheckError> {
        let addr = self.config.socket_addr();
        let app = self.build_router();

        if let Some(application) = vcap::application(self.executor.env()) {
            info!(
                "Application: {}",
                application.application_name.as_deref().unwrap_or("<unknown>")
            );
        }
        info!("Starting bindcheck server on http://{}", addr);
        info!(
            "Service binding: {} ({})",
            self.executor.service(),
            self.executor.connector_type()
        );

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| BindcheckError::Server(format!("Failed to bind {}: {}", addr, e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| BindcheckError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the executor
    pub fn executor(&self) -> &ProbeExecutor {
        &self.executor
    }
}
