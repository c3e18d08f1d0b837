//! Probe execution module
//!
//! Runs one resolve, connect, query, close cycle per call.

use bindcheck_core::{BindcheckError, ErrorKind};
use bindcheck_parser::{BindingResolver, EnvSource};
use bindcheck_types::ProbeResponse;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::connectors::Connector;

/// Statement used to prove the connection works
pub const TIME_QUERY: &str = "SELECT NOW()";

/// Probe executor that orchestrates credential resolution and the database
/// round trip
pub struct ProbeExecutor {
    resolver: BindingResolver,
    env: EnvSource,
    connector: Arc<dyn Connector>,
}

impl ProbeExecutor {
    /// Create a new probe executor
    pub fn new(resolver: BindingResolver, env: EnvSource, connector: Arc<dyn Connector>) -> Self {
        Self {
            resolver,
            env,
            connector,
        }
    }

    /// Resolve credentials, connect, read the server time, and close.
    ///
    /// The session is closed on every path once it has been opened. A query
    /// error takes precedence over a close error.
    pub async fn check(&self) -> Result<String, BindcheckError> {
        let credentials = self.resolver.resolve(&self.env)?;
        debug!(
            connector = self.connector.connector_type(),
            address = %credentials.address(),
            "Opening connection"
        );

        let mut session = self.connector.connect(&credentials).await?;
        let queried = session.query_scalar(TIME_QUERY).await;
        let closed = session.close().await;

        let value = match (queried, closed) {
            (Ok(value), Ok(())) => value,
            (Ok(_), Err(e)) => return Err(e),
            (Err(e), Ok(())) => return Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close connection after query error: {}", close_err);
                return Err(e);
            }
        };

        value.ok_or_else(|| {
            BindcheckError::QueryExecution(format!("{} returned no value", TIME_QUERY))
        })
    }

    /// Run a probe and turn the outcome into a response
    pub async fn probe(&self) -> ProbeResponse {
        match self.check().await {
            Ok(time) => {
                info!(service = self.resolver.service(), "Connected to database, time is {}", time);
                ProbeResponse::connected(time)
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::Configuration => {
                        warn!(service = self.resolver.service(), "Service binding unusable: {}", e)
                    }
                    _ => error!(service = self.resolver.service(), "Database probe failed: {}", e),
                }
                ProbeResponse::failed(e.to_string())
            }
        }
    }

    /// The service key being resolved
    pub fn service(&self) -> &str {
        self.resolver.service()
    }

    /// The environment the binding is read from
    pub fn env(&self) -> &EnvSource {
        &self.env
    }

    /// Get the connector type name
    pub fn connector_type(&self) -> &'static str {
        self.connector.connector_type()
    }
}
