//! Connector trait definition

use async_trait::async_trait;
use bindcheck_core::{BindcheckError, ConnectionCredentials};

/// Trait for database connectors
///
/// A connector opens a fresh [`Session`] per call. Nothing is pooled or
/// cached between calls.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a new connection with the given credentials
    async fn connect(
        &self,
        credentials: &ConnectionCredentials,
    ) -> Result<Box<dyn Session>, BindcheckError>;

    /// Get the connector type name
    fn connector_type(&self) -> &'static str;
}

/// A single open database connection
#[async_trait]
pub trait Session: Send {
    /// Execute a statement and return the first column of the first row as
    /// text. `None` when there is no row or the value is NULL.
    async fn query_scalar(&mut self, statement: &str) -> Result<Option<String>, BindcheckError>;

    /// Close the connection and release resources
    async fn close(self: Box<Self>) -> Result<(), BindcheckError>;
}
